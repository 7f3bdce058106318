use serde::Deserialize;

/// Query string of `GET /ping/{hostname}`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PingQuery {
    pub timeout_ms: Option<u64>,
}

/// Body of `GET /resolve/{hostname}`: the addresses on success, a single
/// diagnostic line otherwise.
pub type ResolveResponse = Vec<String>;
