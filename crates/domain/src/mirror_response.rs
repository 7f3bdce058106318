use crate::RequestId;

/// Declarative description of a mirrored HTTP response.
///
/// The transport layer turns this into a wire response; nothing here knows
/// about sockets or HTTP libraries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorResponse {
    pub request_id: RequestId,
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl MirrorResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
