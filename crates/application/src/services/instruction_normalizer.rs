use ferrous_mirror_domain::{
    DomainError, InstructionLimits, MirrorInstruction, MirrorInstructionPayload,
};
use std::collections::BTreeMap;

const HEADER_PREFIX: &str = "responseHeaders[";

/// Raw inputs a mirror request can carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionSource<'a> {
    /// Request body, only when the request declared a JSON content type
    pub json_body: Option<&'a [u8]>,
    /// Query parameters in arrival order
    pub params: &'a [(String, String)],
}

/// Builds a [`MirrorInstruction`] from either a JSON payload or individual
/// query parameters.
///
/// A non-blank JSON body is the only source of truth and must parse strictly.
/// Query parameters are lenient: a malformed integer falls back to 0, which
/// the instruction then defaults as usual.
#[derive(Debug, Clone, Default)]
pub struct InstructionNormalizer {
    limits: InstructionLimits,
}

impl InstructionNormalizer {
    pub fn new(limits: InstructionLimits) -> Self {
        Self { limits }
    }

    pub fn normalize(&self, source: InstructionSource<'_>) -> Result<MirrorInstruction, DomainError> {
        match source.json_body.filter(|body| !is_blank(body)) {
            Some(body) => self.from_json(body),
            None => self.from_params(source.params),
        }
    }

    pub fn from_json(&self, body: &[u8]) -> Result<MirrorInstruction, DomainError> {
        let payload: MirrorInstructionPayload = serde_json::from_slice(body)
            .map_err(|e| DomainError::InvalidInstruction(format!("malformed JSON payload: {e}")))?;
        MirrorInstruction::from_payload(payload, &self.limits)
    }

    pub fn from_params(&self, params: &[(String, String)]) -> Result<MirrorInstruction, DomainError> {
        let mut status_code = None;
        let mut wait_ms = None;
        let mut response_body = None;
        let mut response_headers = BTreeMap::new();

        // First occurrence wins for repeated names.
        for (name, value) in params {
            match name.as_str() {
                "statusCode" if status_code.is_none() => status_code = Some(parse_int_or_zero(value)),
                "waitMs" if wait_ms.is_none() => wait_ms = Some(parse_int_or_zero(value)),
                "responseBody" if response_body.is_none() => response_body = Some(value.clone()),
                other => {
                    if let Some(key) = header_key(other) {
                        response_headers
                            .entry(key.to_string())
                            .or_insert_with(|| value.clone());
                    }
                }
            }
        }

        MirrorInstruction::new(
            status_code.unwrap_or(0),
            wait_ms.unwrap_or(0),
            response_body,
            response_headers,
            &self.limits,
        )
    }
}

fn header_key(name: &str) -> Option<&str> {
    name.strip_prefix(HEADER_PREFIX)?
        .strip_suffix(']')
        .filter(|key| !key.is_empty())
}

fn parse_int_or_zero(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}
