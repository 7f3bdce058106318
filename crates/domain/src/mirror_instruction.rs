use crate::config::{MirrorConfig, RangePolicy, WAIT_CEILING_MS};
use crate::validators::{validate_header_name, validate_header_value};
use crate::DomainError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_STATUS_CODE: u16 = 200;
pub const MIN_STATUS_CODE: i64 = 100;
pub const MAX_STATUS_CODE: i64 = 599;

/// Bounds applied while building a [`MirrorInstruction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionLimits {
    pub max_wait_ms: u64,
    pub policy: RangePolicy,
}

impl Default for InstructionLimits {
    fn default() -> Self {
        Self {
            max_wait_ms: WAIT_CEILING_MS,
            policy: RangePolicy::Clamp,
        }
    }
}

impl From<&MirrorConfig> for InstructionLimits {
    fn from(config: &MirrorConfig) -> Self {
        Self {
            max_wait_ms: config.max_wait_ms.min(WAIT_CEILING_MS),
            policy: config.out_of_range,
        }
    }
}

/// Structured JSON form of a mirror instruction, before defaulting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MirrorInstructionPayload {
    pub status_code: i64,
    pub wait_ms: i64,
    pub response_body: Option<String>,
    pub response_headers: Option<BTreeMap<String, String>>,
}

/// Canonical, immutable description of the response a mirror request wants.
///
/// Defaulting and range handling happen once, in [`MirrorInstruction::new`]:
/// a status code of 0 becomes 200, a negative wait becomes 0, and a wait above
/// the configured maximum is clamped or rejected according to the
/// [`RangePolicy`]. Status codes outside 100..=599 are always rejected since
/// there is no sensible nearest code to substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorInstruction {
    status_code: u16,
    wait_ms: u64,
    response_body: String,
    response_headers: BTreeMap<String, String>,
}

impl MirrorInstruction {
    pub fn new(
        status_code: i64,
        wait_ms: i64,
        response_body: Option<String>,
        response_headers: BTreeMap<String, String>,
        limits: &InstructionLimits,
    ) -> Result<Self, DomainError> {
        let status_code = Self::normalize_status(status_code)?;
        let wait_ms = Self::normalize_wait(wait_ms, limits)?;

        for (name, value) in &response_headers {
            validate_header_name(name).map_err(DomainError::InvalidInstruction)?;
            validate_header_value(name, value).map_err(DomainError::InvalidInstruction)?;
        }

        Ok(Self {
            status_code,
            wait_ms,
            response_body: response_body.unwrap_or_default(),
            response_headers,
        })
    }

    pub fn from_payload(
        payload: MirrorInstructionPayload,
        limits: &InstructionLimits,
    ) -> Result<Self, DomainError> {
        Self::new(
            payload.status_code,
            payload.wait_ms,
            payload.response_body,
            payload.response_headers.unwrap_or_default(),
            limits,
        )
    }

    fn normalize_status(status_code: i64) -> Result<u16, DomainError> {
        if status_code == 0 {
            return Ok(DEFAULT_STATUS_CODE);
        }
        if !(MIN_STATUS_CODE..=MAX_STATUS_CODE).contains(&status_code) {
            return Err(DomainError::InvalidInstruction(format!(
                "statusCode must be between {MIN_STATUS_CODE} and {MAX_STATUS_CODE}, got {status_code}"
            )));
        }
        Ok(status_code as u16)
    }

    fn normalize_wait(wait_ms: i64, limits: &InstructionLimits) -> Result<u64, DomainError> {
        let wait_ms = wait_ms.max(0) as u64;
        if wait_ms <= limits.max_wait_ms {
            return Ok(wait_ms);
        }
        match limits.policy {
            RangePolicy::Clamp => Ok(limits.max_wait_ms),
            RangePolicy::Reject => Err(DomainError::InvalidInstruction(format!(
                "waitMs must not exceed {}, got {wait_ms}",
                limits.max_wait_ms
            ))),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }

    pub fn response_body(&self) -> &str {
        &self.response_body
    }

    pub fn response_headers(&self) -> &BTreeMap<String, String> {
        &self.response_headers
    }
}
