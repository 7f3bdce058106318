//! Ferrous Mirror Domain Layer
pub mod config;
pub mod dns_record_set;
pub mod errors;
pub mod mirror_instruction;
pub mod mirror_response;
pub mod ping_result;
pub mod request_id;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError, RangePolicy};
pub use dns_record_set::DnsRecordSet;
pub use errors::DomainError;
pub use mirror_instruction::{InstructionLimits, MirrorInstruction, MirrorInstructionPayload};
pub use mirror_response::MirrorResponse;
pub use ping_result::PingResult;
pub use request_id::RequestId;
