//! Configuration module for Ferrous Mirror
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listen address and port
//! - `mirror`: Worker pool and delay bounds for mirror requests
//! - `dns`: Resolution and ping probe settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod mirror;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use mirror::{MirrorConfig, RangePolicy, WAIT_CEILING_MS};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
