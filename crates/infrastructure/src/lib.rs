//! Ferrous Mirror Infrastructure Layer
pub mod system;

pub use system::{SystemHostResolver, TcpReachabilityProbe};
