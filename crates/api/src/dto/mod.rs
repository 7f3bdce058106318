pub mod dns;

pub use dns::{PingQuery, ResolveResponse};
