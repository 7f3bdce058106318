pub mod dns;
pub mod health;
pub mod index;
pub mod mirror;

pub use dns::{ping, resolve_dns};
pub use health::health_check;
pub use index::index;
pub use mirror::mirror;
