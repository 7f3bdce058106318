pub mod dns;
pub mod mirror;

pub use dns::{PingHostUseCase, ResolveHostUseCase};
pub use mirror::MirrorRequestUseCase;
