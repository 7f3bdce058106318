pub mod ping_host;
pub mod resolve_host;

pub use ping_host::PingHostUseCase;
pub use resolve_host::ResolveHostUseCase;
