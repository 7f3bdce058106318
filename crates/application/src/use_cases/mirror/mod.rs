pub mod mirror_request;

pub use mirror_request::MirrorRequestUseCase;
