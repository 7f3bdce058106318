use ferrous_mirror_application::services::InstructionNormalizer;
use ferrous_mirror_application::use_cases::{
    MirrorRequestUseCase, PingHostUseCase, ResolveHostUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub normalizer: Arc<InstructionNormalizer>,
    pub mirror: Arc<MirrorRequestUseCase>,
    pub resolve_host: Arc<ResolveHostUseCase>,
    pub ping_host: Arc<PingHostUseCase>,
    pub default_ping_timeout_ms: u64,
}
