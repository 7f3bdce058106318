use ferrous_mirror_api::AppState;
use ferrous_mirror_application::ports::{HostResolver, ReachabilityProbe};
use ferrous_mirror_application::services::{
    DispatcherConfig, InstructionNormalizer, RequestSequencer, WorkerDispatcher,
};
use ferrous_mirror_application::use_cases::{
    MirrorRequestUseCase, PingHostUseCase, ResolveHostUseCase,
};
use ferrous_mirror_domain::{Config, InstructionLimits};
use ferrous_mirror_infrastructure::{SystemHostResolver, TcpReachabilityProbe};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Everything the web server needs, wired from configuration.
pub struct Services {
    pub state: AppState,
    pub dispatcher: Arc<WorkerDispatcher>,
}

impl Services {
    pub fn build(config: &Config, shutdown: CancellationToken) -> Self {
        let dispatcher = Arc::new(
            WorkerDispatcher::new(DispatcherConfig::from(&config.mirror)).with_cancellation(shutdown),
        );
        let sequencer = Arc::new(RequestSequencer::new());

        let resolver: Arc<dyn HostResolver> = Arc::new(SystemHostResolver::new());
        let probe: Arc<dyn ReachabilityProbe> = Arc::new(TcpReachabilityProbe::new(config.dns.probe_port));
        let resolve_timeout = Duration::from_millis(config.dns.resolve_timeout_ms);

        let state = AppState {
            normalizer: Arc::new(InstructionNormalizer::new(InstructionLimits::from(
                &config.mirror,
            ))),
            mirror: Arc::new(MirrorRequestUseCase::new(sequencer, Arc::clone(&dispatcher))),
            resolve_host: Arc::new(ResolveHostUseCase::new(
                Arc::clone(&resolver),
                resolve_timeout,
            )),
            ping_host: Arc::new(
                PingHostUseCase::new(resolver, probe, resolve_timeout).with_max_probe_timeout(
                    Duration::from_millis(config.dns.max_ping_timeout_ms),
                ),
            ),
            default_ping_timeout_ms: config.dns.default_ping_timeout_ms,
        };

        Self { state, dispatcher }
    }
}
