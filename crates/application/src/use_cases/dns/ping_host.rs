use crate::ports::{HostResolver, ReachabilityProbe};
use ferrous_mirror_domain::{DomainError, PingResult};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Allowance on top of the probe timeout before the probe is abandoned.
const PROBE_GRACE: Duration = Duration::from_millis(250);

/// Resolves one address and probes it.
///
/// Resolution failures short-circuit: the probe never runs for a name that
/// did not resolve. `response_time_ms` covers the probe alone.
pub struct PingHostUseCase {
    resolver: Arc<dyn HostResolver>,
    probe: Arc<dyn ReachabilityProbe>,
    resolve_timeout: Duration,
    max_probe_timeout: Duration,
}

impl PingHostUseCase {
    pub fn new(
        resolver: Arc<dyn HostResolver>,
        probe: Arc<dyn ReachabilityProbe>,
        resolve_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            probe,
            resolve_timeout,
            max_probe_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_probe_timeout(mut self, max: Duration) -> Self {
        self.max_probe_timeout = max;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, hostname: &str, timeout: Duration) -> Result<PingResult, DomainError> {
        let timeout = timeout.min(self.max_probe_timeout);
        let started = Instant::now();

        let address = tokio::time::timeout(self.resolve_timeout, self.resolver.resolve_one(hostname))
            .await
            .map_err(|_| {
                DomainError::ResolutionError(format!("resolution of '{hostname}' timed out"))
            })??;

        let probe_started = Instant::now();
        let reachable =
            match tokio::time::timeout(timeout + PROBE_GRACE, self.probe.is_reachable(address, timeout))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    warn!(%address, "Reachability probe overran its timeout");
                    false
                }
            };
        let response_time_ms = probe_started.elapsed().as_millis() as u64;

        debug!(
            hostname,
            %address,
            reachable,
            response_time_ms,
            total_ms = started.elapsed().as_millis() as u64,
            "Ping finished"
        );

        Ok(PingResult::new(hostname, address.to_string(), reachable, response_time_ms))
    }
}
