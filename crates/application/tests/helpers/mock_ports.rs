use async_trait::async_trait;
use ferrous_mirror_application::ports::{HostResolver, ReachabilityProbe};
use ferrous_mirror_domain::{DnsRecordSet, DomainError};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock HostResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHostResolver {
    records: Arc<RwLock<HashMap<String, Result<Vec<IpAddr>, DomainError>>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_addresses(&self, hostname: &str, addresses: &[&str]) {
        let parsed = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.records
            .write()
            .await
            .insert(hostname.to_string(), Ok(parsed));
    }

    pub async fn set_error(&self, hostname: &str, error: DomainError) {
        self.records
            .write()
            .await
            .insert(hostname.to_string(), Err(error));
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn resolve_all(&self, hostname: &str) -> Result<DnsRecordSet, DomainError> {
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
        match self.records.read().await.get(hostname) {
            Some(Ok(addresses)) => Ok(DnsRecordSet::new(addresses.clone())),
            Some(Err(e)) => Err(e.clone()),
            None => Err(DomainError::UnknownHost(hostname.to_string())),
        }
    }
}

// ============================================================================
// Mock ReachabilityProbe
// ============================================================================

#[derive(Clone)]
pub struct MockReachabilityProbe {
    reachable: bool,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl MockReachabilityProbe {
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::reachable()
        }
    }

    /// Probe that sleeps before answering, ignoring the requested timeout.
    pub fn hanging(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::reachable()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReachabilityProbe for MockReachabilityProbe {
    async fn is_reachable(&self, _address: IpAddr, _timeout: Duration) -> Result<bool, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.reachable)
    }
}
