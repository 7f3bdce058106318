#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use ferrous_mirror_api::{create_api_routes, AppState};
use ferrous_mirror_application::ports::{HostResolver, ReachabilityProbe};
use ferrous_mirror_application::services::{
    DispatcherConfig, InstructionNormalizer, RequestSequencer, WorkerDispatcher,
};
use ferrous_mirror_application::use_cases::{
    MirrorRequestUseCase, PingHostUseCase, ResolveHostUseCase,
};
use ferrous_mirror_domain::{DnsRecordSet, DomainError, InstructionLimits};
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

// ============================================================================
// Stub collaborators
// ============================================================================

#[derive(Clone, Default)]
pub struct StubResolver {
    answers: HashMap<String, Result<Vec<IpAddr>, DomainError>>,
}

impl StubResolver {
    pub fn with_addresses(mut self, hostname: &str, addresses: &[&str]) -> Self {
        let parsed = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.answers.insert(hostname.to_string(), Ok(parsed));
        self
    }

    pub fn with_error(mut self, hostname: &str, error: DomainError) -> Self {
        self.answers.insert(hostname.to_string(), Err(error));
        self
    }
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve_all(&self, hostname: &str) -> Result<DnsRecordSet, DomainError> {
        match self.answers.get(hostname) {
            Some(Ok(addresses)) => Ok(DnsRecordSet::new(addresses.clone())),
            Some(Err(e)) => Err(e.clone()),
            None => Err(DomainError::UnknownHost(hostname.to_string())),
        }
    }
}

pub struct StubProbe(pub bool);

#[async_trait]
impl ReachabilityProbe for StubProbe {
    async fn is_reachable(&self, _address: IpAddr, _timeout: Duration) -> Result<bool, DomainError> {
        Ok(self.0)
    }
}

// ============================================================================
// App builders
// ============================================================================

pub struct TestApp {
    pub limits: InstructionLimits,
    pub pool_size: usize,
    pub expiry_slack: Duration,
    pub resolver: StubResolver,
    pub reachable: bool,
}

impl Default for TestApp {
    fn default() -> Self {
        Self {
            limits: InstructionLimits::default(),
            pool_size: 32,
            expiry_slack: Duration::from_secs(5),
            resolver: StubResolver::default(),
            reachable: true,
        }
    }
}

impl TestApp {
    pub fn router(self) -> Router {
        let dispatcher = Arc::new(WorkerDispatcher::new(DispatcherConfig {
            pool_size: self.pool_size,
            expiry_slack: self.expiry_slack,
            correlation_header: Arc::from("REQ_COUNTER"),
        }));
        let resolver: Arc<dyn HostResolver> = Arc::new(self.resolver);

        create_api_routes(AppState {
            normalizer: Arc::new(InstructionNormalizer::new(self.limits)),
            mirror: Arc::new(MirrorRequestUseCase::new(
                Arc::new(RequestSequencer::new()),
                dispatcher,
            )),
            resolve_host: Arc::new(ResolveHostUseCase::new(
                Arc::clone(&resolver),
                Duration::from_secs(2),
            )),
            ping_host: Arc::new(PingHostUseCase::new(
                resolver,
                Arc::new(StubProbe(self.reachable)),
                Duration::from_secs(2),
            )),
            default_ping_timeout_ms: 1_000,
        })
    }
}

pub fn router() -> Router {
    TestApp::default().router()
}

// ============================================================================
// Request helpers
// ============================================================================

pub struct TestResponse {
    pub status: u16,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn send_json(router: Router, method: &str, uri: &str, json: &str) -> TestResponse {
    send(
        router,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
}
