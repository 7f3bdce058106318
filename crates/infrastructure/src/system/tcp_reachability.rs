use async_trait::async_trait;
use ferrous_mirror_application::ports::ReachabilityProbe;
use ferrous_mirror_domain::DomainError;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// Reachability via a TCP connect to a fixed port.
///
/// Both an accepted connection and an active refusal prove the host is up.
/// Timeouts and unreachable-network errors report `false`. A connect the
/// local host is not permitted to make is a probe failure, not an answer
/// about the target.
#[derive(Debug, Clone)]
pub struct TcpReachabilityProbe {
    port: u16,
}

impl TcpReachabilityProbe {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    fn interpret(target: SocketAddr, result: io::Result<TcpStream>) -> Result<bool, DomainError> {
        match result {
            Ok(_stream) => Ok(true),
            Err(e) => Self::interpret_error(target, &e),
        }
    }

    fn interpret_error(target: SocketAddr, error: &io::Error) -> Result<bool, DomainError> {
        match error.kind() {
            io::ErrorKind::ConnectionRefused => Ok(true),
            io::ErrorKind::PermissionDenied => Err(DomainError::ProbeFailed(format!(
                "connect to {target} not permitted: {error}"
            ))),
            _ => {
                debug!(%target, error = %error, "Reachability connect failed");
                Ok(false)
            }
        }
    }
}

impl Default for TcpReachabilityProbe {
    fn default() -> Self {
        Self::new(7)
    }
}

#[async_trait]
impl ReachabilityProbe for TcpReachabilityProbe {
    async fn is_reachable(&self, address: IpAddr, timeout: Duration) -> Result<bool, DomainError> {
        let target = SocketAddr::new(address, self.port);

        match tokio::time::timeout(timeout, TcpStream::connect(target)).await {
            Ok(result) => Self::interpret(target, result),
            Err(_) => {
                debug!(%target, timeout_ms = timeout.as_millis() as u64, "Reachability probe timed out");
                Ok(false)
            }
        }
    }
}
