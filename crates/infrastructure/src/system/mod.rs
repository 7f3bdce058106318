pub mod system_resolver;
pub mod tcp_reachability;

pub use system_resolver::SystemHostResolver;
pub use tcp_reachability::TcpReachabilityProbe;
