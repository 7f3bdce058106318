pub mod host_resolver;
pub mod reachability_probe;

pub use host_resolver::HostResolver;
pub use reachability_probe::ReachabilityProbe;
