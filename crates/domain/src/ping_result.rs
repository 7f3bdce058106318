use serde::Serialize;

/// Snapshot of a single ping probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResult {
    pub hostname: String,
    pub resolved_ip: Option<String>,
    pub reachable: bool,
    pub response_time_ms: u64,
}

impl PingResult {
    pub fn new(
        hostname: impl Into<String>,
        resolved_ip: impl Into<String>,
        reachable: bool,
        response_time_ms: u64,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            resolved_ip: Some(resolved_ip.into()),
            reachable,
            response_time_ms,
        }
    }

    /// Result reported when the probe never ran because resolution failed.
    pub fn unresolved(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            resolved_ip: None,
            reachable: false,
            response_time_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let result = PingResult::new("example.com", "93.184.216.34", true, 12);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["hostname"], "example.com");
        assert_eq!(json["resolvedIp"], "93.184.216.34");
        assert_eq!(json["reachable"], true);
        assert_eq!(json["responseTimeMs"], 12);
    }

    #[test]
    fn test_unresolved_has_null_ip() {
        let json = serde_json::to_value(PingResult::unresolved("nowhere.invalid")).unwrap();

        assert!(json["resolvedIp"].is_null());
        assert_eq!(json["reachable"], false);
        assert_eq!(json["responseTimeMs"], 0);
    }
}
