use ferrous_mirror_domain::{InstructionLimits, RangePolicy};
use std::time::{Duration, Instant};

mod helpers;
use helpers::{get, router, send_json, TestApp};

#[tokio::test]
async fn test_get_mirror_defaults_to_200_with_empty_body() {
    let response = get(router(), "/mirror").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "");
    assert_eq!(response.header("REQ_COUNTER"), Some("1"));
}

#[tokio::test]
async fn test_get_mirror_uses_query_parameters() {
    let response = get(
        router(),
        "/mirror?statusCode=503&responseBody=Service%20unavailable&responseHeaders[Retry-After]=30",
    )
    .await;

    assert_eq!(response.status, 503);
    assert_eq!(response.body, "Service unavailable");
    assert_eq!(response.header("Retry-After"), Some("30"));
    assert!(response
        .header("content-type")
        .is_some_and(|ct| ct.starts_with("text/plain")));
}

#[tokio::test]
async fn test_status_codes_round_trip() {
    for status in [200, 201, 204, 302, 400, 404, 418, 429, 500, 503, 599] {
        let response = get(router(), &format!("/mirror?statusCode={status}")).await;
        assert_eq!(response.status, status);
        assert_eq!(response.body, "");
    }
}

#[tokio::test]
async fn test_informational_status_is_handed_to_the_transport_unchanged() {
    for status in [100, 102, 103] {
        let response = get(router(), &format!("/mirror?statusCode={status}")).await;
        assert_eq!(response.status, status);
        assert!(response.header("REQ_COUNTER").is_some());
    }
}

#[tokio::test]
async fn test_header_round_trip_with_correlation_header() {
    let response = send_json(
        router(),
        "POST",
        "/mirror",
        r#"{"statusCode":200,"responseHeaders":{"X-Test":"123","X-Mode":"GET"}}"#,
    )
    .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.header("X-Test"), Some("123"));
    assert_eq!(response.header("X-Mode"), Some("GET"));
    assert!(response.header("REQ_COUNTER").is_some());
}

#[tokio::test]
async fn test_json_body_wins_over_query() {
    let response = send_json(
        router(),
        "PUT",
        "/mirror?statusCode=500",
        r#"{"statusCode":202,"responseBody":"{\"result\": \"ok\"}","responseHeaders":{"Content-Type":"application/json"}}"#,
    )
    .await;

    assert_eq!(response.status, 202);
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(response.json()["result"], "ok");
}

#[tokio::test]
async fn test_all_write_methods_are_mirrored() {
    for method in ["POST", "PUT", "DELETE", "PATCH"] {
        let response = send_json(router(), method, "/mirror", r#"{"statusCode":418}"#).await;
        assert_eq!(response.status, 418, "method {method}");
    }
}

#[tokio::test]
async fn test_post_without_json_content_type_reads_query() {
    let response = helpers::send(
        router(),
        axum::http::Request::builder()
            .method("POST")
            .uri("/mirror?statusCode=207")
            .header("content-type", "text/plain")
            .body(axum::body::Body::from("{\"statusCode\":500}"))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status, 207);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let response = send_json(router(), "POST", "/mirror", r#"{"statusCode":"abc"}"#).await;

    assert_eq!(response.status, 400);
    assert!(response.body.contains("malformed JSON payload"));
}

#[tokio::test]
async fn test_out_of_range_status_is_bad_request() {
    let response = send_json(router(), "POST", "/mirror", r#"{"statusCode":600}"#).await;
    assert_eq!(response.status, 400);

    let response = get(router(), "/mirror?statusCode=42").await;
    assert_eq!(response.status, 400);
}

#[tokio::test]
async fn test_malformed_query_integers_fall_back_to_defaults() {
    let response = get(router(), "/mirror?statusCode=abc&waitMs=-5").await;

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_wait_is_applied() {
    let started = Instant::now();
    let response = get(router(), "/mirror?waitMs=200&responseBody=late").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "late");
    assert!(started.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_wait_above_max_is_clamped_by_default() {
    let app = TestApp {
        limits: InstructionLimits {
            max_wait_ms: 100,
            policy: RangePolicy::Clamp,
        },
        ..TestApp::default()
    };

    let started = Instant::now();
    let response = get(app.router(), "/mirror?waitMs=60000").await;

    assert_eq!(response.status, 200);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_wait_above_max_is_rejected_under_reject_policy() {
    let app = TestApp {
        limits: InstructionLimits {
            max_wait_ms: 60_000,
            policy: RangePolicy::Reject,
        },
        ..TestApp::default()
    };

    let response = send_json(app.router(), "POST", "/mirror", r#"{"waitMs":60001}"#).await;

    assert_eq!(response.status, 400);
    assert!(response.body.contains("waitMs"));
}

#[tokio::test]
async fn test_expired_request_is_internal_error() {
    let app = TestApp {
        pool_size: 1,
        expiry_slack: Duration::from_millis(150),
        ..TestApp::default()
    };
    let router = app.router();

    let blocker = tokio::spawn(get(router.clone(), "/mirror?waitMs=300"));
    tokio::time::sleep(Duration::from_millis(20)).await;
    let starved = get(router, "/mirror?statusCode=201").await;

    assert_eq!(starved.status, 500);
    assert!(starved.header("REQ_COUNTER").is_none());
    assert_eq!(blocker.await.unwrap().status, 200);
}

#[tokio::test]
async fn test_concurrent_requests_complete_by_delay() {
    let router = router();

    let slow = tokio::spawn(get(router.clone(), "/mirror?waitMs=1000&responseBody=slow"));
    tokio::time::sleep(Duration::from_millis(20)).await;

    let started = Instant::now();
    let fast = get(router, "/mirror?responseBody=fast").await;

    assert_eq!(fast.body, "fast");
    assert!(started.elapsed() < Duration::from_millis(500));
    assert!(!slow.is_finished());
    assert_eq!(slow.await.unwrap().body, "slow");
}

#[tokio::test]
async fn test_invalid_header_name_is_bad_request() {
    let response = get(router(), "/mirror?responseHeaders[Bad%20Name]=x").await;

    assert_eq!(response.status, 400);
}

#[tokio::test]
async fn test_health_and_index() {
    let health = get(router(), "/health").await;
    assert_eq!(health.status, 200);
    assert_eq!(health.body, "OK");

    let index = get(router(), "/").await;
    assert_eq!(index.status, 200);
    assert!(index.body.contains("Ferrous Mirror"));
    assert!(index.body.contains(env!("CARGO_PKG_VERSION")));
}
