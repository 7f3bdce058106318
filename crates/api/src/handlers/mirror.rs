use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use ferrous_mirror_application::services::{DeferredOutcome, InstructionSource};
use ferrous_mirror_domain::MirrorResponse;
use tracing::{debug, error, instrument, warn};

/// Mirrors the status, headers and body described by the request, after the
/// requested delay.
#[instrument(skip_all, name = "api_mirror", fields(method = %method))]
pub async fn mirror(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Response {
    let json_body = is_json(&headers).then_some(body.as_ref());

    let instruction = match state.normalizer.normalize(InstructionSource {
        json_body,
        params: &params,
    }) {
        Ok(instruction) => instruction,
        Err(e) => {
            debug!(error = %e, "Rejected mirror instruction");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    match state.mirror.execute(instruction).await {
        DeferredOutcome::Completed(response) => into_http_response(response),
        DeferredOutcome::Expired => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Request expired before a response was produced",
        )
            .into_response(),
        DeferredOutcome::Failed(e) => {
            error!(error = %e, "Mirror request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Request processing failed").into_response()
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}

fn into_http_response(mirrored: MirrorResponse) -> Response {
    let Ok(status) = StatusCode::from_u16(mirrored.status_code) else {
        error!(status = mirrored.status_code, "Unrepresentable status code");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    // HTTP/1.1 cannot carry an informational status as the final response;
    // hyper replaces it with 500 on the wire.
    if status.is_informational() {
        warn!(
            request_id = %mirrored.request_id,
            status = mirrored.status_code,
            "Informational status cannot be a final response over HTTP/1.1"
        );
    }

    let mut response = (status, mirrored.body).into_response();
    let target = response.headers_mut();
    for (name, value) in mirrored.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(name), Ok(value)) => {
                target.insert(name, value);
            }
            _ => warn!(request_id = %mirrored.request_id, header = %name, "Skipping unrepresentable header"),
        }
    }
    response
}
