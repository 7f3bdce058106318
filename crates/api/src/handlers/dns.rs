use crate::{dto::PingQuery, dto::ResolveResponse, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use ferrous_mirror_domain::{DomainError, PingResult};
use std::time::Duration;
use tracing::{error, instrument, warn};

#[instrument(skip(state), name = "api_resolve_dns")]
pub async fn resolve_dns(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
) -> (StatusCode, Json<ResolveResponse>) {
    match state.resolve_host.execute(&hostname).await {
        Ok(records) if records.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(vec![format!(
                "No IP addresses found for hostname '{hostname}'."
            )]),
        ),
        Ok(records) => (StatusCode::OK, Json(records.to_strings())),
        Err(DomainError::UnknownHost(_)) => (
            StatusCode::NOT_FOUND,
            Json(vec![format!("Hostname '{hostname}' could not be resolved.")]),
        ),
        Err(DomainError::ResolutionDenied(_)) => {
            warn!(hostname = %hostname, "Resolution denied");
            (
                StatusCode::FORBIDDEN,
                Json(vec![
                    "DNS resolution denied due to security restrictions.".to_string()
                ]),
            )
        }
        Err(e) => {
            error!(error = %e, "Failed to resolve hostname");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(vec!["An unexpected error occurred.".to_string()]),
            )
        }
    }
}

#[instrument(skip(state), name = "api_ping")]
pub async fn ping(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
    Query(query): Query<PingQuery>,
) -> (StatusCode, Json<PingResult>) {
    let timeout_ms = query.timeout_ms.unwrap_or(state.default_ping_timeout_ms);

    match state
        .ping_host
        .execute(&hostname, Duration::from_millis(timeout_ms))
        .await
    {
        Ok(result) if result.reachable => (StatusCode::OK, Json(result)),
        Ok(result) => (StatusCode::REQUEST_TIMEOUT, Json(result)),
        Err(DomainError::UnknownHost(_)) => {
            (StatusCode::NOT_FOUND, Json(PingResult::unresolved(hostname)))
        }
        Err(DomainError::ResolutionDenied(_)) => {
            warn!(hostname = %hostname, "Resolution denied");
            (StatusCode::FORBIDDEN, Json(PingResult::unresolved(hostname)))
        }
        Err(e) => {
            error!(error = %e, "Ping failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PingResult::unresolved(hostname)),
            )
        }
    }
}
