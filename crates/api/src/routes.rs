use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route(
            "/mirror",
            get(handlers::mirror)
                .post(handlers::mirror)
                .put(handlers::mirror)
                .delete(handlers::mirror)
                .patch(handlers::mirror),
        )
        .route("/resolve/{hostname}", get(handlers::resolve_dns))
        .route("/ping/{hostname}", get(handlers::ping))
        .with_state(state)
}
