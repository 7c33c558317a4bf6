pub mod feedback;
pub mod generate;
pub mod health;
pub mod session;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{docs::ApiDoc, middleware::rate_limit, AppState};

/// Limits applied per route group, in requests per second.
#[derive(Debug, Clone, Copy)]
pub struct RateLimits {
    pub api_rps: u32,
    pub generate_rps: u32,
}

pub fn router(state: AppState, limits: RateLimits) -> Router {
    let base_routes = Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));

    let api = Router::new()
        .route("/api/sessions", post(session::create_session))
        .route("/api/sessions/:id", get(session::get_session))
        .route("/api/sessions/:id/history", get(session::get_session_history))
        .route("/api/feedback", post(feedback::submit_feedback))
        .route("/api/examples", get(generate::list_examples))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(limits.api_rps),
            rate_limit::rps_middleware,
        ));

    let generate_api = Router::new()
        .route("/api/generate", post(generate::generate_next_question))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(limits.generate_rps),
            rate_limit::rps_middleware,
        ));

    base_routes
        .merge(api)
        .merge(generate_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
