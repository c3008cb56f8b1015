use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all topboard endpoints.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route(
            "/v1/scores",
            get(handler::list_scores)
                .post(handler::submit_score)
                .delete(handler::clear_scores),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
