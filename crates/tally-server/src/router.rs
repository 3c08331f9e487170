use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::dto::endpoints;
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all Tally endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ADD, post(handler::add_handler))
        .route(endpoints::SUM, get(handler::sum_handler))
        .route(endpoints::HISTORY, get(handler::history_handler))
        .route(endpoints::DELETE, delete(handler::delete_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
