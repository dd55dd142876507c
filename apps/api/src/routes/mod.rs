pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::research::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/research/process", post(handlers::handle_process))
        .route(
            "/api/research/operations",
            get(handlers::handle_list_operations),
        )
        .with_state(state)
}
