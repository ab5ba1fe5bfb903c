pub mod health;
pub mod page;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route(page::RESUME_ROUTE, get(page::handle_resume))
        .route("/api/v1/portfolio", get(page::handle_portfolio))
        .route("/health", get(health::health_handler))
        .with_state(state)
}
