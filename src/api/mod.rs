pub mod categories;
pub mod dorks;
pub mod server;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::state::AppState;

/// API routes without middleware layers / 不含中间件的API路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(server::health_check))
        .route("/api/generate", post(dorks::generate_dork))
        .route("/api/dorks", get(dorks::list_dorks).post(dorks::save_dork))
        .route("/api/dorks/:id", delete(dorks::delete_dork))
        .route("/api/categories", get(categories::get_categories))
        .with_state(state)
}
