//! Route definitions for system-wide operations.
//!
//! Mounted at `/api` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// POST   /reset    -> reset_system
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/reset", post(admin::reset_system))
}
