pub mod admin;
pub mod health;
pub mod slots;

use axum::Router;

use crate::state::AppState;

/// Build the route tree served at the root.
///
/// ```text
/// /slots                                 list (GET, ?floor, status, overstay)
/// /slots/stats                           occupancy counters (GET)
/// /slots/{id}                            single slot (GET)
/// /slots/{id}/toggle                     occupy / free (POST)
/// /slots/{id}/maintenance                lock / unlock (POST)
/// /slots/{id}/simulate-overstay          force overstay (POST)
///
/// /api/reset                             reset every slot (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/slots", slots::router())
        .nest("/api", admin::router())
}
