//! Route definitions for slot occupancy.
//!
//! Mounted at `/slots` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::slots;
use crate::state::AppState;

/// Slot routes.
///
/// ```text
/// GET    /                          -> list_slots
/// GET    /stats                     -> slot_stats
/// GET    /{id}                      -> get_slot
/// POST   /{id}/toggle               -> toggle_slot
/// POST   /{id}/maintenance          -> set_maintenance
/// POST   /{id}/simulate-overstay    -> simulate_overstay
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(slots::list_slots))
        .route("/stats", get(slots::slot_stats))
        .route("/{id}", get(slots::get_slot))
        .route("/{id}/toggle", post(slots::toggle_slot))
        .route("/{id}/maintenance", post(slots::set_maintenance))
        .route("/{id}/simulate-overstay", post(slots::simulate_overstay))
}
