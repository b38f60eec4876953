//! Handlers for slot occupancy endpoints.
//!
//! Listing, lookup, occupancy toggle, maintenance lock, overstay simulation
//! and dashboard counters. Slots are returned as bare JSON objects.

use axum::extract::{Path, Query, State};
use axum::Json;
use cyberpark_core::slot::{Slot, SlotStatus};
use cyberpark_core::stats::OccupancyStats;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query params
// ---------------------------------------------------------------------------

/// Optional filters for `GET /slots`.
#[derive(Debug, Default, Deserialize)]
pub struct SlotListParams {
    pub floor: Option<String>,
    pub status: Option<String>,
    pub overstay: Option<bool>,
}

impl SlotListParams {
    fn parsed_status(&self) -> AppResult<Option<SlotStatus>> {
        self.status
            .as_deref()
            .map(|s| s.parse::<SlotStatus>().map_err(|e| AppError::BadRequest(e.to_string())))
            .transpose()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /slots
///
/// List slots after recomputing overstay flags over the whole inventory.
/// Filters apply to the recomputed result.
pub async fn list_slots(
    State(state): State<AppState>,
    Query(params): Query<SlotListParams>,
) -> AppResult<Json<Vec<Slot>>> {
    let status = params.parsed_status()?;
    let slots = state.controller.list_slots().await?;

    let slots = slots
        .into_iter()
        .filter(|s| params.floor.as_ref().map_or(true, |f| &s.floor == f))
        .filter(|s| status.map_or(true, |st| s.status == st))
        .filter(|s| params.overstay.map_or(true, |o| s.is_overstay == o))
        .collect();

    Ok(Json(slots))
}

/// GET /slots/stats
pub async fn slot_stats(State(state): State<AppState>) -> AppResult<Json<OccupancyStats>> {
    Ok(Json(state.controller.stats().await?))
}

/// GET /slots/{id}
pub async fn get_slot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Slot>> {
    Ok(Json(state.controller.get_slot(&id).await?))
}

/// POST /slots/{id}/toggle
///
/// Occupy a free slot or free an occupied one. Locked slots come back
/// unchanged.
pub async fn toggle_slot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Slot>> {
    Ok(Json(state.controller.toggle(&id).await?))
}

/// POST /slots/{id}/maintenance
///
/// Toggle the maintenance lock. 400 when locking an occupied slot.
pub async fn set_maintenance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Slot>> {
    Ok(Json(state.controller.set_maintenance(&id).await?))
}

/// POST /slots/{id}/simulate-overstay
pub async fn simulate_overstay(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Slot>> {
    Ok(Json(state.controller.simulate_overstay(&id).await?))
}
