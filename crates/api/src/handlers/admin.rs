//! Handlers for system-wide operator actions.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/reset
///
/// Free and unlock every slot, clearing all timers and overstay flags.
pub async fn reset_system(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state.controller.reset_all().await?;
    Ok(Json(MessageResponse::new("System Reset")))
}
