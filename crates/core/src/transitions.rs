//! Slot occupancy state machine.
//!
//! Pure functions from the current [`SlotState`] to the next one. The
//! controller loads a slot, calls one of these and writes the result back.
//!
//! ```text
//! FREE ──toggle──▶ OCCUPIED ──toggle──▶ FREE
//! FREE ──lock────▶ RESERVED ──unlock──▶ FREE
//! OCCUPIED ──lock──▶ rejected (free it first)
//! any ──reset──▶ FREE
//! ```

use crate::error::CoreError;
use crate::overstay::SIMULATED_OVERSTAY_AGE_MS;
use crate::slot::{SlotState, SlotStatus};
use crate::types::EpochMillis;

/// Occupancy toggle.
///
/// Returns `None` for a locked slot (no change). Any non-free status,
/// including an unlocked RESERVED, goes to FREE.
pub fn toggle(current: &SlotState, now: EpochMillis) -> Option<SlotState> {
    if current.is_locked {
        return None;
    }
    match current.status {
        SlotStatus::Free => Some(SlotState::occupied_since(now)),
        SlotStatus::Occupied | SlotStatus::Reserved => Some(SlotState::FREE),
    }
}

/// Maintenance lock toggle.
///
/// Locking parks the slot in RESERVED, unlocking returns it to FREE. An
/// unlocked, occupied slot cannot be locked.
pub fn toggle_lock(current: &SlotState) -> Result<SlotState, CoreError> {
    if !current.is_locked && current.status == SlotStatus::Occupied {
        return Err(CoreError::InvalidState(
            "Cannot lock occupied slot".to_string(),
        ));
    }
    if current.is_locked {
        Ok(SlotState::FREE)
    } else {
        Ok(SlotState::LOCKED)
    }
}

/// State forced by `simulate-overstay`, regardless of the current one.
pub fn simulated_overstay(now: EpochMillis) -> SlotState {
    SlotState {
        status: SlotStatus::Occupied,
        is_locked: false,
        entry_time: Some(now - SIMULATED_OVERSTAY_AGE_MS),
        is_overstay: true,
    }
}

/// Target state of a system reset.
pub const RESET: SlotState = SlotState::FREE;
