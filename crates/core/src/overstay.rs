//! Overstay derivation.
//!
//! `is_overstay` is cached on the slot but only ever recomputed when slots
//! are read, so it is accurate as of the last listing, not continuously.

use crate::slot::{SlotState, SlotStatus};
use crate::types::EpochMillis;

/// Continuous occupancy longer than this (2 hours) is an overstay.
pub const OVERSTAY_THRESHOLD_MS: i64 = 2 * 60 * 60 * 1000;

/// How far back `simulate-overstay` places the entry time (3 hours).
pub const SIMULATED_OVERSTAY_AGE_MS: i64 = 3 * 60 * 60 * 1000;

/// Whether a vehicle that entered at `entry_time` has overstayed at `now`.
pub fn has_overstayed(entry_time: EpochMillis, now: EpochMillis) -> bool {
    now.saturating_sub(entry_time) > OVERSTAY_THRESHOLD_MS
}

/// Recompute the overstay flag for one slot.
///
/// Returns the new state only when the flag changes:
/// - an occupied slot past the threshold gets the flag set;
/// - a slot that is no longer occupied has a stale flag cleared.
///
/// An occupied slot that is already flagged keeps the flag.
pub fn refresh(state: &SlotState, now: EpochMillis) -> Option<SlotState> {
    match (state.status, state.entry_time) {
        (SlotStatus::Occupied, Some(entry)) => {
            if !state.is_overstay && has_overstayed(entry, now) {
                Some(SlotState {
                    is_overstay: true,
                    ..*state
                })
            } else {
                None
            }
        }
        (SlotStatus::Occupied, None) => None,
        _ if state.is_overstay => Some(SlotState {
            is_overstay: false,
            ..*state
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: EpochMillis = 1_700_000_000_000;

    #[test]
    fn threshold_is_strict() {
        assert!(!has_overstayed(NOW - OVERSTAY_THRESHOLD_MS, NOW));
        assert!(has_overstayed(NOW - OVERSTAY_THRESHOLD_MS - 1, NOW));
    }

    #[test]
    fn flags_long_occupancy() {
        let state = SlotState::occupied_since(NOW - 7_200_001);
        let next = refresh(&state, NOW).expect("should change");
        assert!(next.is_overstay);
        assert_eq!(next.entry_time, state.entry_time);
        assert_eq!(next.status, SlotStatus::Occupied);
    }

    #[test]
    fn short_occupancy_is_unchanged() {
        let state = SlotState::occupied_since(NOW - 60_000);
        assert_eq!(refresh(&state, NOW), None);
    }

    #[test]
    fn already_flagged_is_unchanged() {
        let state = SlotState {
            is_overstay: true,
            ..SlotState::occupied_since(NOW - SIMULATED_OVERSTAY_AGE_MS)
        };
        assert_eq!(refresh(&state, NOW), None);
    }

    #[test]
    fn stale_flag_on_free_slot_is_cleared() {
        let state = SlotState {
            is_overstay: true,
            ..SlotState::FREE
        };
        assert_eq!(refresh(&state, NOW), Some(SlotState::FREE));
    }

    #[test]
    fn locked_slot_is_unchanged() {
        assert_eq!(refresh(&SlotState::LOCKED, NOW), None);
    }
}
