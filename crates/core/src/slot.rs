//! Slot entity, its enumerations and the mutable-state projection.
//!
//! Enum values travel as upper-case text both on the wire and in the
//! `slots` table, so every enum here gets `as_str` / `FromStr` / `Display`
//! from the same macro.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::EpochMillis;

/// Returned when stored or submitted text does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Text used on the wire and in the database.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

define_text_enum! {
    /// Occupancy state of a slot.
    SlotStatus {
        Free = "FREE",
        Occupied = "OCCUPIED",
        /// Held out of circulation (maintenance lock).
        Reserved = "RESERVED",
    }
}

define_text_enum! {
    /// Slot classification, fixed at seeding time.
    SlotType {
        Standard = "STANDARD",
        Ev = "EV",
        Handicapped = "HANDICAPPED",
    }
}

define_text_enum! {
    /// Side of the aisle a slot sits on.
    Side {
        Left = "LEFT",
        Right = "RIGHT",
    }
}

/// Build a slot id such as `L1-007` from a floor label and per-floor number.
pub fn format_slot_id(floor: &str, number: u32) -> String {
    format!("{floor}-{number:03}")
}

/// One parking space.
///
/// Layout fields (`id` through `slot_pos`, plus `slot_type`) never change
/// after seeding. The remaining four fields form the [`SlotState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub floor: String,
    pub aisle_row: i32,
    pub side: Side,
    pub slot_pos: i32,
    pub status: SlotStatus,
    #[serde(rename = "type")]
    pub slot_type: SlotType,
    pub is_locked: bool,
    pub entry_time: Option<EpochMillis>,
    pub is_overstay: bool,
}

/// The mutable part of a slot. Every store write replaces all four fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotState {
    pub status: SlotStatus,
    pub is_locked: bool,
    pub entry_time: Option<EpochMillis>,
    pub is_overstay: bool,
}

impl SlotState {
    /// Free, unlocked, no timer. Also the system-reset target.
    pub const FREE: SlotState = SlotState {
        status: SlotStatus::Free,
        is_locked: false,
        entry_time: None,
        is_overstay: false,
    };

    /// Locked for maintenance.
    pub const LOCKED: SlotState = SlotState {
        status: SlotStatus::Reserved,
        is_locked: true,
        entry_time: None,
        is_overstay: false,
    };

    /// Occupied since `entry_time`, not (yet) overstayed.
    pub fn occupied_since(entry_time: EpochMillis) -> Self {
        Self {
            status: SlotStatus::Occupied,
            is_locked: false,
            entry_time: Some(entry_time),
            is_overstay: false,
        }
    }
}

impl Slot {
    /// A freshly seeded, free slot.
    pub fn new(
        floor: &str,
        number: u32,
        aisle_row: i32,
        side: Side,
        slot_pos: i32,
        slot_type: SlotType,
    ) -> Self {
        Self {
            id: format_slot_id(floor, number),
            floor: floor.to_string(),
            aisle_row,
            side,
            slot_pos,
            status: SlotStatus::Free,
            slot_type,
            is_locked: false,
            entry_time: None,
            is_overstay: false,
        }
    }

    pub fn state(&self) -> SlotState {
        SlotState {
            status: self.status,
            is_locked: self.is_locked,
            entry_time: self.entry_time,
            is_overstay: self.is_overstay,
        }
    }

    pub fn apply(&mut self, state: SlotState) {
        self.status = state.status;
        self.is_locked = state.is_locked;
        self.entry_time = state.entry_time;
        self.is_overstay = state.is_overstay;
    }

    /// Check the cross-field invariants of the occupancy model.
    pub fn check_invariants(&self) -> Result<(), String> {
        let occupied = self.status == SlotStatus::Occupied;
        if self.entry_time.is_some() != occupied {
            return Err(format!(
                "{}: entry_time must be set iff status is OCCUPIED (status={}, entry_time={:?})",
                self.id, self.status, self.entry_time
            ));
        }
        if self.is_overstay && !occupied {
            return Err(format!(
                "{}: is_overstay set on a {} slot",
                self.id, self.status
            ));
        }
        if self.is_locked && self.status != SlotStatus::Reserved {
            return Err(format!(
                "{}: locked slot must be RESERVED, found {}",
                self.id, self.status
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Slot {
        Slot::new("L2", 7, 0, Side::Left, 6, SlotType::Standard)
    }

    #[test]
    fn slot_id_is_zero_padded() {
        assert_eq!(format_slot_id("L1", 1), "L1-001");
        assert_eq!(format_slot_id("L3", 100), "L3-100");
        assert_eq!(sample().id, "L2-007");
    }

    #[test]
    fn enums_parse_their_own_text() {
        for status in SlotStatus::ALL {
            assert_eq!(status.as_str().parse::<SlotStatus>(), Ok(*status));
        }
        assert_eq!("RIGHT".parse::<Side>(), Ok(Side::Right));
        assert_eq!("EV".parse::<SlotType>(), Ok(SlotType::Ev));
    }

    #[test]
    fn unknown_text_is_rejected() {
        let err = "free".parse::<SlotStatus>().unwrap_err();
        assert_eq!(err.kind, "SlotStatus");
        assert_eq!(err.to_string(), "unknown SlotStatus value: \"free\"");
    }

    #[test]
    fn json_shape_uses_wire_names() {
        let mut slot = sample();
        slot.apply(SlotState::occupied_since(1_000));
        let json = serde_json::to_value(&slot).unwrap();

        assert_eq!(json["id"], "L2-007");
        assert_eq!(json["side"], "LEFT");
        assert_eq!(json["status"], "OCCUPIED");
        assert_eq!(json["type"], "STANDARD");
        assert_eq!(json["entry_time"], 1_000);
        assert_eq!(json["is_overstay"], false);
        assert!(json.get("slot_type").is_none());
    }

    #[test]
    fn free_slot_serializes_null_entry_time() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json["entry_time"].is_null());
    }

    #[test]
    fn state_round_trips_through_apply() {
        let mut slot = sample();
        slot.apply(SlotState::LOCKED);
        assert_eq!(slot.state(), SlotState::LOCKED);
        assert!(slot.check_invariants().is_ok());
    }

    #[test]
    fn invariant_checker_flags_each_violation() {
        let mut slot = sample();
        slot.entry_time = Some(5);
        assert!(slot.check_invariants().is_err());

        let mut slot = sample();
        slot.is_overstay = true;
        assert!(slot.check_invariants().is_err());

        let mut slot = sample();
        slot.is_locked = true;
        assert!(slot.check_invariants().is_err());
    }
}
