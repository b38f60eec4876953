//! Occupancy counters for the operator dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::slot::{Slot, SlotStatus};

/// Counters for one floor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FloorStats {
    pub floor: String,
    pub total: usize,
    pub free: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub overstay: usize,
}

/// Inventory-wide counters plus a per-floor breakdown ordered by floor label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OccupancyStats {
    pub total: usize,
    pub free: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub locked: usize,
    pub overstay: usize,
    pub by_floor: Vec<FloorStats>,
}

impl OccupancyStats {
    pub fn from_slots(slots: &[Slot]) -> Self {
        let mut stats = OccupancyStats::default();
        let mut floors: BTreeMap<&str, FloorStats> = BTreeMap::new();

        for slot in slots {
            let floor = floors
                .entry(slot.floor.as_str())
                .or_insert_with(|| FloorStats {
                    floor: slot.floor.clone(),
                    ..FloorStats::default()
                });

            stats.total += 1;
            floor.total += 1;
            match slot.status {
                SlotStatus::Free => {
                    stats.free += 1;
                    floor.free += 1;
                }
                SlotStatus::Occupied => {
                    stats.occupied += 1;
                    floor.occupied += 1;
                }
                SlotStatus::Reserved => {
                    stats.reserved += 1;
                    floor.reserved += 1;
                }
            }
            if slot.is_overstay {
                stats.overstay += 1;
                floor.overstay += 1;
            }
            if slot.is_locked {
                stats.locked += 1;
            }
        }

        stats.by_floor = floors.into_values().collect();
        stats
    }
}
