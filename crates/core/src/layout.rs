//! Seed layout for the slot inventory.
//!
//! Floors are walked in order; each aisle row emits its LEFT slots then its
//! RIGHT slots, numbering slots sequentially per floor starting at 1.

use crate::slot::{Side, Slot, SlotType};

/// Floor labels of the default layout.
pub const DEFAULT_FLOORS: [&str; 3] = ["L1", "L2", "L3"];

/// Aisle rows per floor in the default layout.
pub const DEFAULT_AISLE_ROWS: u32 = 5;

/// Slots on each side of an aisle row in the default layout.
pub const DEFAULT_SLOTS_PER_SIDE: u32 = 10;

/// Every 15th slot of a floor is an EV bay.
pub const EV_EVERY: u32 = 15;

/// Every 20th slot of a floor (unless already EV) is accessible parking.
pub const HANDICAPPED_EVERY: u32 = 20;

/// Physical shape of the car park.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    pub floors: Vec<String>,
    pub aisle_rows: u32,
    pub slots_per_side: u32,
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOORS.iter().map(|f| f.to_string()).collect(),
            aisle_rows: DEFAULT_AISLE_ROWS,
            slots_per_side: DEFAULT_SLOTS_PER_SIDE,
        }
    }
}

impl SlotLayout {
    pub fn slots_per_floor(&self) -> u32 {
        self.aisle_rows * self.slots_per_side * 2
    }

    pub fn total_slots(&self) -> usize {
        self.floors.len() * self.slots_per_floor() as usize
    }

    /// Generate every slot of the layout, all FREE and unlocked.
    pub fn generate(&self) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(self.total_slots());
        for floor in &self.floors {
            let mut number = 1;
            for aisle_row in 0..self.aisle_rows {
                for side in [Side::Left, Side::Right] {
                    for pos in 0..self.slots_per_side {
                        slots.push(Slot::new(
                            floor,
                            number,
                            aisle_row as i32,
                            side,
                            pos as i32,
                            classify(number),
                        ));
                        number += 1;
                    }
                }
            }
        }
        slots
    }
}

/// Slot type for a per-floor slot number. EV wins over HANDICAPPED.
pub fn classify(number: u32) -> SlotType {
    if number % EV_EVERY == 0 {
        SlotType::Ev
    } else if number % HANDICAPPED_EVERY == 0 {
        SlotType::Handicapped
    } else {
        SlotType::Standard
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::slot::SlotStatus;

    fn find<'a>(slots: &'a [Slot], id: &str) -> &'a Slot {
        slots.iter().find(|s| s.id == id).unwrap()
    }

    #[test]
    fn default_layout_has_300_slots() {
        let slots = SlotLayout::default().generate();
        assert_eq!(slots.len(), 300);
        let ids: HashSet<_> = slots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 300, "ids must be unique");
    }

    #[test]
    fn classification_examples() {
        let slots = SlotLayout::default().generate();
        assert_eq!(find(&slots, "L1-015").slot_type, SlotType::Ev);
        assert_eq!(find(&slots, "L1-020").slot_type, SlotType::Handicapped);
        assert_eq!(find(&slots, "L1-060").slot_type, SlotType::Ev);
        assert_eq!(find(&slots, "L2-001").slot_type, SlotType::Standard);
    }

    #[test]
    fn classify_checks_fifteen_first() {
        assert_eq!(classify(120), SlotType::Ev);
        assert_eq!(classify(40), SlotType::Handicapped);
        assert_eq!(classify(7), SlotType::Standard);
    }

    #[test]
    fn left_side_precedes_right_within_a_row() {
        let slots = SlotLayout::default().generate();
        let first = find(&slots, "L1-001");
        assert_eq!((first.aisle_row, first.side, first.slot_pos), (0, Side::Left, 0));
        let eleventh = find(&slots, "L1-011");
        assert_eq!((eleventh.aisle_row, eleventh.side, eleventh.slot_pos), (0, Side::Right, 0));
        let last = find(&slots, "L3-100");
        assert_eq!((last.aisle_row, last.side, last.slot_pos), (4, Side::Right, 9));
    }

    #[test]
    fn numbering_restarts_per_floor() {
        let slots = SlotLayout::default().generate();
        assert_eq!(slots[100].id, "L2-001");
        assert_eq!(slots[100].floor, "L2");
    }

    #[test]
    fn seeded_slots_are_free() {
        for slot in SlotLayout::default().generate() {
            assert_eq!(slot.status, SlotStatus::Free);
            assert!(slot.check_invariants().is_ok());
        }
    }
}
