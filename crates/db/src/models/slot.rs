//! Row model for the `slots` table.
//!
//! Enum columns are stored as text and decoded into the core enums when a
//! row becomes a [`Slot`].

use cyberpark_core::slot::{Slot, UnknownVariant};
use sqlx::FromRow;

/// A row from the `slots` table.
#[derive(Debug, Clone, FromRow)]
pub struct SlotRow {
    pub id: String,
    pub floor: String,
    pub aisle_row: i32,
    pub side: String,
    pub slot_pos: i32,
    pub status: String,
    pub slot_type: String,
    pub is_locked: bool,
    pub entry_time: Option<i64>,
    pub is_overstay: bool,
}

impl TryFrom<SlotRow> for Slot {
    type Error = UnknownVariant;

    fn try_from(row: SlotRow) -> Result<Self, Self::Error> {
        Ok(Slot {
            side: row.side.parse()?,
            status: row.status.parse()?,
            slot_type: row.slot_type.parse()?,
            id: row.id,
            floor: row.floor,
            aisle_row: row.aisle_row,
            slot_pos: row.slot_pos,
            is_locked: row.is_locked,
            entry_time: row.entry_time,
            is_overstay: row.is_overstay,
        })
    }
}
