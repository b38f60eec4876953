/// Wall-clock instants are carried as milliseconds since the Unix epoch.
pub type EpochMillis = i64;

/// Entity label used in `NotFound` errors for slots.
pub const SLOT_ENTITY: &str = "Slot";
