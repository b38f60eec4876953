//! Repository layer: one zero-sized struct per table with async associated
//! functions taking a `&PgPool`.

pub mod slot_repo;

pub use slot_repo::SlotRepo;
