//! Domain core for the parking-slot backend.
//!
//! Holds the slot data model, the occupancy state machine, overstay
//! derivation, seeding layout and the [`store::SlotStore`] contract. The
//! `db` and `api` crates build on top of this; nothing here knows about
//! HTTP or SQL.

pub mod clock;
pub mod controller;
pub mod error;
pub mod layout;
pub mod overstay;
pub mod slot;
pub mod stats;
pub mod store;
pub mod transitions;
pub mod types;
