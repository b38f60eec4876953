//! Slot persistence contract.
//!
//! The controller sees storage only through [`SlotStore`]: lookup by id, a
//! full scan ordered by id, state writes (single or all rows), the
//! overstay-flag batch write and the seeding insert. Implementations must have made a write durable
//! before returning `Ok`.

pub mod memory;

use async_trait::async_trait;

use crate::slot::{Slot, SlotState};

pub use memory::MemorySlotStore;

/// Failure inside a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend itself failed (connectivity, I/O, constraint).
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),

    /// A stored row could not be turned into a [`Slot`].
    #[error("corrupt slot row: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Fetch one slot, `None` if the id is unknown.
    async fn get(&self, id: &str) -> Result<Option<Slot>, StoreError>;

    /// Every slot, ordered by id.
    async fn list(&self) -> Result<Vec<Slot>, StoreError>;

    /// Overwrite the mutable state of one slot and return the updated row.
    ///
    /// Returns `None` if the id is unknown.
    async fn update(&self, id: &str, state: &SlotState) -> Result<Option<Slot>, StoreError>;

    /// Write only the overstay flag of several slots in one batch.
    ///
    /// Other columns are left as they are now, not as they were when the
    /// flags were computed. A `true` flag is only written to a slot that is
    /// still OCCUPIED, and rows already carrying the flag are skipped.
    /// Returns the number of rows changed.
    async fn set_overstay(&self, flags: &[(String, bool)]) -> Result<u64, StoreError>;

    /// Set every slot to `state`. Returns the number of rows hit.
    async fn reset_all(&self, state: &SlotState) -> Result<u64, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    /// Insert new slots. Existing ids are left untouched.
    async fn insert_all(&self, slots: &[Slot]) -> Result<u64, StoreError>;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
