//! In-process [`SlotStore`] backed by an ordered map.
//!
//! Used when no `DATABASE_URL` is configured and by the test suites. State
//! lives only as long as the process.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{SlotStore, StoreError};
use crate::slot::{Slot, SlotState, SlotStatus};

#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<BTreeMap<String, Slot>>,
    writes: AtomicU64,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `slots`.
    pub fn with_slots(slots: Vec<Slot>) -> Self {
        let map: BTreeMap<String, Slot> = slots.into_iter().map(|s| (s.id.clone(), s)).collect();
        Self {
            slots: RwLock::new(map),
            writes: AtomicU64::new(0),
        }
    }

    /// Number of write calls that changed at least one row.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    fn record_write(&self, rows: u64) {
        if rows > 0 {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn get(&self, id: &str) -> Result<Option<Slot>, StoreError> {
        Ok(self.slots.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Slot>, StoreError> {
        Ok(self.slots.read().await.values().cloned().collect())
    }

    async fn update(&self, id: &str, state: &SlotState) -> Result<Option<Slot>, StoreError> {
        let mut slots = self.slots.write().await;
        let updated = slots.get_mut(id).map(|slot| {
            slot.apply(*state);
            slot.clone()
        });
        self.record_write(u64::from(updated.is_some()));
        Ok(updated)
    }

    async fn set_overstay(&self, flags: &[(String, bool)]) -> Result<u64, StoreError> {
        let mut slots = self.slots.write().await;
        let mut rows = 0;
        for (id, flag) in flags {
            let Some(slot) = slots.get_mut(id) else {
                continue;
            };
            if slot.is_overstay == *flag || (*flag && slot.status != SlotStatus::Occupied) {
                continue;
            }
            slot.is_overstay = *flag;
            rows += 1;
        }
        self.record_write(rows);
        Ok(rows)
    }

    async fn reset_all(&self, state: &SlotState) -> Result<u64, StoreError> {
        let mut slots = self.slots.write().await;
        for slot in slots.values_mut() {
            slot.apply(*state);
        }
        let rows = slots.len() as u64;
        self.record_write(rows);
        Ok(rows)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.slots.read().await.len() as u64)
    }

    async fn insert_all(&self, new_slots: &[Slot]) -> Result<u64, StoreError> {
        let mut slots = self.slots.write().await;
        let mut rows = 0;
        for slot in new_slots {
            if !slots.contains_key(&slot.id) {
                slots.insert(slot.id.clone(), slot.clone());
                rows += 1;
            }
        }
        self.record_write(rows);
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
