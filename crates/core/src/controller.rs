//! Slot controller: the occupancy operations on top of a [`SlotStore`].
//!
//! Every operation is one read-modify-write against the store. There is no
//! locking across calls; two concurrent writes to the same slot resolve as
//! last-write-wins.

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::CoreError;
use crate::layout::SlotLayout;
use crate::overstay;
use crate::slot::{Slot, SlotState};
use crate::stats::OccupancyStats;
use crate::store::SlotStore;
use crate::transitions;

pub struct SlotController {
    store: Arc<dyn SlotStore>,
    clock: Arc<dyn Clock>,
}

impl SlotController {
    pub fn new(store: Arc<dyn SlotStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &Arc<dyn SlotStore> {
        &self.store
    }

    /// List every slot, recomputing overstay flags first.
    ///
    /// Changed flags are written back in a single batch, and only when at
    /// least one slot changed. The batch touches the flag alone, so a toggle
    /// committed after the read is never overwritten.
    pub async fn list_slots(&self) -> Result<Vec<Slot>, CoreError> {
        let mut slots = self.store.list().await?;
        let now = self.clock.now_millis();

        let mut flags = Vec::new();
        for slot in &mut slots {
            if let Some(next) = overstay::refresh(&slot.state(), now) {
                slot.apply(next);
                flags.push((slot.id.clone(), next.is_overstay));
            }
        }

        if !flags.is_empty() {
            let rows = self.store.set_overstay(&flags).await?;
            tracing::info!(changed = rows, "Persisted recomputed overstay flags");
        }

        Ok(slots)
    }

    /// Fetch a single slot, refreshing its overstay flag.
    pub async fn get_slot(&self, id: &str) -> Result<Slot, CoreError> {
        let slot = self.load(id).await?;
        match overstay::refresh(&slot.state(), self.clock.now_millis()) {
            Some(next) => {
                self.store
                    .set_overstay(&[(id.to_string(), next.is_overstay)])
                    .await?;
                self.load(id).await
            }
            None => Ok(slot),
        }
    }

    /// Flip a slot between FREE and OCCUPIED. Locked slots are returned as-is.
    pub async fn toggle(&self, id: &str) -> Result<Slot, CoreError> {
        let slot = self.load(id).await?;
        let Some(next) = transitions::toggle(&slot.state(), self.clock.now_millis()) else {
            tracing::debug!(slot_id = %id, "Toggle ignored on locked slot");
            return Ok(slot);
        };

        let updated = self.write(id, next).await?;
        tracing::info!(slot_id = %id, status = %updated.status, "Slot toggled");
        Ok(updated)
    }

    /// Flip the maintenance lock.
    ///
    /// Fails with [`CoreError::InvalidState`] when locking an occupied slot;
    /// the slot is left untouched in that case.
    pub async fn set_maintenance(&self, id: &str) -> Result<Slot, CoreError> {
        let slot = self.load(id).await?;
        let next = transitions::toggle_lock(&slot.state()).inspect_err(|_| {
            tracing::warn!(slot_id = %id, "Rejected lock on occupied slot");
        })?;

        let updated = self.write(id, next).await?;
        tracing::info!(slot_id = %id, locked = updated.is_locked, "Maintenance lock toggled");
        Ok(updated)
    }

    /// Force a slot into a three-hour-old overstay. Demo and test aid.
    pub async fn simulate_overstay(&self, id: &str) -> Result<Slot, CoreError> {
        self.load(id).await?;
        let updated = self
            .write(id, transitions::simulated_overstay(self.clock.now_millis()))
            .await?;
        tracing::info!(slot_id = %id, "Overstay simulated");
        Ok(updated)
    }

    /// Free and unlock every slot. Returns the number of slots reset.
    pub async fn reset_all(&self) -> Result<u64, CoreError> {
        let rows = self.store.reset_all(&transitions::RESET).await?;
        tracing::warn!(slots = rows, "System reset");
        Ok(rows)
    }

    /// Counters over a fresh listing (so overstay flags are recomputed).
    pub async fn stats(&self) -> Result<OccupancyStats, CoreError> {
        let slots = self.list_slots().await?;
        Ok(OccupancyStats::from_slots(&slots))
    }

    /// Populate the store from `layout` if it holds no slots yet.
    ///
    /// Returns the number of slots created; 0 when already populated.
    pub async fn seed_if_empty(&self, layout: &SlotLayout) -> Result<usize, CoreError> {
        if self.store.count().await? > 0 {
            tracing::debug!("Slot inventory already present, skipping seed");
            return Ok(0);
        }

        let slots = layout.generate();
        let inserted = self.store.insert_all(&slots).await?;
        tracing::info!(slots = inserted, floors = layout.floors.len(), "Seeded slot inventory");
        Ok(inserted as usize)
    }

    async fn load(&self, id: &str) -> Result<Slot, CoreError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CoreError::slot_not_found(id))
    }

    async fn write(&self, id: &str, state: SlotState) -> Result<Slot, CoreError> {
        self.store
            .update(id, &state)
            .await?
            .ok_or_else(|| CoreError::slot_not_found(id))
    }
}
