//! [`SlotStore`] implementation over PostgreSQL.

use async_trait::async_trait;
use cyberpark_core::slot::{Slot, SlotState};
use cyberpark_core::store::{SlotStore, StoreError};

use crate::models::slot::SlotRow;
use crate::repositories::SlotRepo;
use crate::DbPool;

#[derive(Debug, Clone)]
pub struct PgSlotStore {
    pool: DbPool,
}

impl PgSlotStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn decode(row: SlotRow) -> Result<Slot, StoreError> {
    let id = row.id.clone();
    Slot::try_from(row).map_err(|e| {
        tracing::error!(slot_id = %id, error = %e, "Undecodable slot row");
        StoreError::Corrupt(format!("{id}: {e}"))
    })
}

#[async_trait]
impl SlotStore for PgSlotStore {
    async fn get(&self, id: &str) -> Result<Option<Slot>, StoreError> {
        SlotRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::backend)?
            .map(decode)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Slot>, StoreError> {
        SlotRepo::list(&self.pool)
            .await
            .map_err(StoreError::backend)?
            .into_iter()
            .map(decode)
            .collect()
    }

    async fn update(&self, id: &str, state: &SlotState) -> Result<Option<Slot>, StoreError> {
        SlotRepo::update_state(&self.pool, id, state)
            .await
            .map_err(StoreError::backend)?
            .map(decode)
            .transpose()
    }

    async fn set_overstay(&self, flags: &[(String, bool)]) -> Result<u64, StoreError> {
        SlotRepo::set_overstay_flags(&self.pool, flags)
            .await
            .map_err(StoreError::backend)
    }

    async fn reset_all(&self, state: &SlotState) -> Result<u64, StoreError> {
        SlotRepo::update_all_state(&self.pool, state)
            .await
            .map_err(StoreError::backend)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count = SlotRepo::count(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(count.max(0) as u64)
    }

    async fn insert_all(&self, slots: &[Slot]) -> Result<u64, StoreError> {
        SlotRepo::insert_many(&self.pool, slots)
            .await
            .map_err(StoreError::backend)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::backend)
    }
}
