//! Repository for the `slots` table.
//!
//! State writes set all four mutable columns at once so the table's CHECK
//! constraints see a consistent row. The overstay batch is the exception and
//! writes the flag alone.

use cyberpark_core::slot::{Slot, SlotState};
use sqlx::PgPool;

use crate::models::slot::SlotRow;

/// Column list for `slots` queries.
const COLUMNS: &str = "\
    id, floor, aisle_row, side, slot_pos, status, slot_type, \
    is_locked, entry_time, is_overstay";

/// Provides data access for parking slots.
pub struct SlotRepo;

impl SlotRepo {
    /// Find a slot by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<SlotRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slots WHERE id = $1");
        sqlx::query_as::<_, SlotRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every slot ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<SlotRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slots ORDER BY id");
        sqlx::query_as::<_, SlotRow>(&query).fetch_all(pool).await
    }

    /// Overwrite the mutable state of one slot.
    ///
    /// Returns `None` if no slot has this ID.
    pub async fn update_state(
        pool: &PgPool,
        id: &str,
        state: &SlotState,
    ) -> Result<Option<SlotRow>, sqlx::Error> {
        let query = format!(
            "UPDATE slots SET \
                 status = $2, is_locked = $3, entry_time = $4, is_overstay = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SlotRow>(&query)
            .bind(id)
            .bind(state.status.as_str())
            .bind(state.is_locked)
            .bind(state.entry_time)
            .bind(state.is_overstay)
            .fetch_optional(pool)
            .await
    }

    /// Write only the overstay flag of several slots within one transaction.
    ///
    /// A `true` flag is only set on rows still OCCUPIED, so a slot freed
    /// since it was read keeps its new state. Rows already carrying the
    /// flag are not touched. Returns the number of rows changed.
    pub async fn set_overstay_flags(
        pool: &PgPool,
        flags: &[(String, bool)],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut rows = 0;

        for (id, flag) in flags {
            let result = sqlx::query(
                "UPDATE slots SET is_overstay = $2 \
                 WHERE id = $1 AND is_overstay <> $2 \
                   AND (status = 'OCCUPIED' OR NOT $2)",
            )
            .bind(id)
            .bind(*flag)
            .execute(&mut *tx)
            .await?;
            rows += result.rows_affected();
        }

        tx.commit().await?;
        Ok(rows)
    }

    /// Set every slot to the same state.
    ///
    /// Returns the number of rows updated.
    pub async fn update_all_state(pool: &PgPool, state: &SlotState) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE slots SET \
                 status = $1, is_locked = $2, entry_time = $3, is_overstay = $4",
        )
        .bind(state.status.as_str())
        .bind(state.is_locked)
        .bind(state.entry_time)
        .bind(state.is_overstay)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count all slots.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM slots")
            .fetch_one(pool)
            .await
    }

    /// Insert slots within one transaction, skipping IDs that already exist.
    ///
    /// Returns the number of rows inserted.
    pub async fn insert_many(pool: &PgPool, slots: &[Slot]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut rows = 0;

        for slot in slots {
            let result = sqlx::query(
                "INSERT INTO slots \
                     (id, floor, aisle_row, side, slot_pos, status, slot_type, \
                      is_locked, entry_time, is_overstay) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(&slot.id)
            .bind(&slot.floor)
            .bind(slot.aisle_row)
            .bind(slot.side.as_str())
            .bind(slot.slot_pos)
            .bind(slot.status.as_str())
            .bind(slot.slot_type.as_str())
            .bind(slot.is_locked)
            .bind(slot.entry_time)
            .bind(slot.is_overstay)
            .execute(&mut *tx)
            .await?;
            rows += result.rows_affected();
        }

        tx.commit().await?;
        Ok(rows)
    }
}
