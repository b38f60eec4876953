//! PostgreSQL store tests. They need a live database:
//! `DATABASE_URL=postgres://... cargo test -p cyberpark-db -- --ignored`

use cyberpark_core::layout::SlotLayout;
use cyberpark_core::slot::{SlotState, SlotStatus};
use cyberpark_core::store::SlotStore;
use cyberpark_db::PgSlotStore;
use sqlx::PgPool;

async fn seeded(pool: PgPool) -> PgSlotStore {
    let store = PgSlotStore::new(pool);
    let inserted = store
        .insert_all(&SlotLayout::default().generate())
        .await
        .unwrap();
    assert_eq!(inserted, 300);
    store
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_bootstrap_and_health(pool: PgPool) {
    cyberpark_db::health_check(&pool).await.unwrap();
    let store = PgSlotStore::new(pool);
    assert_eq!(store.count().await.unwrap(), 0);
    store.ping().await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_seed_is_idempotent(pool: PgPool) {
    let store = seeded(pool).await;
    let again = store
        .insert_all(&SlotLayout::default().generate())
        .await
        .unwrap();
    assert_eq!(again, 0);
    assert_eq!(store.count().await.unwrap(), 300);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_list_is_ordered_and_decoded(pool: PgPool) {
    let store = seeded(pool).await;
    let slots = store.list().await.unwrap();
    assert_eq!(slots.len(), 300);
    assert_eq!(slots[0].id, "L1-001");
    assert_eq!(slots[299].id, "L3-100");
    assert!(slots.iter().all(|s| s.status == SlotStatus::Free));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_returns_new_row(pool: PgPool) {
    let store = seeded(pool).await;
    let slot = store
        .update("L1-010", &SlotState::occupied_since(1_000))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(slot.status, SlotStatus::Occupied);
    assert_eq!(slot.entry_time, Some(1_000));

    assert!(store
        .update("L9-999", &SlotState::FREE)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_check_constraint_rejects_bad_state(pool: PgPool) {
    let store = seeded(pool).await;
    let bad = SlotState {
        entry_time: Some(5),
        ..SlotState::FREE
    };
    assert!(store.update("L1-001", &bad).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_set_overstay_and_reset(pool: PgPool) {
    let store = seeded(pool).await;
    store
        .update("L1-001", &SlotState::occupied_since(10))
        .await
        .unwrap();
    let flags = vec![("L1-001".to_string(), true), ("L2-002".to_string(), true)];
    assert_eq!(store.set_overstay(&flags).await.unwrap(), 1);

    let flagged = store.get("L1-001").await.unwrap().unwrap();
    assert!(flagged.is_overstay);
    assert_eq!(flagged.entry_time, Some(10));
    // A FREE slot is never flagged.
    assert!(!store.get("L2-002").await.unwrap().unwrap().is_overstay);

    assert_eq!(store.reset_all(&SlotState::FREE).await.unwrap(), 300);
    for slot in store.list().await.unwrap() {
        assert_eq!(slot.state(), SlotState::FREE);
    }
}
