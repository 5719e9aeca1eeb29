mod common;

use chrono::{Duration, SubsecRound, Utc};
use sea_orm_migration::MigratorTrait;
use txstats_backend::models::transaction::Transaction;
use txstats_backend::services::transaction_store::{SeaOrmTransactionStore, TransactionStore};
use uuid::Uuid;

use crate::common::setup_test_db;

/// Runs against TEST_DATABASE_URL; skipped when it is not set.
/// Everything lives in one test because the table is shared.
#[tokio::test]
async fn test_sea_orm_store_against_postgres() {
    let Some(db) = setup_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping Postgres store test");
        return;
    };
    let db = db.expect("Test database connection should succeed");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let store = SeaOrmTransactionStore::new(db);
    store.delete_all().await.unwrap();

    // Postgres keeps microseconds
    let until = Utc::now().trunc_subsecs(6);
    let since = until - Duration::seconds(60);
    let record = |amount: f64, timestamp: chrono::DateTime<Utc>| Transaction {
        id: Uuid::new_v4(),
        amount,
        timestamp,
    };

    let at_start = record(-5.0, since);
    let at_end = record(-1.0, until);
    let too_old = record(100.0, since - Duration::milliseconds(1));
    for r in [&at_start, &at_end, &too_old] {
        store.insert(r).await.unwrap();
    }

    assert_eq!(store.find_by_id(at_start.id).await.unwrap(), Some(at_start.clone()));

    let mut window: Vec<f64> = store
        .find_since(since, until)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.amount)
        .collect();
    window.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(window, vec![-5.0, -1.0]);

    assert!(store.delete_by_id(too_old.id).await.unwrap());
    assert!(!store.delete_by_id(too_old.id).await.unwrap());

    assert_eq!(store.delete_all().await.unwrap(), 2);
    assert!(store.find_since(since, until).await.unwrap().is_empty());
}
