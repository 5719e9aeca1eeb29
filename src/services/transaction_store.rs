//! Persistence for accepted transactions
//!
//! `SeaOrmTransactionStore` is the production store. `InMemoryTransactionStore`
//! serves deployments without a database and the test-suite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::collections::HashMap;
use uuid::Uuid;

use crate::entities::{prelude::Transactions, transactions};
use crate::models::transaction::Transaction;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert(&self, transaction: &Transaction) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>, StoreError>;

    /// All transactions with `since <= timestamp <= until`, in no particular order
    async fn find_since(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, StoreError>;

    /// Returns whether a record was removed
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Removes every record, returning how many were removed
    async fn delete_all(&self) -> Result<u64, StoreError>;
}

impl From<transactions::Model> for Transaction {
    fn from(model: transactions::Model) -> Self {
        Transaction {
            id: model.id,
            amount: model.amount,
            timestamp: model.timestamp.with_timezone(&Utc),
        }
    }
}

pub struct SeaOrmTransactionStore {
    db: DatabaseConnection,
}

impl SeaOrmTransactionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionStore for SeaOrmTransactionStore {
    async fn insert(&self, transaction: &Transaction) -> Result<(), StoreError> {
        let model = transactions::ActiveModel {
            id: Set(transaction.id),
            amount: Set(transaction.amount),
            timestamp: Set(transaction.timestamp.fixed_offset()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        model.insert(&self.db).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>, StoreError> {
        let model = Transactions::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Transaction::from))
    }

    async fn find_since(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, StoreError> {
        let models = Transactions::find()
            .filter(transactions::Column::Timestamp.gte(since.fixed_offset()))
            .filter(transactions::Column::Timestamp.lte(until.fixed_offset()))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Transaction::from).collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = Transactions::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = Transactions::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

#[derive(Default)]
pub struct InMemoryTransactionStore {
    records: RwLock<HashMap<Uuid, Transaction>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn insert(&self, transaction: &Transaction) -> Result<(), StoreError> {
        self.records
            .write()
            .insert(transaction.id, transaction.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>, StoreError> {
        Ok(self.records.read().get(&id).cloned())
    }

    async fn find_since(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, StoreError> {
        Ok(self
            .records
            .read()
            .values()
            .filter(|t| t.timestamp >= since && t.timestamp <= until)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.records.write().remove(&id).is_some())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut records = self.records.write();
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }
}
