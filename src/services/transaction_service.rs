//! Transaction ingestion and windowed statistics
//!
//! Glues the validator and aggregator to an injected store. Every method takes
//! `now` explicitly so callers decide the clock.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::transaction::{CreateTransactionRequest, Transaction, TransactionStatistics};
use crate::services::aggregator;
use crate::services::transaction_store::{StoreError, TransactionStore};
use crate::services::validator::{self, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("Transaction expired")]
    Expired,
    #[error("Invalid transaction: timestamp is in the future")]
    InvalidTimestamp,
    #[error("Invalid ID: {0}")]
    InvalidId(String),
    #[error("Transaction {0} not found")]
    NotFound(Uuid),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<ValidationError> for TransactionError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Expired => TransactionError::Expired,
            ValidationError::InvalidTimestamp => TransactionError::InvalidTimestamp,
        }
    }
}

#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Validate, assign an id and persist
    pub async fn create(
        &self,
        request: CreateTransactionRequest,
        now: DateTime<Utc>,
    ) -> Result<Transaction, TransactionError> {
        if let Err(e) = validator::validate(request.timestamp, now) {
            info!(
                timestamp = %request.timestamp,
                now = %now,
                reason = %e,
                "Rejected transaction"
            );
            return Err(e.into());
        }

        let transaction = request.into_transaction(Uuid::new_v4());
        self.store.insert(&transaction).await?;

        debug!(
            id = %transaction.id,
            amount = transaction.amount,
            timestamp = %transaction.timestamp,
            "Stored transaction"
        );

        Ok(transaction)
    }

    pub async fn get(&self, id: &str) -> Result<Transaction, TransactionError> {
        let id = parse_id(id)?;

        self.store
            .find_by_id(id)
            .await?
            .ok_or(TransactionError::NotFound(id))
    }

    /// Statistics over `[now - 60s, now]`
    pub async fn statistics(
        &self,
        now: DateTime<Utc>,
    ) -> Result<TransactionStatistics, TransactionError> {
        let since = now - validator::staleness_threshold();
        let window = self.store.find_since(since, now).await?;

        let stats = aggregator::aggregate(&window);
        debug!(count = stats.count, sum = stats.sum, "Computed window statistics");

        Ok(stats)
    }

    pub async fn delete(&self, id: &str) -> Result<(), TransactionError> {
        let id = parse_id(id)?;

        if self.store.delete_by_id(id).await? {
            info!(id = %id, "Deleted transaction");
            Ok(())
        } else {
            Err(TransactionError::NotFound(id))
        }
    }

    pub async fn delete_all(&self) -> Result<u64, TransactionError> {
        let removed = self.store.delete_all().await?;
        info!(removed = removed, "Deleted all transactions");
        Ok(removed)
    }
}

fn parse_id(id: &str) -> Result<Uuid, TransactionError> {
    Uuid::parse_str(id).map_err(|_| TransactionError::InvalidId(id.to_string()))
}
