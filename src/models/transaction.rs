use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored transaction. Never mutated once accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// Ingest payload. Any caller-supplied `id` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl CreateTransactionRequest {
    pub fn into_transaction(self, id: Uuid) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            timestamp: self.timestamp,
        }
    }
}

/// Aggregate statistics over the trailing window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionStatistics {
    pub sum: f64,
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
