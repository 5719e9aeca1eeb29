use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::AppState;
use crate::models::transaction::{
    CreateTransactionRequest, ErrorResponse, Transaction, TransactionStatistics,
};
use crate::services::transaction_service::TransactionError;

/// Body for store failures; the underlying error is only logged
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_body(status: StatusCode, error: impl Into<String>) -> HandlerError {
    (status, Json(ErrorResponse { error: error.into() }))
}

impl IntoResponse for TransactionError {
    fn into_response(self) -> Response {
        match self {
            // Expired transactions are acknowledged without content
            TransactionError::Expired => StatusCode::NO_CONTENT.into_response(),
            TransactionError::InvalidTimestamp => {
                error_body(StatusCode::UNPROCESSABLE_ENTITY, self.to_string()).into_response()
            }
            TransactionError::InvalidId(_) => {
                error_body(StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            TransactionError::NotFound(_) => {
                error_body(StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            TransactionError::Storage(e) => {
                tracing::error!(error = %e, "Transaction store failure");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}

// POST /api/transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Response> {
    let Json(request) = payload.map_err(|e| {
        error_body(
            StatusCode::BAD_REQUEST,
            format!("Invalid transaction: {}", e.body_text()),
        )
        .into_response()
    })?;

    let transaction = state
        .transactions
        .create(request, Utc::now())
        .await
        .map_err(IntoResponse::into_response)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

// GET /api/transactions
pub async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<TransactionStatistics>, TransactionError> {
    let stats = state.transactions.statistics(Utc::now()).await?;
    Ok(Json(stats))
}

// GET /api/transactions/{id}
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, TransactionError> {
    let transaction = state.transactions.get(&id).await?;
    Ok(Json(transaction))
}

// DELETE /api/transactions/{id}
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, TransactionError> {
    state.transactions.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/transactions
pub async fn delete_all_transactions(
    State(state): State<AppState>,
) -> Result<StatusCode, TransactionError> {
    state.transactions.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}
