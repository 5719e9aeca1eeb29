// src/lib.rs

use axum::{
    Json, Router,
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use models::transaction::HealthResponse;
use services::transaction_service::TransactionService;
use services::transaction_store::TransactionStore;

#[derive(Clone)]
pub struct AppState {
    pub transactions: TransactionService,
}

impl AppState {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self {
            transactions: TransactionService::new(store),
        }
    }
}

pub mod entities {
    pub mod prelude;
    pub mod transactions;
}

pub mod services {
    pub mod aggregator;
    pub mod transaction_service;
    pub mod transaction_store;
    pub mod validator;
}

pub mod config;
pub mod models;
pub mod handlers;

/// Build the HTTP router with all routes mounted under `/api`
pub fn build_router(state: AppState) -> Router {
    use handlers::transaction;

    let api = Router::new()
        .route(
            "/transactions",
            get(transaction::get_statistics)
                .post(transaction::create_transaction)
                .delete(transaction::delete_all_transactions),
        )
        .route(
            "/transactions/{id}",
            get(transaction::get_transaction).delete(transaction::delete_transaction),
        );

    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hello from txstats backend!"
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
