//! Transactions API endpoints - JSON responses
//!
//! Endpoints:
//! - api_transactions: all transactions, newest first
//! - api_transaction_detail: single transaction by id

use axum::extract::{rejection::PathRejection, Path};
use axum::response::Json;
use serde::Serialize;
use txview_core::Transaction;

use crate::{ApiError, AppState};

/// Transactions list response
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub total_count: usize,
}

/// Get all transactions, newest first (JSON API)
pub async fn api_transactions(state: axum::extract::State<AppState>) -> Json<TransactionsResponse> {
    let user = state.user.read().await;

    Json(TransactionsResponse {
        transactions: user.newest_first().cloned().collect(),
        total_count: user.transaction_count(),
    })
}

/// Get single transaction detail (JSON API)
pub async fn api_transaction_detail(
    state: axum::extract::State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Transaction>, ApiError> {
    let Path(transaction_id) = path.map_err(|rejection| ApiError::NotFound {
        resource: format!("transaction ({})", rejection.body_text()),
    })?;
    let user = state.user.read().await;

    match txview_core::find_transaction(&user, &transaction_id) {
        Some(tx) => Ok(Json(tx.clone())),
        None => Err(ApiError::NotFound {
            resource: format!("transaction {}", transaction_id),
        }),
    }
}
