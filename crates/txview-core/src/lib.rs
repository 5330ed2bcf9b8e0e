//! Transaction model, identifier lookup and view building
//!
//! - models: `User` and `Transaction` as delivered by the upstream snapshot
//! - types: `TransactionId` and its canonical textual form
//! - views: list and receipt view trees
//! - source: loading snapshots

pub mod error;
pub mod models;
pub mod source;
pub mod types;
pub mod views;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails, ErrorSeverity};
pub use models::{Transaction, User};
pub use source::{load_or_empty, InMemorySource, JsonFileSource, SourceRef, UserSource};
pub use types::TransactionId;
pub use views::{
    format_amount, transaction_href, DetailField, ListBody, ListRow, NotFoundView, ReceiptView,
    TransactionDetailView, TransactionListView, EMPTY_PLACEHOLDER,
};

/// Find the first transaction of `user` whose id equals `id` after normalization.
///
/// Ids are compared in their canonical textual form; see [`TransactionId`].
pub fn find_transaction<'a>(user: &'a User, id: &str) -> Option<&'a Transaction> {
    user.find_transaction(id)
}
