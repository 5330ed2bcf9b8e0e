//! Core data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{null_as_empty, TransactionId};

/// Transaction information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier within the owning user
    pub id: TransactionId,
    /// Display-formatted date
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    /// Signed amount; the sign separates debits from credits
    pub amount: Decimal,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_type: String,
    /// Free text, often empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub memo: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account: String,
    /// Where the record came from (e.g. "PayPal IPN")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub info_source: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reference_number: String,
}

/// A member and their transaction history.
///
/// `transactions` is kept in the order the upstream produced it, which is
/// chronological with the oldest entry first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name for the page header
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl User {
    /// Create a user from a chronological transaction list
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            username: None,
            transactions,
        }
    }

    /// Iterate transactions newest first
    pub fn newest_first(&self) -> std::iter::Rev<std::slice::Iter<'_, Transaction>> {
        self.transactions.iter().rev()
    }

    /// Find the first transaction whose canonical id equals `id` exactly
    pub fn find_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id.matches(id))
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
