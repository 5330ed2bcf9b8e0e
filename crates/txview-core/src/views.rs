//! View trees for the transaction pages
//!
//! Builders here are pure functions of a borrowed [`User`]: the same input
//! always yields the same tree, and nothing is fetched or mutated. Turning a
//! tree into markup is left to the rendering host.

use rust_decimal::Decimal;
use txview_config::{CurrencyConfig, SymbolPosition};
use txview_utils::encode_segment;

use crate::models::{Transaction, User};

/// Placeholder shown in place of the table body when there are no transactions
pub const EMPTY_PLACEHOLDER: &str = "None";

/// Column headers of the list table
pub const LIST_COLUMNS: [&str; 5] = ["Date", "ID", "Amount", "Account", "Memo"];

/// Route of the detail view for a transaction id
pub fn transaction_href(id: &str) -> String {
    format!("/transactions/{}", encode_segment(id))
}

/// Render an amount with the configured currency symbol.
///
/// The decimal keeps the scale it was delivered with, so `10` stays `10`
/// and `"20.00"` stays `20.00`.
pub fn format_amount(amount: &Decimal, currency: &CurrencyConfig) -> String {
    match currency.symbol_position {
        SymbolPosition::Before => format!("{}{}", currency.symbol, amount),
        SymbolPosition::After => format!("{}{}", amount, currency.symbol),
    }
}

// ==================== List View ====================

/// One row of the list table
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub date: String,
    /// Link label
    pub id: String,
    /// Link target
    pub href: String,
    pub amount: String,
    pub account_type: String,
    pub memo: String,
}

impl ListRow {
    fn from_transaction(tx: &Transaction, currency: &CurrencyConfig) -> Self {
        let id = tx.id.to_string();
        Self {
            href: transaction_href(&id),
            id,
            date: tx.date.clone(),
            amount: format_amount(&tx.amount, currency),
            account_type: tx.account_type.clone(),
            memo: tx.memo.clone(),
        }
    }
}

/// Lazily produce list rows, newest first
pub fn rows_newest_first<'a>(
    user: &'a User,
    currency: &'a CurrencyConfig,
) -> impl Iterator<Item = ListRow> + 'a {
    user.newest_first()
        .map(move |tx| ListRow::from_transaction(tx, currency))
}

/// Body of the list table
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Rows(Vec<ListRow>),
    /// Rendered as [`EMPTY_PLACEHOLDER`]
    Empty,
}

/// All transactions of a user, newest first
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionListView {
    pub title: &'static str,
    pub columns: [&'static str; 5],
    pub body: ListBody,
}

impl TransactionListView {
    pub fn build(user: &User, currency: &CurrencyConfig) -> Self {
        let body = if user.is_empty() {
            ListBody::Empty
        } else {
            ListBody::Rows(rows_newest_first(user, currency).collect())
        };

        Self {
            title: "Transactions",
            columns: LIST_COLUMNS,
            body,
        }
    }

    /// Rows in display order; empty when the placeholder is shown
    pub fn rows(&self) -> &[ListRow] {
        match &self.body {
            ListBody::Rows(rows) => rows.as_slice(),
            ListBody::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, ListBody::Empty)
    }
}

// ==================== Detail View ====================

/// Labeled receipt row
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Full field set of a single transaction
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptView {
    pub title: &'static str,
    pub fields: Vec<DetailField>,
}

impl ReceiptView {
    pub fn build(tx: &Transaction, currency: &CurrencyConfig) -> Self {
        let field = |label: &'static str, value: String| DetailField { label, value };

        Self {
            title: "Transaction Receipt",
            fields: vec![
                field("Date:", tx.date.clone()),
                field("ID:", tx.id.to_string()),
                field("Amount:", format_amount(&tx.amount, currency)),
                field("Category:", tx.category.clone()),
                field("Account:", tx.account.clone()),
                field("Info Source:", tx.info_source.clone()),
                field("Reference:", tx.reference_number.clone()),
                field("Memo:", tx.memo.clone()),
            ],
        }
    }

    /// Value shown next to `label`
    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// Shared fallback for unknown transactions and unknown routes
#[derive(Debug, Clone, PartialEq)]
pub struct NotFoundView {
    pub title: &'static str,
    pub message: &'static str,
}

impl Default for NotFoundView {
    fn default() -> Self {
        Self {
            title: "Not Found",
            message: "The page you requested could not be found.",
        }
    }
}

/// Receipt for one transaction, or the not-found fallback
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionDetailView {
    Receipt(ReceiptView),
    NotFound(NotFoundView),
}

impl TransactionDetailView {
    pub fn build(user: &User, id: &str, currency: &CurrencyConfig) -> Self {
        match user.find_transaction(id) {
            Some(tx) => TransactionDetailView::Receipt(ReceiptView::build(tx, currency)),
            None => TransactionDetailView::NotFound(NotFoundView::default()),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, TransactionDetailView::Receipt(_))
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionId;

    fn tx(id: &str, date: &str, amount: i64, account_type: &str, memo: &str) -> Transaction {
        Transaction {
            id: TransactionId::from(id),
            date: date.to_string(),
            amount: Decimal::from(amount),
            account_type: account_type.to_string(),
            memo: memo.to_string(),
            category: format!("category-{}", id),
            account: format!("account-{}", id),
            info_source: format!("source-{}", id),
            reference_number: format!("ref-{}", id),
        }
    }

    fn example_user() -> User {
        User::with_transactions(vec![
            tx("1", "2021-01-01", 10, "checking", "coffee"),
            tx("2", "2021-01-02", 20, "savings", ""),
        ])
    }

    #[test]
    fn test_list_is_newest_first() {
        let currency = CurrencyConfig::default();
        let view = TransactionListView::build(&example_user(), &currency);
        let ids: Vec<&str> = view.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(view.rows()[0].href, "/transactions/2");
        assert_eq!(view.rows()[1].amount, "$10");
        assert_eq!(view.columns, LIST_COLUMNS);
    }

    #[test]
    fn test_list_reverses_any_length() {
        let currency = CurrencyConfig::default();
        for len in 1..8i64 {
            let txs: Vec<Transaction> = (0..len)
                .map(|i| tx(&i.to_string(), "2021-01-01", i, "checking", ""))
                .collect();
            let expected: Vec<String> = txs.iter().rev().map(|t| t.id.to_string()).collect();
            let view = TransactionListView::build(&User::with_transactions(txs), &currency);
            let got: Vec<String> = view.rows().iter().map(|r| r.id.clone()).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_empty_list_uses_placeholder() {
        let view = TransactionListView::build(&User::default(), &CurrencyConfig::default());
        assert!(view.is_empty());
        assert_eq!(view.body, ListBody::Empty);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_detail_has_all_fields() {
        let user = example_user();
        let currency = CurrencyConfig::default();
        for t in &user.transactions {
            let id = t.id.to_string();
            match TransactionDetailView::build(&user, &id, &currency) {
                TransactionDetailView::Receipt(receipt) => {
                    assert_eq!(receipt.fields.len(), 8);
                    assert_eq!(receipt.value("Date:"), Some(t.date.as_str()));
                    assert_eq!(receipt.value("ID:"), Some(id.as_str()));
                    assert_eq!(receipt.value("Category:"), Some(t.category.as_str()));
                    assert_eq!(receipt.value("Account:"), Some(t.account.as_str()));
                    assert_eq!(receipt.value("Info Source:"), Some(t.info_source.as_str()));
                    assert_eq!(receipt.value("Reference:"), Some(t.reference_number.as_str()));
                    assert_eq!(receipt.value("Memo:"), Some(t.memo.as_str()));
                }
                other => panic!("expected receipt, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_detail_amount_has_symbol() {
        let view = TransactionDetailView::build(&example_user(), "1", &CurrencyConfig::default());
        match view {
            TransactionDetailView::Receipt(receipt) => {
                assert_eq!(receipt.value("Amount:"), Some("$10"));
            }
            other => panic!("expected receipt, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_unknown_id_is_not_found() {
        let view = TransactionDetailView::build(&example_user(), "99", &CurrencyConfig::default());
        assert!(!view.is_found());
        assert_eq!(view, TransactionDetailView::NotFound(NotFoundView::default()));
    }

    #[test]
    fn test_numeric_id_matches_route_text() {
        let mut t = tx("ignored", "2021-03-01", 5, "PayPal", "dues");
        t.id = TransactionId::from(7);
        let user = User::with_transactions(vec![t]);
        let currency = CurrencyConfig::default();
        assert!(TransactionDetailView::build(&user, "7", &currency).is_found());
        assert!(!TransactionDetailView::build(&user, "07", &currency).is_found());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let user = example_user();
        let currency = CurrencyConfig::default();
        assert_eq!(
            TransactionListView::build(&user, &currency),
            TransactionListView::build(&user, &currency)
        );
        assert_eq!(
            TransactionDetailView::build(&user, "2", &currency),
            TransactionDetailView::build(&user, "2", &currency)
        );
    }

    #[test]
    fn test_format_amount_positions() {
        let mut currency = CurrencyConfig::default();
        let amount: Decimal = "-3.25".parse().unwrap();
        assert_eq!(format_amount(&amount, &currency), "$-3.25");
        let scaled: Decimal = "20.00".parse().unwrap();
        assert_eq!(format_amount(&scaled, &currency), "$20.00");
        currency.symbol = " CAD".to_string();
        currency.symbol_position = SymbolPosition::After;
        assert_eq!(format_amount(&amount, &currency), "-3.25 CAD");
    }

    #[test]
    fn test_href_is_encoded() {
        assert_eq!(transaction_href("a b"), "/transactions/a%20b");
    }
}
