//! Basic types for the core module

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use std::borrow::Cow;

/// Transaction identifier as delivered by the upstream snapshot.
///
/// Snapshots carry ids either as JSON numbers (database keys) or as strings.
/// Route segments are always text, so comparisons go through
/// [`TransactionId::canonical`]: text is used verbatim and numbers use their
/// plain decimal rendering. `"1"` matches `1`; `"01"` and `" 1"` do not.
///
/// Any JSON number is accepted, including integers above `i64::MAX` and
/// fractional values. Floats that hold a whole value render without a
/// fraction, so `1.0` matches `"1"` and `2.5` matches `"2.5"`.
///
/// An empty text id is kept as delivered, but its detail link is
/// `/transactions/` which never reaches a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(Number),
    Text(String),
}

impl TransactionId {
    /// Canonical textual form used for matching and display
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            TransactionId::Number(n) => match n.as_f64().filter(|_| n.is_f64()) {
                Some(f) => Cow::Owned(f.to_string()),
                None => Cow::Owned(n.to_string()),
            },
            TransactionId::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Exact comparison against a textual key after normalization
    pub fn matches(&self, key: &str) -> bool {
        self.canonical() == key
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        TransactionId::Text(s.to_string())
    }
}

impl From<i64> for TransactionId {
    fn from(n: i64) -> Self {
        TransactionId::Number(Number::from(n))
    }
}

/// Treat `null` display labels as empty strings
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
