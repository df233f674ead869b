use serde::{Deserialize, Serialize};
use std::fmt;

/// A single purchased line item, kept exactly as submitted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub short_description: String,
    /// Decimal price as text, e.g. `"6.49"`. Never validated up front.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// The submitted receipt content.
///
/// Every field is textual and decoded leniently: a field missing from the
/// JSON document becomes its empty value and simply scores nothing. Parsing
/// happens later, per rule, in [`crate::domain::points`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptData {
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// Identifier handed back to the submitter.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A stored receipt: generated id plus the data it was submitted with.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Receipt {
    pub id: ReceiptId,
    pub data: ReceiptData,
}

impl Receipt {
    pub fn new(id: ReceiptId, data: ReceiptData) -> Self {
        Self { id, data }
    }
}
