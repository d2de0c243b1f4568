//! # Domain Types
//!
//! Core domain types used throughout the receipt processor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  into_receipt(id)  ┌─────────────────┐            │
//! │  │   NewReceipt    │ ─────────────────► │     Receipt     │            │
//! │  │  ─────────────  │                    │  ─────────────  │            │
//! │  │  retailer       │                    │  id (UUID)      │            │
//! │  │  purchaseDate   │                    │  retailer       │            │
//! │  │  purchaseTime   │                    │  purchaseDate   │            │
//! │  │  total          │                    │  purchaseTime   │            │
//! │  │  items[]        │                    │  total          │            │
//! │  └─────────────────┘                    │  items[] ──┐    │            │
//! │                                         └────────────┼────┘            │
//! │                                                      ▼                  │
//! │                                         ┌─────────────────┐            │
//! │                                         │      Item       │            │
//! │                                         │  shortDescription│           │
//! │                                         │  price          │            │
//! │                                         └─────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Tokens
//! Dates, times and amounts are kept exactly as received. Each points rule
//! parses the token it needs, so one malformed field only affects its rule.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item
// =============================================================================

/// One purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description; may carry surrounding whitespace.
    #[serde(default)]
    pub short_description: String,

    /// Monetary token, e.g. `"6.49"`.
    #[serde(default)]
    pub price: String,
}

impl Item {
    /// Creates an item from its description and price token.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A stored purchase record.
///
/// ## Invariants
/// - `id` is assigned once, before the receipt reaches the store
/// - `items` is non-empty once the validation gate has run
/// - Never mutated after creation: the store only hands out shared views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Retailer display name.
    pub retailer: String,

    /// `YYYY-MM-DD`.
    pub purchase_date: String,

    /// `HH:MM`, 24-hour.
    pub purchase_time: String,

    /// Monetary token, e.g. `"35.35"`.
    pub total: String,

    /// Purchased lines, in the order received.
    pub items: Vec<Item>,
}

// =============================================================================
// New Receipt
// =============================================================================

/// A receipt as submitted, before an identifier is assigned.
///
/// ## Missing Fields
/// A missing field decodes as empty; the validation gate then reports it by
/// name ("retailer is required").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewReceipt {
    #[serde(default)]
    pub retailer: String,

    #[serde(default)]
    pub purchase_date: String,

    #[serde(default)]
    pub purchase_time: String,

    #[serde(default)]
    pub total: String,

    #[serde(default)]
    pub items: Vec<Item>,
}

impl NewReceipt {
    /// Attaches an identifier, producing the receipt that gets stored.
    pub fn into_receipt(self, id: impl Into<String>) -> Receipt {
        Receipt {
            id: id.into(),
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            total: self.total,
            items: self.items,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_receipt_decodes_camel_case() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        }"#;

        let new_receipt: NewReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(new_receipt.retailer, "Walgreens");
        assert_eq!(new_receipt.purchase_time, "08:13");
        assert_eq!(new_receipt.items[1], Item::new("Dasani", "1.40"));
    }

    #[test]
    fn test_new_receipt_missing_fields_default_to_empty() {
        let new_receipt: NewReceipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert_eq!(new_receipt.retailer, "Target");
        assert!(new_receipt.total.is_empty());
        assert!(new_receipt.items.is_empty());
    }

    #[test]
    fn test_into_receipt_keeps_fields_and_item_order() {
        let new_receipt = NewReceipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "13:13".to_string(),
            total: "2.65".to_string(),
            items: vec![Item::new("b", "1.25"), Item::new("a", "1.40")],
        };

        let receipt = new_receipt.clone().into_receipt("abc");
        assert_eq!(receipt.id, "abc");
        assert_eq!(receipt.retailer, new_receipt.retailer);
        assert_eq!(receipt.items, new_receipt.items);
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let receipt = NewReceipt {
            retailer: "Target".to_string(),
            items: vec![Item::new("Pepsi", "1.25")],
            ..NewReceipt::default()
        }
        .into_receipt("abc");

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["purchaseDate"], "");
        assert_eq!(value["items"][0]["shortDescription"], "Pepsi");
    }
}
