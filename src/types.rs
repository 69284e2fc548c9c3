//! # Domain Types
//!
//! Core domain types for the two checkout subsystems.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Pricing engine side              Order totaling side                   │
//! │  ┌─────────────────┐              ┌─────────────────┐                   │
//! │  │      Item       │              │      Book       │                   │
//! │  │  ─────────────  │              │  ─────────────  │                   │
//! │  │  item_type      │              │  isbn (business)│                   │
//! │  │  name           │              │  price (Money)  │                   │
//! │  │  quantity       │              │  stock_qty      │                   │
//! │  │  unit_price     │              └─────────────────┘                   │
//! │  └─────────────────┘              ┌─────────────────┐                   │
//! │  ┌─────────────────┐              │ PurchaseSummary │                   │
//! │  │    ItemType     │              │  ─────────────  │                   │
//! │  │  Other          │              │  total (Money)  │                   │
//! │  │  Electronic     │              │  unavailable    │                   │
//! │  └─────────────────┘              └─────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are immutable value objects: they are constructed once and
//! never mutated afterwards. Monetary fields use [`Money`] (integer cents).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item Type
// =============================================================================

/// Category of a cart item.
///
/// The only category the pricing rules distinguish today is electronics,
/// which attracts a flat handling surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Anything without special handling.
    Other,
    /// Electronic goods (attract the electronics surcharge).
    Electronic,
}

// =============================================================================
// Item
// =============================================================================

/// A line in the shopping cart.
///
/// One `Item` is one cart line: a product, how many units of it, and the
/// unit price frozen at the time it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Category used by pricing rules.
    pub item_type: ItemType,

    /// Display name shown to the customer and on the receipt.
    pub name: String,

    /// Units of this product in the cart (never negative).
    pub quantity: i64,

    /// Unit price frozen when the line was created.
    pub unit_price: Money,
}

impl Item {
    /// Creates a new cart line.
    pub fn new(item_type: ItemType, name: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        Item {
            item_type,
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Line value: unit price × quantity.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::types::{Item, ItemType};
    /// use checkout_core::Money;
    ///
    /// let line = Item::new(ItemType::Other, "Notebook", 2, Money::from_cents(1000));
    /// assert_eq!(line.line_total().cents(), 2000); // $20.00
    /// ```
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// True if this line is an electronic good.
    #[inline]
    pub fn is_electronic(&self) -> bool {
        self.item_type == ItemType::Electronic
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog.
///
/// Looked up by ISBN through the [`BookCatalog`](crate::order::BookCatalog)
/// capability; this crate never queries storage itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// ISBN - business identifier, the catalog lookup key.
    pub isbn: String,

    /// Price per copy.
    pub price: Money,

    /// Copies on hand according to the catalog.
    pub stock_qty: i64,
}

impl Book {
    /// Creates a new book record.
    pub fn new(isbn: impl Into<String>, price: Money, stock_qty: i64) -> Self {
        Book {
            isbn: isbn.into(),
            price,
            stock_qty,
        }
    }
}

// =============================================================================
// Purchase Summary
// =============================================================================

/// Result of totaling one order.
///
/// Created fresh per order and never mutated after return.
///
/// ## Invariants
/// - `total` only ever accumulates non-negative contributions from
///   resolved order lines
/// - ISBNs in `unavailable` contributed nothing to `total` and triggered
///   no purchase action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    /// Sum of quantity × price over every resolved order line.
    pub total: Money,

    /// Requested ISBNs the catalog could not resolve.
    ///
    /// BTreeSet keeps the set deterministic regardless of the order map's
    /// iteration order.
    pub unavailable: BTreeSet<String>,
}

impl PurchaseSummary {
    /// An empty summary: zero total, nothing unavailable.
    pub fn empty() -> Self {
        PurchaseSummary {
            total: Money::zero(),
            unavailable: BTreeSet::new(),
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
    fn test_line_total() {
        let line = Item::new(ItemType::Other, "Pen", 3, Money::from_cents(200));
        assert_eq!(line.line_total().cents(), 600);

        let zero_qty = Item::new(ItemType::Other, "Pen", 0, Money::from_cents(200));
        assert!(zero_qty.line_total().is_zero());
    }

    #[test]
    fn test_is_electronic() {
        let phone = Item::new(ItemType::Electronic, "Phone", 1, Money::from_cents(30000));
        let book = Item::new(ItemType::Other, "Book", 1, Money::from_cents(1500));
        assert!(phone.is_electronic());
        assert!(!book.is_electronic());
    }

    #[test]
    fn test_empty_summary() {
        let summary = PurchaseSummary::empty();
        assert!(summary.total.is_zero());
        assert!(summary.unavailable.is_empty());
    }

    #[test]
    fn test_summary_json_shape() {
        let mut summary = PurchaseSummary::empty();
        summary.total = Money::from_cents(6000);
        summary.unavailable.insert("978-0-00".to_string());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 6000);
        assert_eq!(json["unavailable"][0], "978-0-00");
    }
}
