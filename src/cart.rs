//! # Shopping Cart
//!
//! The cart capability consumed by the pricing engine, plus an in-memory
//! implementation.
//!
//! ## Why a Trait?
//! The engine only needs two things from a cart: append a line and hand
//! back the current lines. Keeping that behind a trait means the real
//! storage-backed cart lives outside this crate, and tests inject a
//! lightweight stand-in returning canned data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Item;

// =============================================================================
// ShoppingCart Capability
// =============================================================================

/// The cart capability: ordered collection of cart lines.
///
/// Insertion order is irrelevant to any calculation; rules reduce over the
/// lines with commutative operations.
pub trait ShoppingCart {
    /// Appends a line to the cart.
    ///
    /// No validation happens here; any rejection is the cart
    /// implementation's responsibility.
    fn add(&mut self, item: Item);

    /// Returns a snapshot of the current cart lines.
    fn items(&self) -> Vec<Item>;

    /// Number of lines (distinct item entries, not summed quantity).
    fn line_count(&self) -> usize {
        self.items().len()
    }
}

// =============================================================================
// In-Memory Cart
// =============================================================================

/// A cart line with its insertion timestamp.
///
/// The item data is frozen at add time: if a product's price changes later,
/// lines already in the cart keep the price they were added with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The frozen item snapshot.
    pub item: Item,

    /// When this line was added to the cart.
    pub added_at: DateTime<Utc>,
}

/// In-memory [`ShoppingCart`] implementation.
///
/// This is the cart used when no persistent adaptor is wired in, and the
/// cart used throughout the test suite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryCart {
    lines: Vec<CartLine>,
}

impl InMemoryCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        InMemoryCart { lines: Vec::new() }
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines (sum of per-line quantities).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.item.quantity).sum()
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl ShoppingCart for InMemoryCart {
    fn add(&mut self, item: Item) {
        self.lines.push(CartLine {
            item,
            added_at: Utc::now(),
        });
    }

    fn items(&self) -> Vec<Item> {
        self.lines.iter().map(|l| l.item.clone()).collect()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
