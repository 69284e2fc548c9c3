//! # Pricing Engine
//!
//! The rule-composition pricing engine: an ordered list of independent
//! price rules, each mapping the full cart snapshot to one monetary
//! contribution, summed into the total a customer pays.
//!
//! ## How a Total is Built
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     PricingEngine::calculate()                          │
//! │                                                                         │
//! │  cart.items() ── one snapshot ──┬──► RegularCost ────────► $72.00      │
//! │                                 ├──► DeliveryPrice ──────► $5.00       │
//! │                                 └──► ExtraCostFor... ────► $7.50       │
//! │                                                              │          │
//! │                                            sum ──────────► $84.50      │
//! │                                                                         │
//! │  Rules never see each other's output. The engine may apply them in     │
//! │  any order and the total is identical.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rule Independence
//! Each rule is a stateless function of the item list. That independence is
//! what lets the rule list be any subset, any ordering, even with repeats:
//! the reduction is a plain commutative sum.

use tracing::debug;

use crate::cart::ShoppingCart;
use crate::money::Money;
use crate::types::Item;

// =============================================================================
// Fee Schedule Constants
// =============================================================================

/// Delivery fee for 1-3 cart lines.
pub const DELIVERY_FEE_SMALL: Money = Money::from_cents(500);

/// Delivery fee for 4-10 cart lines.
pub const DELIVERY_FEE_MEDIUM: Money = Money::from_cents(1250);

/// Delivery fee for 11+ cart lines.
pub const DELIVERY_FEE_LARGE: Money = Money::from_cents(2000);

/// Flat handling surcharge when the cart contains any electronics.
pub const ELECTRONICS_SURCHARGE: Money = Money::from_cents(750);

// =============================================================================
// PriceRule Capability
// =============================================================================

/// A price rule: one stateless function from the full cart snapshot to a
/// monetary contribution.
///
/// ## Contract
/// - Never negative
/// - Depends only on the item list (no shared state, no other rule's output)
pub trait PriceRule {
    /// The contribution of this rule for the given cart snapshot.
    fn price_to_aggregate(&self, items: &[Item]) -> Money;
}

// =============================================================================
// Rule: RegularCost
// =============================================================================

/// Sum of all line values (quantity × unit price).
///
/// The empty cart costs nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularCost;

impl PriceRule for RegularCost {
    fn price_to_aggregate(&self, items: &[Item]) -> Money {
        items.iter().map(Item::line_total).sum()
    }
}

// =============================================================================
// Rule: DeliveryPrice
// =============================================================================

/// Stepped delivery fee keyed on the number of cart lines.
///
/// ## Fee Schedule
/// ```text
/// ┌──────────────┬──────────┐
/// │  cart lines  │   fee    │
/// ├──────────────┼──────────┤
/// │      0       │  $0.00   │
/// │     1-3      │  $5.00   │
/// │     4-10     │  $12.50  │
/// │     11+      │  $20.00  │
/// └──────────────┴──────────┘
/// ```
///
/// The key is the count of distinct item entries, not the summed quantity:
/// a line of 5 pens is one parcel slot, same as a line of 1 pen. Boundaries
/// are exact; 3 and 10 belong to the lower band, 4 and 11 to the next one up.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryPrice;

impl PriceRule for DeliveryPrice {
    fn price_to_aggregate(&self, items: &[Item]) -> Money {
        match items.len() {
            0 => Money::zero(),
            1..=3 => DELIVERY_FEE_SMALL,
            4..=10 => DELIVERY_FEE_MEDIUM,
            _ => DELIVERY_FEE_LARGE,
        }
    }
}

// =============================================================================
// Rule: ExtraCostForElectronics
// =============================================================================

/// Flat handling surcharge if the cart contains any electronic item.
///
/// Presence-only check: one phone or ten TVs, the surcharge is the same
/// [`ELECTRONICS_SURCHARGE`]. Quantity and price of the electronic lines
/// are irrelevant to the magnitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraCostForElectronics;

impl PriceRule for ExtraCostForElectronics {
    fn price_to_aggregate(&self, items: &[Item]) -> Money {
        if items.iter().any(Item::is_electronic) {
            ELECTRONICS_SURCHARGE
        } else {
            Money::zero()
        }
    }
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Aggregates a cart and an ordered list of price rules into one total.
///
/// ## Rule List
/// Any subset, ordering, or repetition of rules is accepted, including the
/// empty list (which always totals zero). The engine imposes no uniqueness
/// constraint; what rules are active is entirely the caller's composition
/// decision.
///
/// ## Example
/// ```rust
/// use checkout_core::cart::InMemoryCart;
/// use checkout_core::pricing::*;
/// use checkout_core::types::{Item, ItemType};
/// use checkout_core::Money;
///
/// let mut engine = PricingEngine::new(
///     InMemoryCart::new(),
///     vec![
///         Box::new(RegularCost),
///         Box::new(DeliveryPrice),
///         Box::new(ExtraCostForElectronics),
///     ],
/// );
/// engine.add_to_cart(Item::new(ItemType::Electronic, "Headphones", 1, Money::from_cents(5000)));
///
/// // $50.00 + $5.00 delivery + $7.50 electronics surcharge
/// assert_eq!(engine.calculate().cents(), 6250);
/// ```
pub struct PricingEngine<C: ShoppingCart> {
    cart: C,
    rules: Vec<Box<dyn PriceRule>>,
}

impl<C: ShoppingCart> PricingEngine<C> {
    /// Creates an engine over a cart and an ordered rule list.
    ///
    /// Ownership makes the collaborators non-optional: there is no null
    /// cart or null rule to fail fast on, the types rule them out.
    pub fn new(cart: C, rules: Vec<Box<dyn PriceRule>>) -> Self {
        PricingEngine { cart, rules }
    }

    /// Computes the total: every rule applied to one cart snapshot, summed.
    ///
    /// The item list is read from the cart exactly once per call; all rules
    /// see the same snapshot. Calling twice without mutating the cart in
    /// between yields the same total.
    pub fn calculate(&self) -> Money {
        let items = self.cart.items();
        let total: Money = self
            .rules
            .iter()
            .map(|rule| rule.price_to_aggregate(&items))
            .sum();

        debug!(
            lines = items.len(),
            rules = self.rules.len(),
            total = %total,
            "Calculated cart total"
        );

        total
    }

    /// Adds an item to the cart.
    ///
    /// Pure delegation to the cart's add capability; no validation here.
    pub fn add_to_cart(&mut self, item: Item) {
        self.cart.add(item);
    }

    /// Read access to the underlying cart.
    pub fn cart(&self) -> &C {
        &self.cart
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
