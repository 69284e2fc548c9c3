//! # checkout-core: Pure Checkout Pricing Logic
//!
//! This crate is the **heart** of the checkout: it computes what a customer
//! pays. It contains two independent subsystems, both pure functions over
//! snapshots of injected collaborator state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Callers (app layer, API, terminal UI)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │   order   │  │   │
//! │  │   │ Item/Book │  │   Money   │  │ PriceRule │  │ Bookstore │  │   │
//! │  │   │  Summary  │  │  (cents)  │  │  Engine   │  │  totaling │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │     Injected collaborators (ShoppingCart, BookCatalog,          │   │
//! │  │     PurchaseProcess): storage and side effects live here        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Book, PurchaseSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - ShoppingCart capability and in-memory implementation
//! - [`pricing`] - Price rules and the rule-composition engine
//! - [`order`] - Availability-aware order totaling
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::cart::InMemoryCart;
//! use checkout_core::pricing::{DeliveryPrice, PricingEngine, RegularCost};
//! use checkout_core::types::{Item, ItemType};
//! use checkout_core::Money;
//!
//! let mut engine = PricingEngine::new(
//!     InMemoryCart::new(),
//!     vec![Box::new(RegularCost), Box::new(DeliveryPrice)],
//! );
//!
//! // Two notebooks at $10.00 each
//! engine.add_to_cart(Item::new(
//!     ItemType::Other,
//!     "Notebook",
//!     2,
//!     Money::from_cents(1000),
//! ));
//!
//! // $20.00 regular cost + $5.00 delivery (one cart line)
//! assert_eq!(engine.calculate().cents(), 2500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity a single order line may request.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Can be made configurable per-tenant in future versions.
pub const MAX_ORDER_QUANTITY: i64 = 999;
