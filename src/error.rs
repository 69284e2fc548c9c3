//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         What is an error here?                          │
//! │                                                                         │
//! │  Precondition violation (bad quantity, malformed ISBN)                  │
//! │  └── CoreError / ValidationError: fail fast, no partial totals          │
//! │                                                                         │
//! │  Unresolvable catalog identifier                                        │
//! │  └── NOT an error: recorded in PurchaseSummary.unavailable              │
//! │                                                                         │
//! │  Absent order input                                                     │
//! │  └── NOT an error: modeled as Ok(None), distinct from empty order       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ISBN, quantities, etc.)
//! 3. Errors are enum variants, never String
//! 4. Modeled outcomes (unavailable, absent) never travel as errors

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent precondition violations. When one is returned,
/// the computation produced no result at all, never a partial total.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order line requested a negative quantity.
    ///
    /// ## When This Occurs
    /// The order map is caller-supplied; a negative quantity would let the
    /// total shrink, violating the rule that resolved lines only ever add
    /// non-negative contributions.
    #[error("Order line {isbn} has negative quantity {quantity}")]
    NegativeOrderQuantity { isbn: String, quantity: i64 },

    /// An order line requested more than the allowed maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., bad characters in an ISBN).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
