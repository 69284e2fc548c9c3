//! # Validation Module
//!
//! Input validation for caller-supplied order data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (UI, API handler)                                     │
//! │  ├── Basic format checks, immediate user feedback                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Business rule validation before any totaling runs                 │
//! │  └── A failed check means NO lookups and NO purchase actions fire      │
//! │                                                                         │
//! │  Defense in depth: a bad order line never produces a partial total     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_isbn, validate_order_quantity};
//!
//! validate_isbn("978-0-13-468599-1").unwrap();
//! validate_order_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_ORDER_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// ISBN Validator
// =============================================================================

/// Validates an ISBN used as a catalog lookup key.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 20 characters
/// - Should contain only alphanumeric characters and hyphens
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_isbn;
///
/// assert!(validate_isbn("978-0-13-468599-1").is_ok());
/// assert!(validate_isbn("").is_err());
/// ```
pub fn validate_isbn(isbn: &str) -> ValidationResult<()> {
    let isbn = isbn.trim();

    if isbn.is_empty() {
        return Err(ValidationError::Required {
            field: "isbn".to_string(),
        });
    }

    if isbn.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "isbn".to_string(),
            max: 20,
        });
    }

    if !isbn.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: "must contain only letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Quantity Validator
// =============================================================================

/// Validates a requested order quantity.
///
/// ## Rules
/// - Must not be negative (zero is allowed: a resolved zero-quantity line
///   still triggers its purchase action, contributing nothing to the total)
/// - Must not exceed [`MAX_ORDER_QUANTITY`]
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_order_quantity;
///
/// assert!(validate_order_quantity(0).is_ok());
/// assert!(validate_order_quantity(999).is_ok());
/// assert!(validate_order_quantity(-1).is_err());
/// ```
pub fn validate_order_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ORDER_QUANTITY {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("must not exceed {}", MAX_ORDER_QUANTITY),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
