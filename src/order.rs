//! # Order Totaling
//!
//! Availability-aware purchase totaling for bookstore orders: resolve each
//! requested ISBN against the catalog, accumulate what resolved, and record
//! what did not.
//!
//! ## Per-Entry Outcomes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              price_for_order(Some(order))                               │
//! │                                                                         │
//! │  for each (isbn, qty) in order:                                         │
//! │                                                                         │
//! │    catalog.find_by_isbn(isbn)                                           │
//! │         │                                                               │
//! │         ├── Some(book) ──► total += qty × book.price                    │
//! │         │                  process.buy_book(book, qty)   (always, even  │
//! │         │                                                 for qty 0)    │
//! │         │                                                               │
//! │         └── None ────────► unavailable.insert(isbn)                     │
//! │                            (no purchase call, no total contribution)    │
//! │                                                                         │
//! │  Entries are independent; iteration order never changes the result.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Absent vs Empty
//! "No order supplied" and "an order with no lines" are different things and
//! stay different at the boundary: the former returns `Ok(None)`, the latter
//! a zero-total summary with an empty unavailable set.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Book, PurchaseSummary};
use crate::validation::{validate_isbn, validate_order_quantity};
use crate::MAX_ORDER_QUANTITY;

// =============================================================================
// Order Request
// =============================================================================

/// An order request: ISBN → requested quantity.
pub type Order = HashMap<String, i64>;

// =============================================================================
// Collaborator Capabilities
// =============================================================================

/// The catalog capability: key lookup by ISBN.
///
/// Not-found is a modeled outcome (`None`), never an error. Retries,
/// timeouts, and storage concerns belong to the implementation behind
/// this trait, not to the totaling logic.
pub trait BookCatalog {
    /// Looks up a book by ISBN.
    fn find_by_isbn(&self, isbn: &str) -> Option<Book>;
}

/// The purchase-action capability: fire and forget.
///
/// Invoked once per resolved order line with the resolved book and the
/// exact requested quantity. No return value is observed by this crate.
pub trait PurchaseProcess {
    /// Executes the purchase side effect for one resolved line.
    fn buy_book(&self, book: &Book, quantity: i64);
}

// =============================================================================
// Bookstore
// =============================================================================

/// Totals bookstore orders against an injected catalog and purchase process.
///
/// ## Example
/// ```rust,ignore
/// let store = Bookstore::new(catalog, process);
///
/// let mut order = Order::new();
/// order.insert("978-3".to_string(), 2);
///
/// let summary = store.price_for_order(Some(&order))?.unwrap();
/// ```
pub struct Bookstore<C: BookCatalog, P: PurchaseProcess> {
    catalog: C,
    process: P,
}

impl<C: BookCatalog, P: PurchaseProcess> Bookstore<C, P> {
    /// Creates a bookstore over a catalog and a purchase process.
    pub fn new(catalog: C, process: P) -> Self {
        Bookstore { catalog, process }
    }

    /// Totals an order, tracking which requested ISBNs could not be resolved.
    ///
    /// ## Outcomes
    /// - `Ok(None)`: no order was supplied; no collaborator was touched
    /// - `Ok(Some(summary))`: the order was processed in full
    /// - `Err(_)`: a precondition failed; no lookups or purchase actions ran,
    ///   and no partial total exists anywhere
    ///
    /// ## Preconditions
    /// Every line is validated before the first catalog lookup: ISBNs must
    /// be well-formed and quantities must be within `0..=MAX_ORDER_QUANTITY`.
    /// Validating up front is what guarantees "all or nothing": a bad line
    /// found halfway through would otherwise leave purchase actions already
    /// fired.
    pub fn price_for_order(&self, order: Option<&Order>) -> CoreResult<Option<PurchaseSummary>> {
        let Some(order) = order else {
            // No order ≠ empty order: absent input yields an absent result.
            return Ok(None);
        };

        self.check_preconditions(order)?;

        let mut summary = PurchaseSummary::empty();
        for (isbn, &quantity) in order {
            match self.catalog.find_by_isbn(isbn) {
                Some(book) => {
                    summary.total += book.price.multiply_quantity(quantity);
                    // Unconditional for resolved lines, quantity 0 included.
                    self.process.buy_book(&book, quantity);
                }
                None => {
                    summary.unavailable.insert(isbn.clone());
                }
            }
        }

        debug!(
            lines = order.len(),
            unavailable = summary.unavailable.len(),
            total = %summary.total,
            "Totaled order"
        );

        Ok(Some(summary))
    }

    /// Validates every order line before any side effect runs.
    fn check_preconditions(&self, order: &Order) -> CoreResult<()> {
        for (isbn, &quantity) in order {
            validate_isbn(isbn)?;

            validate_order_quantity(quantity).map_err(|err| match err {
                ValidationError::MustNotBeNegative { .. } => CoreError::NegativeOrderQuantity {
                    isbn: isbn.clone(),
                    quantity,
                },
                _ => CoreError::QuantityTooLarge {
                    requested: quantity,
                    max: MAX_ORDER_QUANTITY,
                },
            })?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Canned catalog: a fixed ISBN → Book map.
    struct StubCatalog {
        books: HashMap<String, Book>,
    }

    impl StubCatalog {
        fn with_books(books: &[Book]) -> Self {
            StubCatalog {
                books: books
                    .iter()
                    .map(|b| (b.isbn.clone(), b.clone()))
                    .collect(),
            }
        }
    }

    impl BookCatalog for StubCatalog {
        fn find_by_isbn(&self, isbn: &str) -> Option<Book> {
            self.books.get(isbn).cloned()
        }
    }

    /// Recording purchase process: captures every buy_book call.
    #[derive(Default)]
    struct RecordingProcess {
        calls: RefCell<Vec<(Book, i64)>>,
    }

    impl PurchaseProcess for RecordingProcess {
        fn buy_book(&self, book: &Book, quantity: i64) {
            self.calls.borrow_mut().push((book.clone(), quantity));
        }
    }

    fn book(isbn: &str, price_cents: i64, stock_qty: i64) -> Book {
        Book::new(isbn, Money::from_cents(price_cents), stock_qty)
    }

    fn store(books: &[Book]) -> Bookstore<StubCatalog, RecordingProcess> {
        Bookstore::new(StubCatalog::with_books(books), RecordingProcess::default())
    }

    #[test]
    fn test_absent_order_yields_absent_result() {
        let sut = store(&[book("111", 2500, 10)]);

        let result = sut.price_for_order(None).unwrap();

        assert!(result.is_none());
        assert!(sut.process.calls.borrow().is_empty());
    }

    #[test]
    fn test_empty_order_yields_zero_summary() {
        let sut = store(&[book("111", 2500, 10)]);

        let summary = sut.price_for_order(Some(&Order::new())).unwrap().unwrap();

        assert!(summary.total.is_zero());
        assert!(summary.unavailable.is_empty());
        assert!(sut.process.calls.borrow().is_empty());
    }

    #[test]
    fn test_single_line_totals_and_buys() {
        let sut = store(&[book("111", 2500, 10)]);
        let order = Order::from([("111".to_string(), 3)]);

        let summary = sut.price_for_order(Some(&order)).unwrap().unwrap();

        assert_eq!(summary.total.cents(), 7500); // 3 × $25.00
        assert!(summary.unavailable.is_empty());

        let calls = sut.process.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.isbn, "111");
        assert_eq!(calls[0].1, 3);
    }

    #[test]
    fn test_multiple_lines_sum_and_buy_per_line() {
        let sut = store(&[book("A", 1000, 5), book("B", 4000, 5)]);
        let order = Order::from([("A".to_string(), 2), ("B".to_string(), 1)]);

        let summary = sut.price_for_order(Some(&order)).unwrap().unwrap();

        assert_eq!(summary.total.cents(), 6000); // 2×$10 + 1×$40

        let calls = sut.process.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().any(|(b, q)| b.isbn == "A" && *q == 2));
        assert!(calls.iter().any(|(b, q)| b.isbn == "B" && *q == 1));
    }

    #[test]
    fn test_unresolvable_isbn_is_recorded_not_bought() {
        let sut = store(&[book("A", 1000, 5)]);
        let order = Order::from([("A".to_string(), 2), ("missing".to_string(), 4)]);

        let summary = sut.price_for_order(Some(&order)).unwrap().unwrap();

        // The missing line contributed nothing and triggered no purchase.
        assert_eq!(summary.total.cents(), 2000);
        assert_eq!(
            summary.unavailable.iter().collect::<Vec<_>>(),
            vec!["missing"]
        );

        let calls = sut.process.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.isbn, "A");
    }

    #[test]
    fn test_zero_quantity_line_still_buys() {
        let sut = store(&[book("Z", 9900, 100)]);
        let order = Order::from([("Z".to_string(), 0)]);

        let summary = sut.price_for_order(Some(&order)).unwrap().unwrap();

        assert!(summary.total.is_zero());
        let calls = sut.process.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, 0);
    }

    #[test]
    fn test_zero_price_line_counts_as_resolved() {
        let sut = store(&[book("FREE", 0, 10)]);
        let order = Order::from([("FREE".to_string(), 3)]);

        let summary = sut.price_for_order(Some(&order)).unwrap().unwrap();

        assert!(summary.total.is_zero());
        assert!(summary.unavailable.is_empty());
        assert_eq!(sut.process.calls.borrow().len(), 1);
    }

    #[test]
    fn test_negative_quantity_fails_fast_without_side_effects() {
        let sut = store(&[book("A", 1000, 5), book("B", 4000, 5)]);
        let order = Order::from([("A".to_string(), 2), ("B".to_string(), -1)]);

        let err = sut.price_for_order(Some(&order)).unwrap_err();

        assert!(matches!(err, CoreError::NegativeOrderQuantity { .. }));
        // No partial processing: the valid "A" line must not have fired.
        assert!(sut.process.calls.borrow().is_empty());
    }

    #[test]
    fn test_oversized_quantity_fails_fast() {
        let sut = store(&[book("A", 1000, 5)]);
        let order = Order::from([("A".to_string(), MAX_ORDER_QUANTITY + 1)]);

        let err = sut.price_for_order(Some(&order)).unwrap_err();

        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
        assert!(sut.process.calls.borrow().is_empty());
    }

    #[test]
    fn test_malformed_isbn_fails_fast() {
        let sut = store(&[]);
        let order = Order::from([("".to_string(), 1)]);

        let err = sut.price_for_order(Some(&order)).unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert!(sut.process.calls.borrow().is_empty());
    }

    #[test]
    fn test_all_lines_unresolvable() {
        let sut = store(&[]);
        let order = Order::from([("X".to_string(), 1), ("Y".to_string(), 2)]);

        let summary = sut.price_for_order(Some(&order)).unwrap().unwrap();

        assert!(summary.total.is_zero());
        assert_eq!(summary.unavailable.len(), 2);
        assert!(summary.unavailable.contains("X"));
        assert!(summary.unavailable.contains("Y"));
        assert!(sut.process.calls.borrow().is_empty());
    }
}
