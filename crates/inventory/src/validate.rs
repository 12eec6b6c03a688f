//! Quantity and invariant checks.
//!
//! Pure functions, no IO, no logging; deterministic given their inputs. These
//! run against the *proposed* state of a mutation, before anything is
//! committed.

use stockpile_core::{InventoryError, InventoryResult};

/// Rule name carried by allocation-invariant faults.
pub const ALLOCATED_WITHIN_ON_HAND: &str = "allocated_within_on_hand";

/// Reject a quantity that is not strictly positive.
///
/// Receipts, allocations, deallocations and picks all move a positive amount
/// of stock; zero and negative quantities are malformed requests.
pub fn ensure_positive_quantity(operation: &str, quantity: i64) -> InventoryResult<()> {
    if quantity <= 0 {
        return Err(InventoryError::invalid_quantity_because(
            operation,
            quantity,
            "quantity must be positive",
        ));
    }
    Ok(())
}

/// Reject a zero adjustment delta.
pub fn ensure_nonzero_delta(operation: &str, delta: i64) -> InventoryResult<()> {
    if delta == 0 {
        return Err(InventoryError::invalid_quantity_because(
            operation,
            delta,
            "delta cannot be zero",
        ));
    }
    Ok(())
}

/// Reject a proposed on-hand/allocated pair where allocated exceeds on-hand.
pub fn ensure_allocation_invariant(on_hand: i64, allocated: i64) -> InventoryResult<()> {
    if allocated > on_hand {
        return Err(InventoryError::invariant(
            ALLOCATED_WITHIN_ON_HAND,
            on_hand,
            allocated,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_quantities_pass() {
        assert!(ensure_positive_quantity("receipt", 1).is_ok());
        assert!(ensure_positive_quantity("allocation", i64::MAX).is_ok());
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected_with_context() {
        let err = ensure_positive_quantity("receipt", -3).unwrap_err();
        match err {
            InventoryError::InvalidQuantity {
                operation,
                quantity,
                reason,
            } => {
                assert_eq!(operation, "receipt");
                assert_eq!(quantity, -3);
                assert!(reason.is_some());
            }
            _ => panic!("Expected InvalidQuantity"),
        }

        assert!(ensure_positive_quantity("pick", 0).is_err());
    }

    #[test]
    fn nonzero_delta_allows_negative_adjustments() {
        assert!(ensure_nonzero_delta("adjustment", -5).is_ok());
        assert!(ensure_nonzero_delta("adjustment", 5).is_ok());
        assert!(ensure_nonzero_delta("adjustment", 0).is_err());
    }

    #[test]
    fn allocation_invariant_rejects_over_allocation() {
        assert!(ensure_allocation_invariant(10, 10).is_ok());
        assert!(ensure_allocation_invariant(10, 0).is_ok());

        let err = ensure_allocation_invariant(4, 7).unwrap_err();
        match err {
            InventoryError::InvariantViolation {
                rule,
                on_hand,
                allocated,
            } => {
                assert_eq!(rule, ALLOCATED_WITHIN_ON_HAND);
                assert_eq!(on_hand, 4);
                assert_eq!(allocated, 7);
            }
            _ => panic!("Expected InvariantViolation"),
        }
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the invariant check accepts exactly allocated <= on_hand.
            #[test]
            fn invariant_check_matches_definition(on_hand in -1000i64..1000, allocated in -1000i64..1000) {
                let result = ensure_allocation_invariant(on_hand, allocated);
                if allocated > on_hand {
                    prop_assert!(result.is_err());
                } else {
                    prop_assert!(result.is_ok());
                }
            }

            /// Property: checks are deterministic given inputs.
            #[test]
            fn checks_are_deterministic(quantity in any::<i64>()) {
                prop_assert_eq!(
                    ensure_positive_quantity("receipt", quantity),
                    ensure_positive_quantity("receipt", quantity)
                );
                prop_assert_eq!(
                    ensure_nonzero_delta("adjustment", quantity),
                    ensure_nonzero_delta("adjustment", quantity)
                );
            }
        }
    }
}
