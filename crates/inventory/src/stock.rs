//! Stock level: the on-hand / allocated pair for a product.

use serde::{Deserialize, Serialize};

use stockpile_core::{InventoryError, InventoryResult, ProductId};

use crate::validate;

/// Current stock position for one product.
///
/// Invariant: `0 <= quantity_allocated <= quantity_on_hand`. Every mutation
/// validates the proposed state first and commits only when all checks pass,
/// so a rejected mutation leaves the level untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    product_id: ProductId,
    quantity_on_hand: i64,
    quantity_allocated: i64,
}

impl StockLevel {
    /// A fresh level with nothing on hand.
    pub fn empty(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity_on_hand: 0,
            quantity_allocated: 0,
        }
    }

    /// Rehydrate a level from known quantities, validating the invariant.
    pub fn with_quantities(
        product_id: ProductId,
        on_hand: i64,
        allocated: i64,
    ) -> InventoryResult<Self> {
        if on_hand < 0 {
            return Err(InventoryError::invalid_quantity_because(
                "stock_level",
                on_hand,
                "on-hand quantity cannot be negative",
            ));
        }
        if allocated < 0 {
            return Err(InventoryError::invalid_quantity_because(
                "stock_level",
                allocated,
                "allocated quantity cannot be negative",
            ));
        }
        validate::ensure_allocation_invariant(on_hand, allocated)?;
        Ok(Self {
            product_id,
            quantity_on_hand: on_hand,
            quantity_allocated: allocated,
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity_on_hand(&self) -> i64 {
        self.quantity_on_hand
    }

    pub fn quantity_allocated(&self) -> i64 {
        self.quantity_allocated
    }

    /// On-hand stock not yet allocated to anything.
    pub fn quantity_available(&self) -> i64 {
        self.quantity_on_hand - self.quantity_allocated
    }

    /// Receive stock into the warehouse.
    pub fn receive(&mut self, quantity: i64) -> InventoryResult<()> {
        validate::ensure_positive_quantity("receipt", quantity)?;
        self.quantity_on_hand += quantity;
        Ok(())
    }

    /// Reserve on-hand stock for an order.
    pub fn allocate(&mut self, quantity: i64) -> InventoryResult<()> {
        validate::ensure_positive_quantity("allocation", quantity)?;
        let allocated = self.quantity_allocated + quantity;
        validate::ensure_allocation_invariant(self.quantity_on_hand, allocated)?;
        self.quantity_allocated = allocated;
        Ok(())
    }

    /// Release a previous allocation back to available stock.
    pub fn deallocate(&mut self, quantity: i64) -> InventoryResult<()> {
        validate::ensure_positive_quantity("deallocation", quantity)?;
        if quantity > self.quantity_allocated {
            return Err(InventoryError::invalid_quantity_because(
                "deallocation",
                quantity,
                "exceeds allocated quantity",
            ));
        }
        self.quantity_allocated -= quantity;
        Ok(())
    }

    /// Ship previously allocated stock: both on-hand and allocated decrease.
    pub fn pick(&mut self, quantity: i64) -> InventoryResult<()> {
        validate::ensure_positive_quantity("pick", quantity)?;
        if quantity > self.quantity_allocated {
            return Err(InventoryError::invalid_quantity_because(
                "pick",
                quantity,
                "exceeds allocated quantity",
            ));
        }
        self.quantity_on_hand -= quantity;
        self.quantity_allocated -= quantity;
        Ok(())
    }

    /// Correct on-hand stock by a signed delta (cycle counts, damage).
    pub fn adjust(&mut self, delta: i64) -> InventoryResult<()> {
        validate::ensure_nonzero_delta("adjustment", delta)?;
        let on_hand = self.quantity_on_hand + delta;
        if on_hand < 0 {
            return Err(InventoryError::invalid_quantity_because(
                "adjustment",
                delta,
                "would drive on-hand quantity negative",
            ));
        }
        validate::ensure_allocation_invariant(on_hand, self.quantity_allocated)?;
        self.quantity_on_hand = on_hand;
        Ok(())
    }
}
