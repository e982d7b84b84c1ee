use chrono::{DateTime, Utc};

use storefront_core::{AggregateRoot, DomainError, DomainResult, ProductId};

/// Aggregate root: the stock level tracked for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockItem {
    product_id: ProductId,
    available: i64,
    updated_at: DateTime<Utc>,
    version: u64,
}

impl StockItem {
    /// Start tracking stock for a product.
    pub fn track(product_id: ProductId, initial: i64, at: DateTime<Utc>) -> DomainResult<Self> {
        if initial < 0 {
            return Err(DomainError::validation("initial stock cannot be negative"));
        }
        Ok(Self {
            product_id,
            available: initial,
            updated_at: at,
            version: 1,
        })
    }

    /// Book incoming units.
    pub fn receive(&mut self, quantity: i64, at: DateTime<Utc>) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation("received quantity must be positive"));
        }
        self.available = self
            .available
            .checked_add(quantity)
            .ok_or_else(|| DomainError::invariant("stock level overflow"))?;
        self.touch(at);
        Ok(())
    }

    /// Book outgoing units. Stock can never go negative.
    pub fn withdraw(&mut self, quantity: i64, at: DateTime<Utc>) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation("withdrawn quantity must be positive"));
        }
        if quantity > self.available {
            return Err(DomainError::invariant(format!(
                "cannot withdraw {quantity} units, only {} available",
                self.available
            )));
        }
        self.available -= quantity;
        self.touch(at);
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
        self.version += 1;
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn available(&self) -> i64 {
        self.available
    }

    pub fn in_stock(&self) -> bool {
        self.available > 0
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl AggregateRoot for StockItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracked(initial: i64) -> StockItem {
        StockItem::track(ProductId::new(), initial, Utc::now()).unwrap()
    }

    #[test]
    fn track_rejects_negative_initial_stock() {
        let err = StockItem::track(ProductId::new(), -1, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn receive_and_withdraw_move_the_level() {
        let mut item = tracked(2);
        item.receive(3, Utc::now()).unwrap();
        assert_eq!(item.available(), 5);

        item.withdraw(5, Utc::now()).unwrap();
        assert_eq!(item.available(), 0);
        assert!(!item.in_stock());
        assert_eq!(item.version(), 3);
    }

    #[test]
    fn withdraw_cannot_drive_stock_negative() {
        let mut item = tracked(1);
        let err = item.withdraw(2, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(item.available(), 1);
    }

    #[test]
    fn zero_and_negative_movements_are_rejected() {
        let mut item = tracked(1);
        assert!(item.receive(0, Utc::now()).is_err());
        assert!(item.receive(-4, Utc::now()).is_err());
        assert!(item.withdraw(0, Utc::now()).is_err());
        assert_eq!(item.version(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any sequence of accepted movements keeps stock non-negative.
            #[test]
            fn stock_never_goes_negative(moves in proptest::collection::vec(-20i64..20, 0..40)) {
                let mut item = tracked(10);
                for delta in moves {
                    let at = Utc::now();
                    let _ = if delta >= 0 {
                        item.receive(delta, at)
                    } else {
                        item.withdraw(-delta, at)
                    };
                    prop_assert!(item.available() >= 0);
                }
            }
        }
    }
}
