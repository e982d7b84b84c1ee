use chrono::{DateTime, Utc};

use storefront_core::{AggregateRoot, DomainError, DomainResult, Money, ProductId};

/// Aggregate root: the current sales price listed for one product.
///
/// Keyed by product: there is at most one listed price per product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPrice {
    product_id: ProductId,
    price: Money,
    updated_at: DateTime<Utc>,
    version: u64,
}

impl ListedPrice {
    /// List a price for a product.
    pub fn list(product_id: ProductId, price: Money, at: DateTime<Utc>) -> DomainResult<Self> {
        Self::ensure_not_negative(&price)?;
        Ok(Self {
            product_id,
            price,
            updated_at: at,
            version: 1,
        })
    }

    /// Replace the listed price.
    pub fn change(&mut self, price: Money, at: DateTime<Utc>) -> DomainResult<()> {
        Self::ensure_not_negative(&price)?;
        self.price = price;
        self.updated_at = at;
        self.version += 1;
        Ok(())
    }

    fn ensure_not_negative(price: &Money) -> DomainResult<()> {
        if price.is_negative() {
            return Err(DomainError::validation("a listed price cannot be negative"));
        }
        Ok(())
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl AggregateRoot for ListedPrice {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
