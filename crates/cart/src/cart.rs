use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{AggregateId, AggregateRoot, DomainError, DomainResult, Entity, ProductId};

/// Cart identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(pub AggregateId);

impl CartId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One line of a cart: a product reference and a quantity.
///
/// The cart stores nothing else about the product; name, price and stock are
/// composed in at read time through [`crate::ArticleDataPort`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl Entity for CartItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

/// Aggregate root: a shopping cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    items: Vec<CartItem>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
}

impl Cart {
    /// Open an empty cart.
    pub fn open(id: CartId, at: DateTime<Utc>) -> Self {
        Self {
            id,
            items: Vec::new(),
            created_at: at,
            updated_at: at,
            version: 1,
        }
    }

    /// Put units of a product into the cart; quantities of an existing line merge.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        Self::ensure_positive(quantity)?;
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => {
                item.quantity = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| DomainError::invariant("cart quantity overflow"))?;
            }
            None => self.items.push(CartItem {
                product_id,
                quantity,
            }),
        }
        self.touch(at);
        Ok(())
    }

    /// Set the quantity of an existing line.
    pub fn change_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        Self::ensure_positive(quantity)?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
            .ok_or(DomainError::NotFound)?;
        item.quantity = quantity;
        self.touch(at);
        Ok(())
    }

    /// Drop a line from the cart.
    pub fn remove_item(&mut self, product_id: ProductId, at: DateTime<Utc>) -> DomainResult<()> {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        if self.items.len() == before {
            return Err(DomainError::NotFound);
        }
        self.touch(at);
        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self, at: DateTime<Utc>) {
        if !self.items.is_empty() {
            self.items.clear();
            self.touch(at);
        }
    }

    fn ensure_positive(quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
        self.version += 1;
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Units of one product currently in the cart (0 when not present).
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.items
            .iter()
            .find(|item| item.product_id == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Product references of all lines, in insertion order.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|item| item.product_id).collect()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
