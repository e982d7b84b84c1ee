use chrono::{DateTime, Utc};

use storefront_core::{AggregateRoot, DomainError, DomainResult, Money, ProductId};

/// Aggregate root: a product listed in the catalog.
///
/// The launch price and the stock-on-record count are leftovers from before
/// the pricing and inventory contexts existed. They are kept solely as
/// fallback data for the pricing migration and are not maintained going
/// forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    launch_price: Money,
    stock_on_record: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
}

impl Product {
    /// Register a new product in the catalog.
    pub fn register(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        launch_price: Money,
        stock_on_record: i64,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        let name = name.into();

        if sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if launch_price.is_negative() {
            return Err(DomainError::validation("launch price cannot be negative"));
        }
        if stock_on_record < 0 {
            return Err(DomainError::validation("stock on record cannot be negative"));
        }

        Ok(Self {
            id,
            sku,
            name,
            launch_price,
            stock_on_record,
            created_at: at,
            updated_at: at,
            version: 1,
        })
    }

    /// Change the display name.
    pub fn rename(&mut self, name: impl Into<String>, at: DateTime<Utc>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        self.name = name;
        self.touch(at);
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
        self.version += 1;
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn launch_price(&self) -> Money {
        self.launch_price
    }

    pub fn stock_on_record(&self) -> i64 {
        self.stock_on_record
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
