//! Open host service of the inventory context.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use storefront_core::{ProductId, ValueObject};

use crate::repository::StockRepository;

/// The inventory context's published view of one product's stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockInfo {
    pub product_id: ProductId,
    pub available: i64,
    /// Availability as judged by the inventory context. Consumers take this
    /// flag as-is rather than re-deriving it from the count.
    pub in_stock: bool,
}

impl ValueObject for StockInfo {}

/// Read-only query surface the inventory context exposes to other contexts.
pub trait StockOverview: Send + Sync {
    /// Stock of one product, or `None` if the product is not tracked.
    fn stock_of(&self, product_id: ProductId) -> Option<StockInfo>;

    /// Stock for a set of products.
    ///
    /// Untracked products are omitted from the result; the call never fails
    /// for an unknown identifier.
    fn stocks_of(&self, product_ids: &[ProductId]) -> HashMap<ProductId, StockInfo>;
}

impl<T> StockOverview for Arc<T>
where
    T: StockOverview + ?Sized,
{
    fn stock_of(&self, product_id: ProductId) -> Option<StockInfo> {
        (**self).stock_of(product_id)
    }

    fn stocks_of(&self, product_ids: &[ProductId]) -> HashMap<ProductId, StockInfo> {
        (**self).stocks_of(product_ids)
    }
}

/// Repository-backed [`StockOverview`] implementation.
#[derive(Debug)]
pub struct InventoryService<R> {
    stock: R,
}

impl<R> InventoryService<R> {
    pub fn new(stock: R) -> Self {
        Self { stock }
    }
}

fn info(item: &crate::stock::StockItem) -> StockInfo {
    StockInfo {
        product_id: item.product_id(),
        available: item.available(),
        in_stock: item.in_stock(),
    }
}

impl<R> StockOverview for InventoryService<R>
where
    R: StockRepository,
{
    fn stock_of(&self, product_id: ProductId) -> Option<StockInfo> {
        self.stock.find_by_product_id(product_id).map(|item| info(&item))
    }

    fn stocks_of(&self, product_ids: &[ProductId]) -> HashMap<ProductId, StockInfo> {
        self.stock
            .find_by_product_ids(product_ids)
            .into_iter()
            .map(|item| (item.product_id(), info(&item)))
            .collect()
    }
}
