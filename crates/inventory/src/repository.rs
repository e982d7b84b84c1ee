//! Repository port of the inventory context.

use std::sync::Arc;

use storefront_core::ProductId;

use crate::stock::StockItem;

/// Storage abstraction for [`StockItem`] aggregates.
pub trait StockRepository: Send + Sync {
    fn find_by_product_id(&self, product_id: ProductId) -> Option<StockItem>;
    /// Bulk variant; untracked products are simply absent from the result.
    fn find_by_product_ids(&self, product_ids: &[ProductId]) -> Vec<StockItem>;
    fn save(&self, item: StockItem);
}

impl<R> StockRepository for Arc<R>
where
    R: StockRepository + ?Sized,
{
    fn find_by_product_id(&self, product_id: ProductId) -> Option<StockItem> {
        (**self).find_by_product_id(product_id)
    }

    fn find_by_product_ids(&self, product_ids: &[ProductId]) -> Vec<StockItem> {
        (**self).find_by_product_ids(product_ids)
    }

    fn save(&self, item: StockItem) {
        (**self).save(item)
    }
}
