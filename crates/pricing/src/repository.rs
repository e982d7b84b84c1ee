//! Repository port of the pricing context.

use std::sync::Arc;

use storefront_core::ProductId;

use crate::price::ListedPrice;

/// Storage abstraction for [`ListedPrice`] aggregates.
pub trait PriceRepository: Send + Sync {
    fn find_by_product_id(&self, product_id: ProductId) -> Option<ListedPrice>;
    /// Bulk variant; unknown products are simply absent from the result.
    fn find_by_product_ids(&self, product_ids: &[ProductId]) -> Vec<ListedPrice>;
    fn save(&self, price: ListedPrice);
}

impl<R> PriceRepository for Arc<R>
where
    R: PriceRepository + ?Sized,
{
    fn find_by_product_id(&self, product_id: ProductId) -> Option<ListedPrice> {
        (**self).find_by_product_id(product_id)
    }

    fn find_by_product_ids(&self, product_ids: &[ProductId]) -> Vec<ListedPrice> {
        (**self).find_by_product_ids(product_ids)
    }

    fn save(&self, price: ListedPrice) {
        (**self).save(price)
    }
}
