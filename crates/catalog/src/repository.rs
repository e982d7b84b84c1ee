//! Repository port of the catalog context.

use std::sync::Arc;

use storefront_core::ProductId;

use crate::product::Product;

/// Storage abstraction for [`Product`] aggregates.
///
/// Only this context calls it; other contexts go through the open host
/// service.
pub trait ProductRepository: Send + Sync {
    fn find_by_id(&self, product_id: ProductId) -> Option<Product>;
    fn save(&self, product: Product);
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn find_by_id(&self, product_id: ProductId) -> Option<Product> {
        (**self).find_by_id(product_id)
    }

    fn save(&self, product: Product) {
        (**self).save(product)
    }
}
