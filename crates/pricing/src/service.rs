//! Open host service of the pricing context.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use storefront_core::{Money, ProductId, ValueObject};

use crate::repository::PriceRepository;

/// The pricing context's published view of one product's current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceInfo {
    pub product_id: ProductId,
    pub price: Money,
}

impl ValueObject for PriceInfo {}

/// Read-only query surface the pricing context exposes to other contexts.
pub trait PriceCatalog: Send + Sync {
    /// Current price of one product, or `None` if no price is listed.
    fn price_of(&self, product_id: ProductId) -> Option<PriceInfo>;

    /// Current prices for a set of products.
    ///
    /// Unknown products are omitted from the result; the call never fails for
    /// an unknown identifier.
    fn prices_of(&self, product_ids: &[ProductId]) -> HashMap<ProductId, PriceInfo>;
}

impl<T> PriceCatalog for Arc<T>
where
    T: PriceCatalog + ?Sized,
{
    fn price_of(&self, product_id: ProductId) -> Option<PriceInfo> {
        (**self).price_of(product_id)
    }

    fn prices_of(&self, product_ids: &[ProductId]) -> HashMap<ProductId, PriceInfo> {
        (**self).prices_of(product_ids)
    }
}

/// Repository-backed [`PriceCatalog`] implementation.
#[derive(Debug)]
pub struct PricingService<R> {
    prices: R,
}

impl<R> PricingService<R> {
    pub fn new(prices: R) -> Self {
        Self { prices }
    }
}

impl<R> PriceCatalog for PricingService<R>
where
    R: PriceRepository,
{
    fn price_of(&self, product_id: ProductId) -> Option<PriceInfo> {
        self.prices.find_by_product_id(product_id).map(|listed| PriceInfo {
            product_id: listed.product_id(),
            price: listed.price(),
        })
    }

    fn prices_of(&self, product_ids: &[ProductId]) -> HashMap<ProductId, PriceInfo> {
        self.prices
            .find_by_product_ids(product_ids)
            .into_iter()
            .map(|listed| {
                (
                    listed.product_id(),
                    PriceInfo {
                        product_id: listed.product_id(),
                        price: listed.price(),
                    },
                )
            })
            .collect()
    }
}
