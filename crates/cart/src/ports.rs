//! Output ports of the cart context.
//!
//! Declared here, in the cart's own vocabulary, so cart use cases depend on
//! what they need rather than on the providing contexts' service types.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use storefront_core::{DomainResult, Money, ProductId, ValueObject};

/// Everything the cart needs to know about a product, merged from the owning
/// contexts.
///
/// Built fresh per request, never cached, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleData {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub available_stock: i64,
    pub available: bool,
}

impl ValueObject for ArticleData {}

/// Output port: where the cart gets its article data from.
///
/// A product unknown to the catalog is no error: single lookups return
/// `Ok(None)`, bulk lookups omit it. A product that is listed but lacks
/// mandatory data (a price, for the cart) surfaces as an invariant violation
/// rather than a default value.
pub trait ArticleDataPort: Send + Sync {
    fn article(&self, product_id: ProductId) -> DomainResult<Option<ArticleData>>;

    /// Bulk lookup. The result's key set is always a subset of `product_ids`.
    fn articles(&self, product_ids: &[ProductId]) -> DomainResult<HashMap<ProductId, ArticleData>>;
}

impl<T> ArticleDataPort for Arc<T>
where
    T: ArticleDataPort + ?Sized,
{
    fn article(&self, product_id: ProductId) -> DomainResult<Option<ArticleData>> {
        (**self).article(product_id)
    }

    fn articles(&self, product_ids: &[ProductId]) -> DomainResult<HashMap<ProductId, ArticleData>> {
        (**self).articles(product_ids)
    }
}
