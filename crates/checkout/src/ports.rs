//! Output ports of the checkout context.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use storefront_core::{DomainResult, Money, ProductId, ValueObject};

/// Everything checkout needs to know about a product, in checkout's own
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutArticle {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub units_on_hand: i64,
    pub in_stock: bool,
}

impl ValueObject for CheckoutArticle {}

/// Output port: where checkout gets its article data from.
///
/// Same contract shape as the cart's port: unknown products are absent
/// results, not errors; bulk result keys are a subset of the queried
/// identifiers.
pub trait CheckoutArticleDataPort: Send + Sync {
    fn checkout_article(&self, product_id: ProductId) -> DomainResult<Option<CheckoutArticle>>;

    fn checkout_articles(
        &self,
        product_ids: &[ProductId],
    ) -> DomainResult<HashMap<ProductId, CheckoutArticle>>;
}

impl<T> CheckoutArticleDataPort for Arc<T>
where
    T: CheckoutArticleDataPort + ?Sized,
{
    fn checkout_article(&self, product_id: ProductId) -> DomainResult<Option<CheckoutArticle>> {
        (**self).checkout_article(product_id)
    }

    fn checkout_articles(
        &self,
        product_ids: &[ProductId],
    ) -> DomainResult<HashMap<ProductId, CheckoutArticle>> {
        (**self).checkout_articles(product_ids)
    }
}
