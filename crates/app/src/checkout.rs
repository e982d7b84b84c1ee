//! Checkout use cases.

use storefront_cart::{CartId, CartRepository};
use storefront_checkout::{CheckoutArticleDataPort, CheckoutSummary};
use storefront_core::{DomainError, DomainResult};

/// Use cases for turning a cart into an order review.
#[derive(Debug)]
pub struct CheckoutUseCases<R, A> {
    carts: R,
    articles: A,
}

impl<R, A> CheckoutUseCases<R, A>
where
    R: CartRepository,
    A: CheckoutArticleDataPort,
{
    pub fn new(carts: R, articles: A) -> Self {
        Self { carts, articles }
    }

    /// Compose the order review for a cart.
    pub fn review(&self, cart_id: CartId) -> DomainResult<CheckoutSummary> {
        let cart = self.carts.find_by_id(cart_id).ok_or(DomainError::NotFound)?;
        let articles = self.articles.checkout_articles(&cart.product_ids())?;
        let summary = CheckoutSummary::compose(&cart, &articles)?;
        tracing::info!(cart = %cart_id, lines = summary.lines.len(), "order review composed");
        Ok(summary)
    }
}
