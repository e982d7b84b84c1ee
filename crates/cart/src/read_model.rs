//! Enriched read models of the cart context.
//!
//! Pure, per-request compositions of cart state and externally sourced
//! article data. They carry no identity of their own and are discarded once
//! the response is rendered.

use std::collections::HashMap;

use serde::Serialize;

use storefront_core::{DomainResult, Money, ProductId};

use crate::cart::{Cart, CartId};
use crate::ports::ArticleData;

/// One cart line joined with the current article data for its product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedCartItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub article: ArticleData,
}

impl EnrichedCartItem {
    /// Whether the line can be purchased as it stands: the article is
    /// available and stock covers the line quantity.
    pub fn can_purchase(&self) -> bool {
        self.article.available && self.article.available_stock >= self.quantity
    }

    pub fn line_total(&self) -> DomainResult<Money> {
        self.article.price.scaled(self.quantity)
    }
}

/// A cart joined with current article data for every line.
///
/// Lines whose product is no longer listed in the catalog are not silently
/// dropped; their identifiers are surfaced in `unlisted` so the caller can
/// tell the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedCart {
    pub cart_id: CartId,
    pub items: Vec<EnrichedCartItem>,
    pub unlisted: Vec<ProductId>,
}

impl EnrichedCart {
    /// Join a cart snapshot with the article data fetched for its products.
    pub fn compose(cart: &Cart, articles: &HashMap<ProductId, ArticleData>) -> Self {
        let mut items = Vec::with_capacity(cart.items().len());
        let mut unlisted = Vec::new();

        for line in cart.items() {
            match articles.get(&line.product_id) {
                Some(article) => items.push(EnrichedCartItem {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    article: article.clone(),
                }),
                None => unlisted.push(line.product_id),
            }
        }

        Self {
            cart_id: cart.id_typed(),
            items,
            unlisted,
        }
    }

    /// Sum of the line totals, `None` when no line carries article data.
    ///
    /// A display subtotal: lines in `unlisted` have no price and are not part
    /// of it. Purchase decisions go through [`EnrichedCart::can_checkout`].
    pub fn total(&self) -> DomainResult<Option<Money>> {
        let mut total: Option<Money> = None;
        for item in &self.items {
            let line = item.line_total()?;
            total = Some(match total {
                Some(sum) => sum.add(&line)?,
                None => line,
            });
        }
        Ok(total)
    }

    /// Whether the whole cart can proceed to checkout: at least one line,
    /// every referenced product still listed, and every line purchasable.
    pub fn can_checkout(&self) -> bool {
        !self.items.is_empty()
            && self.unlisted.is_empty()
            && self.items.iter().all(EnrichedCartItem::can_purchase)
    }
}

/// Product-page model: current article data plus what the cart already holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedProduct {
    pub article: ArticleData,
    pub in_cart: i64,
}

impl EnrichedProduct {
    pub fn new(article: ArticleData, in_cart: i64) -> Self {
        Self { article, in_cart }
    }

    /// Whether `requested` more units could be purchased on top of what the
    /// cart already holds.
    pub fn can_purchase(&self, requested: i64) -> bool {
        requested > 0
            && self.article.available
            && self
                .in_cart
                .checked_add(requested)
                .is_some_and(|wanted| wanted <= self.article.available_stock)
    }
}
