//! Article data composition for the checkout context (launch-price fallback).

use std::collections::HashMap;

use storefront_catalog::{ProductCatalog, ProductInfo};
use storefront_checkout::{CheckoutArticle, CheckoutArticleDataPort};
use storefront_core::{DomainResult, Money, ProductId};
use storefront_inventory::{StockInfo, StockOverview};
use storefront_pricing::PriceCatalog;

use super::article_data::resolve_stock;

/// Implements checkout's [`CheckoutArticleDataPort`] against the open host
/// services of the catalog, pricing and inventory contexts.
///
/// Price policy: **lenient**. Products the pricing context has not absorbed
/// yet fall back to the catalog's launch price so carts opened before the
/// pricing migration can still be checked out. Remove the fallback once every
/// product has a listed price.
#[derive(Debug)]
pub struct CompositeCheckoutArticleDataAdapter<C, P, S> {
    catalog: C,
    pricing: P,
    inventory: S,
}

impl<C, P, S> CompositeCheckoutArticleDataAdapter<C, P, S> {
    pub fn new(catalog: C, pricing: P, inventory: S) -> Self {
        Self {
            catalog,
            pricing,
            inventory,
        }
    }
}

#[allow(deprecated)] // reads the launch price, the documented migration fallback
fn fallback_price(info: &ProductInfo) -> Money {
    tracing::warn!(
        product = %info.product_id,
        "no listed price; falling back to the catalog launch price"
    );
    info.launch_price()
}

fn merge(info: ProductInfo, listed: Option<Money>, stock: Option<&StockInfo>) -> CheckoutArticle {
    let unit_price = listed.unwrap_or_else(|| fallback_price(&info));
    let (units_on_hand, in_stock) = resolve_stock(&info, stock);
    CheckoutArticle {
        product_id: info.product_id,
        name: info.name,
        unit_price,
        units_on_hand,
        in_stock,
    }
}

impl<C, P, S> CheckoutArticleDataPort for CompositeCheckoutArticleDataAdapter<C, P, S>
where
    C: ProductCatalog,
    P: PriceCatalog,
    S: StockOverview,
{
    fn checkout_article(&self, product_id: ProductId) -> DomainResult<Option<CheckoutArticle>> {
        let Some(info) = self.catalog.product_info(product_id) else {
            return Ok(None);
        };
        let listed = self.pricing.price_of(product_id).map(|listed| listed.price);
        let stock = self.inventory.stock_of(product_id);
        Ok(Some(merge(info, listed, stock.as_ref())))
    }

    fn checkout_articles(
        &self,
        product_ids: &[ProductId],
    ) -> DomainResult<HashMap<ProductId, CheckoutArticle>> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let prices = self.pricing.prices_of(product_ids);
        let stocks = self.inventory.stocks_of(product_ids);
        tracing::debug!(
            requested = product_ids.len(),
            priced = prices.len(),
            stocked = stocks.len(),
            "composing checkout article data"
        );

        let mut articles = HashMap::with_capacity(product_ids.len());
        for &product_id in product_ids {
            let Some(info) = self.catalog.product_info(product_id) else {
                continue;
            };
            let listed = prices.get(&product_id).map(|listed| listed.price);
            articles.insert(product_id, merge(info, listed, stocks.get(&product_id)));
        }
        Ok(articles)
    }
}
