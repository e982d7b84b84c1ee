//! Article data composition for the cart context (strict price policy).

use std::collections::HashMap;

use storefront_cart::{ArticleData, ArticleDataPort};
use storefront_catalog::{ProductCatalog, ProductInfo};
use storefront_core::{DomainError, DomainResult, Money, ProductId};
use storefront_inventory::{StockInfo, StockOverview};
use storefront_pricing::PriceCatalog;

/// Implements the cart's [`ArticleDataPort`] against the open host services
/// of the catalog, pricing and inventory contexts.
///
/// Price policy: **strict**. A product the catalog lists but pricing does not
/// is an inconsistent state that must be fixed at the source; defaulting the
/// price here would let the cart sell at 0. Stock is softer: a product the
/// inventory does not track yet falls back to the catalog's stock-on-record.
#[derive(Debug)]
pub struct CompositeArticleDataAdapter<C, P, S> {
    catalog: C,
    pricing: P,
    inventory: S,
}

impl<C, P, S> CompositeArticleDataAdapter<C, P, S> {
    pub fn new(catalog: C, pricing: P, inventory: S) -> Self {
        Self {
            catalog,
            pricing,
            inventory,
        }
    }
}

fn missing_price(product_id: ProductId) -> DomainError {
    DomainError::invariant(format!(
        "product {product_id} has no listed price; populate the pricing context before selling it"
    ))
}

pub(crate) fn resolve_stock(info: &ProductInfo, stock: Option<&StockInfo>) -> (i64, bool) {
    match stock {
        Some(stock) => (stock.available, stock.in_stock),
        None => (info.stock_on_record, info.stock_on_record > 0),
    }
}

fn merge(info: ProductInfo, price: Money, stock: Option<&StockInfo>) -> ArticleData {
    let (available_stock, available) = resolve_stock(&info, stock);
    ArticleData {
        product_id: info.product_id,
        name: info.name,
        price,
        available_stock,
        available,
    }
}

impl<C, P, S> ArticleDataPort for CompositeArticleDataAdapter<C, P, S>
where
    C: ProductCatalog,
    P: PriceCatalog,
    S: StockOverview,
{
    fn article(&self, product_id: ProductId) -> DomainResult<Option<ArticleData>> {
        let Some(info) = self.catalog.product_info(product_id) else {
            return Ok(None);
        };
        let price = self
            .pricing
            .price_of(product_id)
            .map(|listed| listed.price)
            .ok_or_else(|| missing_price(product_id))?;
        let stock = self.inventory.stock_of(product_id);
        Ok(Some(merge(info, price, stock.as_ref())))
    }

    fn articles(&self, product_ids: &[ProductId]) -> DomainResult<HashMap<ProductId, ArticleData>> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        // One round-trip each for prices and stock. Product info has no bulk
        // query on the catalog service, so it is fetched per identifier.
        let prices = self.pricing.prices_of(product_ids);
        let stocks = self.inventory.stocks_of(product_ids);
        tracing::debug!(
            requested = product_ids.len(),
            priced = prices.len(),
            stocked = stocks.len(),
            "composing article data"
        );

        let mut articles = HashMap::with_capacity(product_ids.len());
        for &product_id in product_ids {
            let Some(info) = self.catalog.product_info(product_id) else {
                // Unknown to the catalog: not an error, just not part of the result.
                continue;
            };
            let price = prices
                .get(&product_id)
                .map(|listed| listed.price)
                .ok_or_else(|| missing_price(product_id))?;
            articles.insert(product_id, merge(info, price, stocks.get(&product_id)));
        }
        Ok(articles)
    }
}
