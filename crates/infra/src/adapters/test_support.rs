//! Map-backed open host service fixtures with call counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use storefront_catalog::{ProductCatalog, ProductInfo};
use storefront_core::{Currency, Money, ProductId};
use storefront_inventory::{StockInfo, StockOverview};
use storefront_pricing::{PriceCatalog, PriceInfo};

pub(crate) fn eur(amount: i64) -> Money {
    Money::new(amount, Currency::EUR)
}

#[derive(Default)]
pub(crate) struct FixtureCatalog {
    products: HashMap<ProductId, ProductInfo>,
    pub lookups: AtomicUsize,
}

impl FixtureCatalog {
    pub fn with(
        mut self,
        product_id: ProductId,
        name: &str,
        stock_on_record: i64,
        launch_price: Money,
    ) -> Self {
        self.products.insert(
            product_id,
            ProductInfo::new(product_id, name, stock_on_record, launch_price),
        );
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl ProductCatalog for FixtureCatalog {
    fn product_info(&self, product_id: ProductId) -> Option<ProductInfo> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.products.get(&product_id).cloned()
    }
}

#[derive(Default)]
pub(crate) struct FixturePrices {
    prices: HashMap<ProductId, PriceInfo>,
    pub bulk_queries: AtomicUsize,
}

impl FixturePrices {
    pub fn with(mut self, product_id: ProductId, price: Money) -> Self {
        self.prices.insert(product_id, PriceInfo { product_id, price });
        self
    }

    pub fn bulk_queries(&self) -> usize {
        self.bulk_queries.load(Ordering::Relaxed)
    }
}

impl PriceCatalog for FixturePrices {
    fn price_of(&self, product_id: ProductId) -> Option<PriceInfo> {
        self.prices.get(&product_id).cloned()
    }

    fn prices_of(&self, product_ids: &[ProductId]) -> HashMap<ProductId, PriceInfo> {
        self.bulk_queries.fetch_add(1, Ordering::Relaxed);
        product_ids
            .iter()
            .filter_map(|product_id| self.prices.get(product_id).cloned())
            .map(|info| (info.product_id, info))
            .collect()
    }
}

#[derive(Default)]
pub(crate) struct FixtureStocks {
    stocks: HashMap<ProductId, StockInfo>,
    pub bulk_queries: AtomicUsize,
}

impl FixtureStocks {
    pub fn with(self, product_id: ProductId, available: i64) -> Self {
        self.with_info(StockInfo {
            product_id,
            available,
            in_stock: available > 0,
        })
    }

    pub fn with_info(mut self, info: StockInfo) -> Self {
        self.stocks.insert(info.product_id, info);
        self
    }

    pub fn bulk_queries(&self) -> usize {
        self.bulk_queries.load(Ordering::Relaxed)
    }
}

impl StockOverview for FixtureStocks {
    fn stock_of(&self, product_id: ProductId) -> Option<StockInfo> {
        self.stocks.get(&product_id).cloned()
    }

    fn stocks_of(&self, product_ids: &[ProductId]) -> HashMap<ProductId, StockInfo> {
        self.bulk_queries.fetch_add(1, Ordering::Relaxed);
        product_ids
            .iter()
            .filter_map(|product_id| self.stocks.get(product_id).cloned())
            .map(|info| (info.product_id, info))
            .collect()
    }
}
