use std::collections::HashMap;
use std::sync::RwLock;

use storefront_cart::{Cart, CartId, CartRepository};
use storefront_catalog::{Product, ProductRepository};
use storefront_core::ProductId;
use storefront_inventory::{StockItem, StockRepository};
use storefront_pricing::{ListedPrice, PriceRepository};

/// In-memory [`ProductRepository`].
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, product_id: ProductId) -> Option<Product> {
        self.inner.read().ok()?.get(&product_id).cloned()
    }

    fn save(&self, product: Product) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id_typed(), product);
        }
    }
}

/// In-memory [`PriceRepository`].
#[derive(Debug, Default)]
pub struct InMemoryPriceRepository {
    inner: RwLock<HashMap<ProductId, ListedPrice>>,
}

impl InMemoryPriceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PriceRepository for InMemoryPriceRepository {
    fn find_by_product_id(&self, product_id: ProductId) -> Option<ListedPrice> {
        self.inner.read().ok()?.get(&product_id).cloned()
    }

    fn find_by_product_ids(&self, product_ids: &[ProductId]) -> Vec<ListedPrice> {
        let map = match self.inner.read() {
            Ok(map) => map,
            Err(_) => return vec![],
        };
        product_ids
            .iter()
            .filter_map(|product_id| map.get(product_id).cloned())
            .collect()
    }

    fn save(&self, price: ListedPrice) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(price.product_id(), price);
        }
    }
}

/// In-memory [`StockRepository`].
#[derive(Debug, Default)]
pub struct InMemoryStockRepository {
    inner: RwLock<HashMap<ProductId, StockItem>>,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StockRepository for InMemoryStockRepository {
    fn find_by_product_id(&self, product_id: ProductId) -> Option<StockItem> {
        self.inner.read().ok()?.get(&product_id).cloned()
    }

    fn find_by_product_ids(&self, product_ids: &[ProductId]) -> Vec<StockItem> {
        let map = match self.inner.read() {
            Ok(map) => map,
            Err(_) => return vec![],
        };
        product_ids
            .iter()
            .filter_map(|product_id| map.get(product_id).cloned())
            .collect()
    }

    fn save(&self, item: StockItem) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(item.product_id(), item);
        }
    }
}

/// In-memory [`CartRepository`].
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    inner: RwLock<HashMap<CartId, Cart>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartRepository for InMemoryCartRepository {
    fn find_by_id(&self, cart_id: CartId) -> Option<Cart> {
        self.inner.read().ok()?.get(&cart_id).cloned()
    }

    fn save(&self, cart: Cart) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(cart.id_typed(), cart);
        }
    }
}
