//! Integration tests across the composition pipeline.
//!
//! Wiring under test: repositories → open host services → composite
//! adapters → consumer read models, with real in-memory storage.

use std::sync::Arc;

use chrono::Utc;

use storefront_cart::{ArticleDataPort, Cart, CartId, CartRepository, EnrichedCart};
use storefront_catalog::{CatalogService, Product, ProductRepository};
use storefront_checkout::{CheckoutArticleDataPort, CheckoutSummary};
use storefront_core::{AggregateId, Currency, DomainError, Money, ProductId};
use storefront_inventory::{InventoryService, StockItem, StockRepository};
use storefront_pricing::{ListedPrice, PriceRepository, PricingService};

use crate::adapters::{CompositeArticleDataAdapter, CompositeCheckoutArticleDataAdapter};
use crate::repositories::{
    InMemoryCartRepository, InMemoryPriceRepository, InMemoryProductRepository,
    InMemoryStockRepository,
};

type CartPort = CompositeArticleDataAdapter<
    CatalogService<Arc<InMemoryProductRepository>>,
    PricingService<Arc<InMemoryPriceRepository>>,
    InventoryService<Arc<InMemoryStockRepository>>,
>;
type CheckoutPort = CompositeCheckoutArticleDataAdapter<
    CatalogService<Arc<InMemoryProductRepository>>,
    PricingService<Arc<InMemoryPriceRepository>>,
    InventoryService<Arc<InMemoryStockRepository>>,
>;

struct World {
    products: Arc<InMemoryProductRepository>,
    prices: Arc<InMemoryPriceRepository>,
    stock: Arc<InMemoryStockRepository>,
    carts: Arc<InMemoryCartRepository>,
    cart_port: CartPort,
    checkout_port: CheckoutPort,
}

fn setup() -> World {
    let products = Arc::new(InMemoryProductRepository::new());
    let prices = Arc::new(InMemoryPriceRepository::new());
    let stock = Arc::new(InMemoryStockRepository::new());
    let carts = Arc::new(InMemoryCartRepository::new());

    let cart_port = CompositeArticleDataAdapter::new(
        CatalogService::new(products.clone()),
        PricingService::new(prices.clone()),
        InventoryService::new(stock.clone()),
    );
    let checkout_port = CompositeCheckoutArticleDataAdapter::new(
        CatalogService::new(products.clone()),
        PricingService::new(prices.clone()),
        InventoryService::new(stock.clone()),
    );

    World {
        products,
        prices,
        stock,
        carts,
        cart_port,
        checkout_port,
    }
}

fn eur(amount: i64) -> Money {
    Money::new(amount, Currency::EUR)
}

impl World {
    fn register_product(&self, name: &str, launch_price: Money, stock_on_record: i64) -> ProductId {
        let id = ProductId::new();
        let product = Product::register(id, format!("SKU-{id}"), name, launch_price, stock_on_record, Utc::now())
            .unwrap();
        self.products.save(product);
        id
    }

    fn list_price(&self, product_id: ProductId, price: Money) {
        self.prices
            .save(ListedPrice::list(product_id, price, Utc::now()).unwrap());
    }

    fn track_stock(&self, product_id: ProductId, available: i64) {
        self.stock
            .save(StockItem::track(product_id, available, Utc::now()).unwrap());
    }

    fn open_cart_with(&self, lines: &[(ProductId, i64)]) -> CartId {
        let cart_id = CartId::new(AggregateId::new());
        let mut cart = Cart::open(cart_id, Utc::now());
        for &(product_id, quantity) in lines {
            cart.add_item(product_id, quantity, Utc::now()).unwrap();
        }
        self.carts.save(cart);
        cart_id
    }
}

#[test]
fn fully_migrated_products_compose_live_data_end_to_end() {
    let world = setup();
    let desk = world.register_product("Walnut Desk", eur(9_900), 1);
    let lamp = world.register_product("Reading Lamp", eur(1_990), 0);
    world.list_price(desk, eur(14_900));
    world.list_price(lamp, eur(2_490));
    world.track_stock(desk, 4);
    world.track_stock(lamp, 2);

    let cart_id = world.open_cart_with(&[(desk, 2), (lamp, 1)]);
    let cart = world.carts.find_by_id(cart_id).unwrap();

    let articles = world.cart_port.articles(&cart.product_ids()).unwrap();
    let enriched = EnrichedCart::compose(&cart, &articles);

    assert!(enriched.can_checkout());
    // Live prices, not the launch prices the catalog still remembers.
    assert_eq!(enriched.total().unwrap(), Some(eur(2 * 14_900 + 2_490)));

    let checkout_articles = world.checkout_port.checkout_articles(&cart.product_ids()).unwrap();
    let summary = CheckoutSummary::compose(&cart, &checkout_articles).unwrap();
    assert!(summary.is_placeable());
    assert_eq!(summary.grand_total().unwrap(), eur(2 * 14_900 + 2_490));
}

#[test]
fn strict_policy_rejects_a_cart_with_an_unpriced_product() {
    let world = setup();
    let priced = world.register_product("Walnut Desk", eur(9_900), 1);
    let unpriced = world.register_product("Reading Lamp", eur(1_990), 3);
    world.list_price(priced, eur(14_900));
    world.track_stock(priced, 4);
    world.track_stock(unpriced, 2);

    let err = world.cart_port.articles(&[priced, unpriced]).unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));
}

#[test]
fn lenient_policy_reviews_migrating_products_at_their_launch_price() {
    let world = setup();
    let priced = world.register_product("Walnut Desk", eur(9_900), 1);
    let unpriced = world.register_product("Reading Lamp", eur(1_990), 3);
    world.list_price(priced, eur(14_900));
    world.track_stock(priced, 4);
    world.track_stock(unpriced, 2);

    // The cart predates the price listing; checkout must still review it.
    let cart_id = world.open_cart_with(&[(priced, 1), (unpriced, 2)]);
    let cart = world.carts.find_by_id(cart_id).unwrap();

    let articles = world.checkout_port.checkout_articles(&cart.product_ids()).unwrap();
    let summary = CheckoutSummary::compose(&cart, &articles).unwrap();

    assert_eq!(summary.grand_total().unwrap(), eur(14_900 + 2 * 1_990));
    // Live stock still applies to the migrating product.
    let line = summary
        .lines
        .iter()
        .find(|line| line.product_id == unpriced)
        .unwrap();
    assert_eq!(line.units_on_hand, 2);
    assert!(summary.is_placeable());
}

#[test]
fn products_unknown_to_the_catalog_are_excluded_not_failed() {
    let world = setup();
    let listed = world.register_product("Walnut Desk", eur(9_900), 1);
    world.list_price(listed, eur(14_900));
    world.track_stock(listed, 4);
    let ghost = ProductId::new();

    let cart_id = world.open_cart_with(&[(listed, 1), (ghost, 1)]);
    let cart = world.carts.find_by_id(cart_id).unwrap();

    let articles = world.cart_port.articles(&cart.product_ids()).unwrap();
    assert_eq!(articles.len(), 1);

    let enriched = EnrichedCart::compose(&cart, &articles);
    assert_eq!(enriched.unlisted, vec![ghost]);
    assert!(!enriched.can_checkout());

    // Checkout refuses to review a cart it cannot fully resolve.
    let checkout_articles = world.checkout_port.checkout_articles(&cart.product_ids()).unwrap();
    let err = CheckoutSummary::compose(&cart, &checkout_articles).unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));
}

#[test]
fn stock_fallback_derives_availability_from_the_catalog_record() {
    let world = setup();
    let tracked = world.register_product("Walnut Desk", eur(9_900), 0);
    let untracked = world.register_product("Reading Lamp", eur(1_990), 5);
    let untracked_sold_out = world.register_product("Side Table", eur(4_990), 0);
    for id in [tracked, untracked, untracked_sold_out] {
        world.list_price(id, eur(10_000));
    }
    world.track_stock(tracked, 9);

    let articles = world
        .cart_port
        .articles(&[tracked, untracked, untracked_sold_out])
        .unwrap();

    assert_eq!(articles[&tracked].available_stock, 9);
    assert!(articles[&tracked].available);
    assert_eq!(articles[&untracked].available_stock, 5);
    assert!(articles[&untracked].available);
    assert_eq!(articles[&untracked_sold_out].available_stock, 0);
    assert!(!articles[&untracked_sold_out].available);
}

#[test]
fn enriched_cart_serializes_for_the_presentation_layer() {
    let world = setup();
    let desk = world.register_product("Walnut Desk", eur(9_900), 1);
    world.list_price(desk, eur(14_900));
    world.track_stock(desk, 4);

    let cart_id = world.open_cart_with(&[(desk, 2)]);
    let cart = world.carts.find_by_id(cart_id).unwrap();
    let articles = world.cart_port.articles(&cart.product_ids()).unwrap();
    let enriched = EnrichedCart::compose(&cart, &articles);

    let rendered = serde_json::to_value(&enriched).unwrap();
    assert_eq!(rendered["items"][0]["quantity"], 2);
    assert_eq!(rendered["items"][0]["article"]["name"], "Walnut Desk");
    assert_eq!(rendered["unlisted"], serde_json::json!([]));
}
