//! End-to-end walkthrough: seed the three provider contexts, drive the cart
//! and checkout use cases, and show both price policies at work.
//!
//! Run with `RUST_LOG=debug cargo run -p storefront-app --example walkthrough`.

use std::sync::Arc;

use chrono::Utc;

use storefront_app::{CartUseCases, CheckoutUseCases};
use storefront_cart::{Cart, CartId, CartRepository};
use storefront_catalog::{CatalogService, Product, ProductRepository};
use storefront_core::{AggregateId, Currency, Money, ProductId};
use storefront_infra::{
    CompositeArticleDataAdapter, CompositeCheckoutArticleDataAdapter, InMemoryCartRepository,
    InMemoryPriceRepository, InMemoryProductRepository, InMemoryStockRepository,
};
use storefront_inventory::{InventoryService, StockItem, StockRepository};
use storefront_pricing::{ListedPrice, PriceRepository, PricingService};

fn eur(amount: i64) -> Money {
    Money::new(amount, Currency::EUR)
}

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let products = Arc::new(InMemoryProductRepository::new());
    let prices = Arc::new(InMemoryPriceRepository::new());
    let stock = Arc::new(InMemoryStockRepository::new());
    let carts = Arc::new(InMemoryCartRepository::new());

    let cart_use_cases = CartUseCases::new(
        carts.clone(),
        CompositeArticleDataAdapter::new(
            CatalogService::new(products.clone()),
            PricingService::new(prices.clone()),
            InventoryService::new(stock.clone()),
        ),
    );
    let checkout_use_cases = CheckoutUseCases::new(
        carts.clone(),
        CompositeCheckoutArticleDataAdapter::new(
            CatalogService::new(products.clone()),
            PricingService::new(prices.clone()),
            InventoryService::new(stock.clone()),
        ),
    );

    // A fully migrated product: listed price and tracked stock.
    let desk = ProductId::new();
    products.save(Product::register(desk, "SKU-1001", "Walnut Desk", eur(9_900), 1, Utc::now())?);
    prices.save(ListedPrice::list(desk, eur(14_900), Utc::now())?);
    stock.save(StockItem::track(desk, 4, Utc::now())?);

    // A product the pricing context has not absorbed yet.
    let lamp = ProductId::new();
    products.save(Product::register(lamp, "SKU-1002", "Reading Lamp", eur(1_990), 2, Utc::now())?);
    stock.save(StockItem::track(lamp, 6, Utc::now())?);

    // Shop with the strict cart policy.
    let cart_id = CartId::new(AggregateId::new());
    cart_use_cases.add_item(cart_id, desk, 2)?;

    let page = cart_use_cases
        .product_page(cart_id, desk)?
        .expect("the desk is listed");
    tracing::info!(
        price = %page.article.price,
        in_cart = page.in_cart,
        can_take_one_more = page.can_purchase(1),
        "product page for the desk"
    );

    let enriched = cart_use_cases.view(cart_id)?;
    tracing::info!(
        lines = enriched.items.len(),
        total = ?enriched.total()?.map(|t| t.to_string()),
        can_checkout = enriched.can_checkout(),
        "cart after shopping"
    );

    // The lamp has no listed price: the strict cart policy refuses it.
    match cart_use_cases.add_item(cart_id, lamp, 1) {
        Err(err) => tracing::info!(%err, "strict policy kept the unpriced lamp out of the cart"),
        Ok(()) => anyhow::bail!("the unpriced lamp must not be addable under the strict policy"),
    }

    // A cart opened before the pricing migration may still hold the lamp;
    // checkout reviews it at the launch price.
    let legacy_cart_id = CartId::new(AggregateId::new());
    let mut legacy_cart = Cart::open(legacy_cart_id, Utc::now());
    legacy_cart.add_item(desk, 1, Utc::now())?;
    legacy_cart.add_item(lamp, 3, Utc::now())?;
    carts.save(legacy_cart);

    let summary = checkout_use_cases.review(legacy_cart_id)?;
    tracing::info!(
        grand_total = %summary.grand_total()?,
        placeable = summary.is_placeable(),
        "order review for the pre-migration cart"
    );

    Ok(())
}
