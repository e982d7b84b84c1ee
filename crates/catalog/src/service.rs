//! Open host service of the catalog context.

use std::sync::Arc;

use serde::Serialize;

use storefront_core::{Money, ProductId, ValueObject};

use crate::repository::ProductRepository;

/// The catalog's published view of a product.
///
/// A plain record, rebuilt on every query; consumers never see the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductInfo {
    pub product_id: ProductId,
    pub name: String,
    /// Stock count as last recorded by the catalog. The inventory context is
    /// the source of truth; this count serves only as a fallback.
    pub stock_on_record: i64,
    launch_price: Money,
}

impl ProductInfo {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        stock_on_record: i64,
        launch_price: Money,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            stock_on_record,
            launch_price,
        }
    }

    /// Price the product was originally listed at.
    #[deprecated(
        note = "the pricing context owns current prices; the launch price remains only until every product has a listed price"
    )]
    pub fn launch_price(&self) -> Money {
        self.launch_price
    }
}

impl ValueObject for ProductInfo {}

/// Read-only query surface the catalog context exposes to other contexts.
///
/// Single-identifier lookups only: the catalog deliberately publishes no bulk
/// query, so batch consumers issue one call per product. Known asymmetry with
/// the pricing and inventory services; widening this surface would change
/// observable query behavior, so it stays as is.
pub trait ProductCatalog: Send + Sync {
    /// The catalog's view of one product, or `None` if it is not listed.
    fn product_info(&self, product_id: ProductId) -> Option<ProductInfo>;
}

impl<T> ProductCatalog for Arc<T>
where
    T: ProductCatalog + ?Sized,
{
    fn product_info(&self, product_id: ProductId) -> Option<ProductInfo> {
        (**self).product_info(product_id)
    }
}

/// Repository-backed [`ProductCatalog`] implementation.
#[derive(Debug)]
pub struct CatalogService<R> {
    products: R,
}

impl<R> CatalogService<R> {
    pub fn new(products: R) -> Self {
        Self { products }
    }
}

impl<R> ProductCatalog for CatalogService<R>
where
    R: ProductRepository,
{
    fn product_info(&self, product_id: ProductId) -> Option<ProductInfo> {
        self.products.find_by_id(product_id).map(|product| {
            ProductInfo::new(
                product.id_typed(),
                product.name(),
                product.stock_on_record(),
                product.launch_price(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use chrono::Utc;
    use storefront_core::{Currency, Money};

    use crate::product::Product;

    use super::*;

    #[derive(Default)]
    struct FixtureProducts {
        inner: RwLock<HashMap<ProductId, Product>>,
    }

    impl ProductRepository for FixtureProducts {
        fn find_by_id(&self, product_id: ProductId) -> Option<Product> {
            self.inner.read().ok()?.get(&product_id).cloned()
        }

        fn save(&self, product: Product) {
            if let Ok(mut map) = self.inner.write() {
                map.insert(product.id_typed(), product);
            }
        }
    }

    #[test]
    fn product_info_translates_the_aggregate() {
        let repo = FixtureProducts::default();
        let id = ProductId::new();
        let price = Money::new(2_500, Currency::EUR);
        repo.save(Product::register(id, "SKU-7", "Reading Lamp", price, 4, Utc::now()).unwrap());

        let service = CatalogService::new(repo);
        let info = service.product_info(id).unwrap();

        assert_eq!(info.product_id, id);
        assert_eq!(info.name, "Reading Lamp");
        assert_eq!(info.stock_on_record, 4);
        #[allow(deprecated)]
        let launch = info.launch_price();
        assert_eq!(launch, price);
    }

    #[test]
    fn product_info_is_absent_for_unlisted_products() {
        let service = CatalogService::new(FixtureProducts::default());
        assert!(service.product_info(ProductId::new()).is_none());
    }
}
