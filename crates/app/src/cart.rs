//! Cart use cases.

use chrono::Utc;

use storefront_cart::{
    ArticleDataPort, Cart, CartId, CartRepository, EnrichedCart, EnrichedProduct,
};
use storefront_core::{DomainError, DomainResult, ProductId};

/// Use cases a storefront session runs against its cart.
#[derive(Debug)]
pub struct CartUseCases<R, A> {
    carts: R,
    articles: A,
}

impl<R, A> CartUseCases<R, A>
where
    R: CartRepository,
    A: ArticleDataPort,
{
    pub fn new(carts: R, articles: A) -> Self {
        Self { carts, articles }
    }

    /// Show the cart with current prices and stock.
    pub fn view(&self, cart_id: CartId) -> DomainResult<EnrichedCart> {
        let cart = self.load(cart_id)?;
        let articles = self.articles.articles(&cart.product_ids())?;
        Ok(EnrichedCart::compose(&cart, &articles))
    }

    /// Put units of a product into the cart, opening the cart on first use.
    ///
    /// Only products the port can resolve go in; anything else would come
    /// back as an unpurchasable line on every later view.
    pub fn add_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<()> {
        if self.articles.article(product_id)?.is_none() {
            return Err(DomainError::NotFound);
        }

        let now = Utc::now();
        let mut cart = self
            .carts
            .find_by_id(cart_id)
            .unwrap_or_else(|| Cart::open(cart_id, now));
        cart.add_item(product_id, quantity, now)?;
        self.carts.save(cart);
        tracing::info!(cart = %cart_id, product = %product_id, quantity, "item added to cart");
        Ok(())
    }

    /// Set the quantity of a line.
    pub fn change_quantity(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<()> {
        let mut cart = self.load(cart_id)?;
        cart.change_quantity(product_id, quantity, Utc::now())?;
        self.carts.save(cart);
        tracing::info!(cart = %cart_id, product = %product_id, quantity, "cart line changed");
        Ok(())
    }

    /// Drop a line.
    pub fn remove_item(&self, cart_id: CartId, product_id: ProductId) -> DomainResult<()> {
        let mut cart = self.load(cart_id)?;
        cart.remove_item(product_id, Utc::now())?;
        self.carts.save(cart);
        tracing::info!(cart = %cart_id, product = %product_id, "cart line removed");
        Ok(())
    }

    /// Product page: current article data plus what this cart already holds.
    pub fn product_page(
        &self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> DomainResult<Option<EnrichedProduct>> {
        let Some(article) = self.articles.article(product_id)? else {
            return Ok(None);
        };
        let in_cart = self
            .carts
            .find_by_id(cart_id)
            .map_or(0, |cart| cart.quantity_of(product_id));
        Ok(Some(EnrichedProduct::new(article, in_cart)))
    }

    fn load(&self, cart_id: CartId) -> DomainResult<Cart> {
        self.carts.find_by_id(cart_id).ok_or(DomainError::NotFound)
    }
}
