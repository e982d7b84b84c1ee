//! Repository port of the cart context.

use std::sync::Arc;

use crate::cart::{Cart, CartId};

/// Storage abstraction for [`Cart`] aggregates.
pub trait CartRepository: Send + Sync {
    fn find_by_id(&self, cart_id: CartId) -> Option<Cart>;
    fn save(&self, cart: Cart);
}

impl<R> CartRepository for Arc<R>
where
    R: CartRepository + ?Sized,
{
    fn find_by_id(&self, cart_id: CartId) -> Option<Cart> {
        (**self).find_by_id(cart_id)
    }

    fn save(&self, cart: Cart) {
        (**self).save(cart)
    }
}
