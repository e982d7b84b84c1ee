//! Shopping cart context.
//!
//! Owns cart contents. Everything it needs to know about products from other
//! contexts is declared by [`ArticleDataPort`] in this crate's own
//! vocabulary; the wiring to the providing contexts lives elsewhere.

pub mod cart;
pub mod ports;
pub mod read_model;
pub mod repository;

pub use cart::{Cart, CartId, CartItem};
pub use ports::{ArticleData, ArticleDataPort};
pub use read_model::{EnrichedCart, EnrichedCartItem, EnrichedProduct};
pub use repository::CartRepository;
