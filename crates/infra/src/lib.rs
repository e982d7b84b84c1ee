//! `storefront-infra` — adapters and in-memory storage.
//!
//! The composite adapters here implement the consumer-side output ports
//! (cart, checkout) by fanning out to the open host services of the catalog,
//! pricing and inventory contexts and merging the results by product.

pub mod adapters;
pub mod repositories;

#[cfg(test)]
mod integration_tests;

pub use adapters::{CompositeArticleDataAdapter, CompositeCheckoutArticleDataAdapter};
pub use repositories::{
    InMemoryCartRepository, InMemoryPriceRepository, InMemoryProductRepository,
    InMemoryStockRepository,
};
