//! Product catalog context.
//!
//! Owns product identity and display data. Other contexts read from this one
//! exclusively through [`ProductCatalog`], never through the repository.

pub mod product;
pub mod repository;
pub mod service;

pub use product::Product;
pub use repository::ProductRepository;
pub use service::{CatalogService, ProductCatalog, ProductInfo};
