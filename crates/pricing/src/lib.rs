//! Pricing context.
//!
//! Sole owner of current sales prices. During the pricing migration some
//! products have no listed price yet; consumers decide whether that is a hard
//! failure or grounds for the catalog's launch-price fallback.

pub mod price;
pub mod repository;
pub mod service;

pub use price::ListedPrice;
pub use repository::PriceRepository;
pub use service::{PriceCatalog, PriceInfo, PricingService};
