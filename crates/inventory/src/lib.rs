//! Inventory context.
//!
//! Sole owner of current stock levels. Exposes them to other contexts through
//! [`StockOverview`].

pub mod repository;
pub mod service;
pub mod stock;

pub use repository::StockRepository;
pub use service::{InventoryService, StockInfo, StockOverview};
pub use stock::StockItem;
