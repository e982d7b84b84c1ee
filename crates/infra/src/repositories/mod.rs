//! In-memory repository implementations for tests, benchmarks and demos.

pub mod in_memory;

pub use in_memory::{
    InMemoryCartRepository, InMemoryPriceRepository, InMemoryProductRepository,
    InMemoryStockRepository,
};
