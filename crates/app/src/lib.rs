//! `storefront-app` — thin use-case orchestration.
//!
//! Use cases load aggregates, call the consumer-side output ports, and hand
//! back read models. Business rules live in the context crates; anything
//! here beyond sequencing calls is in the wrong place.

pub mod cart;
pub mod checkout;

pub use cart::CartUseCases;
pub use checkout::CheckoutUseCases;
