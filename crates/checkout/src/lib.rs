//! Checkout context.
//!
//! Turns a cart into an order review. Declares its own output port for
//! article data: checkout tolerates a missing listed price (the launch-price
//! fallback of the pricing migration) but refuses to review a cart whose
//! products cannot be resolved at all.

pub mod ports;
pub mod read_model;

pub use ports::{CheckoutArticle, CheckoutArticleDataPort};
pub use read_model::{CheckoutLine, CheckoutSummary};
