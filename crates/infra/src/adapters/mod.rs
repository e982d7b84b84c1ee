//! Composite adapters implementing the consumer-side output ports.
//!
//! Both adapters follow the same merge algorithm and differ only in their
//! policy for a product that has catalog info but no listed price: the cart
//! adapter treats that as an illegal state, the checkout adapter falls back
//! to the catalog's launch price for the duration of the pricing migration.

pub mod article_data;
pub mod checkout_article_data;

#[cfg(test)]
pub(crate) mod test_support;

pub use article_data::CompositeArticleDataAdapter;
pub use checkout_article_data::CompositeCheckoutArticleDataAdapter;
