//! Order review model of the checkout context.

use std::collections::HashMap;

use serde::Serialize;

use storefront_cart::{Cart, CartId};
use storefront_core::{DomainError, DomainResult, Money, ProductId};

use crate::ports::CheckoutArticle;

/// One reviewed order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub units_on_hand: i64,
    pub in_stock: bool,
}

impl CheckoutLine {
    pub fn line_total(&self) -> DomainResult<Money> {
        self.unit_price.scaled(self.quantity)
    }

    /// Whether the line could be fulfilled right now.
    pub fn is_fulfillable(&self) -> bool {
        self.in_stock && self.units_on_hand >= self.quantity
    }
}

/// The order review presented before placing an order.
///
/// Unlike the cart view, composition is strict: an order review that silently
/// omitted lines would misstate what the customer is about to buy, so an
/// empty cart or an unresolvable product is an illegal state here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub cart_id: CartId,
    pub lines: Vec<CheckoutLine>,
}

impl CheckoutSummary {
    /// Join a cart snapshot with the checkout articles fetched for it.
    pub fn compose(
        cart: &Cart,
        articles: &HashMap<ProductId, CheckoutArticle>,
    ) -> DomainResult<Self> {
        if cart.is_empty() {
            return Err(DomainError::invariant("nothing to check out"));
        }

        let mut lines = Vec::with_capacity(cart.items().len());
        for item in cart.items() {
            let article = articles.get(&item.product_id).ok_or_else(|| {
                DomainError::invariant(format!(
                    "cart references product {} which cannot be resolved for checkout",
                    item.product_id
                ))
            })?;
            lines.push(CheckoutLine {
                product_id: article.product_id,
                name: article.name.clone(),
                quantity: item.quantity,
                unit_price: article.unit_price,
                units_on_hand: article.units_on_hand,
                in_stock: article.in_stock,
            });
        }

        Ok(Self {
            cart_id: cart.id_typed(),
            lines,
        })
    }

    /// Sum of all line totals. Always at least one line.
    pub fn grand_total(&self) -> DomainResult<Money> {
        let mut iter = self.lines.iter();
        // compose() guarantees a first line.
        let first = iter
            .next()
            .ok_or_else(|| DomainError::invariant("checkout summary has no lines"))?;
        let mut total = first.line_total()?;
        for line in iter {
            total = total.add(&line.line_total()?)?;
        }
        Ok(total)
    }

    /// Whether the order could be placed: every line fulfillable.
    pub fn is_placeable(&self) -> bool {
        self.lines.iter().all(CheckoutLine::is_fulfillable)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use storefront_cart::CartId;
    use storefront_core::{AggregateId, Currency};

    use super::*;

    fn eur(amount: i64) -> Money {
        Money::new(amount, Currency::EUR)
    }

    fn checkout_article(product_id: ProductId, unit_price: Money, on_hand: i64) -> CheckoutArticle {
        CheckoutArticle {
            product_id,
            name: "Reading Lamp".to_string(),
            unit_price,
            units_on_hand: on_hand,
            in_stock: on_hand > 0,
        }
    }

    fn cart_with(lines: &[(ProductId, i64)]) -> Cart {
        let mut cart = Cart::open(CartId::new(AggregateId::new()), Utc::now());
        for &(product_id, quantity) in lines {
            cart.add_item(product_id, quantity, Utc::now()).unwrap();
        }
        cart
    }

    #[test]
    fn compose_builds_one_line_per_cart_item() {
        let p1 = ProductId::new();
        let p2 = ProductId::new();
        let cart = cart_with(&[(p1, 2), (p2, 1)]);

        let mut articles = HashMap::new();
        articles.insert(p1, checkout_article(p1, eur(1_000), 5));
        articles.insert(p2, checkout_article(p2, eur(300), 2));

        let summary = CheckoutSummary::compose(&cart, &articles).unwrap();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.grand_total().unwrap(), eur(2_300));
        assert!(summary.is_placeable());
    }

    #[test]
    fn compose_refuses_an_empty_cart() {
        let cart = cart_with(&[]);
        let err = CheckoutSummary::compose(&cart, &HashMap::new()).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn compose_refuses_unresolvable_products() {
        let product = ProductId::new();
        let cart = cart_with(&[(product, 1)]);

        let err = CheckoutSummary::compose(&cart, &HashMap::new()).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn out_of_stock_lines_block_placement_but_not_review() {
        let product = ProductId::new();
        let cart = cart_with(&[(product, 3)]);

        let mut articles = HashMap::new();
        articles.insert(product, checkout_article(product, eur(450), 1));

        let summary = CheckoutSummary::compose(&cart, &articles).unwrap();
        assert!(!summary.is_placeable());
        assert_eq!(summary.grand_total().unwrap(), eur(1_350));
    }
}
