//! Structural Pattern: Decorator
//! Example: toppings wrapping a pizza, each adding to the price
//!
//! Run with: cargo run --bin decorator

use itertools::Itertools;

use crate::error::CatalogError;
use crate::transcript::Transcript;

pub const VEGGIE_MANIA_PRICE: u32 = 15;
pub const TOMATO_TOPPING_PRICE: u32 = 7;
pub const CHEESE_TOPPING_PRICE: u32 = 10;

pub trait Pizza {
    fn price(&self) -> u32;

    /// Toppings from the outermost layer inwards.
    fn toppings(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

pub struct VeggieMania;

impl Pizza for VeggieMania {
    fn price(&self) -> u32 {
        VEGGIE_MANIA_PRICE
    }
}

pub struct TomatoTopping {
    pizza: Box<dyn Pizza>,
}

impl TomatoTopping {
    pub fn new(pizza: Box<dyn Pizza>) -> Self {
        TomatoTopping { pizza }
    }
}

impl Pizza for TomatoTopping {
    fn price(&self) -> u32 {
        self.pizza.price() + TOMATO_TOPPING_PRICE
    }

    fn toppings(&self) -> Vec<&'static str> {
        let mut toppings = vec!["tomato"];
        toppings.extend(self.pizza.toppings());
        toppings
    }
}

pub struct CheeseTopping {
    pizza: Box<dyn Pizza>,
}

impl CheeseTopping {
    pub fn new(pizza: Box<dyn Pizza>) -> Self {
        CheeseTopping { pizza }
    }
}

impl Pizza for CheeseTopping {
    fn price(&self) -> u32 {
        self.pizza.price() + CHEESE_TOPPING_PRICE
    }

    fn toppings(&self) -> Vec<&'static str> {
        let mut toppings = vec!["cheese"];
        toppings.extend(self.pizza.toppings());
        toppings
    }
}

pub fn price_line(pizza: &dyn Pizza) -> String {
    format!(
        "Price of veggieMania with {} topping is {}",
        pizza.toppings().iter().join(" and "),
        pizza.price()
    )
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let pizza = Box::new(VeggieMania);
    let with_cheese = Box::new(CheeseTopping::new(pizza));
    let with_cheese_and_tomato = TomatoTopping::new(with_cheese);
    out.line(price_line(&with_cheese_and_tomato));

    // Same toppings, opposite nesting.
    let with_tomato_and_cheese =
        CheeseTopping::new(Box::new(TomatoTopping::new(Box::new(VeggieMania))));
    out.line(price_line(&with_tomato_and_cheese));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layer(pizza: Box<dyn Pizza>, tomato: bool) -> Box<dyn Pizza> {
        if tomato {
            Box::new(TomatoTopping::new(pizza))
        } else {
            Box::new(CheeseTopping::new(pizza))
        }
    }

    fn stack(layers: &[bool]) -> Box<dyn Pizza> {
        let base: Box<dyn Pizza> = Box::new(VeggieMania);
        layers.iter().fold(base, |pizza, &tomato| layer(pizza, tomato))
    }

    fn expected_price(layers: &[bool]) -> u32 {
        VEGGIE_MANIA_PRICE
            + layers
                .iter()
                .map(|&tomato| if tomato { TOMATO_TOPPING_PRICE } else { CHEESE_TOPPING_PRICE })
                .sum::<u32>()
    }

    #[test]
    fn test_base_price() {
        assert_eq!(VeggieMania.price(), 15);
        assert!(VeggieMania.toppings().is_empty());
    }

    #[test]
    fn test_both_orderings_cost_the_same() {
        let cheese_inside = stack(&[false, true]);
        let tomato_inside = stack(&[true, false]);

        assert_eq!(cheese_inside.price(), 32);
        assert_eq!(tomato_inside.price(), 32);
        assert_eq!(cheese_inside.toppings(), vec!["tomato", "cheese"]);
        assert_eq!(tomato_inside.toppings(), vec!["cheese", "tomato"]);
    }

    #[test]
    fn test_demo_lines() {
        let out = Transcript::new();
        demo(&out).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "Price of veggieMania with tomato and cheese topping is 32",
                "Price of veggieMania with cheese and tomato topping is 32",
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_price_is_base_plus_increments(layers in prop::collection::vec(any::<bool>(), 0..12)) {
            prop_assert_eq!(stack(&layers).price(), expected_price(&layers));
        }

        #[test]
        fn prop_reversed_stack_costs_the_same(layers in prop::collection::vec(any::<bool>(), 0..12)) {
            let reversed: Vec<bool> = layers.iter().rev().copied().collect();
            prop_assert_eq!(stack(&layers).price(), stack(&reversed).price());
            prop_assert_eq!(stack(&layers).toppings().len(), layers.len());
        }
    }
}
