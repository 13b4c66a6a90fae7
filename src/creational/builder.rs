//! Creational Pattern: Builder
//! Example: a director running fixed build sequences over a mutable builder
//!
//! Run with: cargo run --bin builder

use std::mem;

use itertools::Itertools;
use tracing::debug;

use crate::error::CatalogError;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn list_parts(&self) -> String {
        format!("Product parts: {}", self.parts.iter().join(", "))
    }
}

/// Steps for producing the parts of a [`Product`].
pub trait Builder {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);

    /// Hands over everything produced so far and starts a fresh product.
    fn product(&mut self) -> Product;
}

#[derive(Debug, Default)]
pub struct ConcreteBuilder1 {
    product: Product,
}

impl ConcreteBuilder1 {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, part: &str) {
        self.product.parts.push(part.to_string());
    }
}

impl Builder for ConcreteBuilder1 {
    fn produce_part_a(&mut self) {
        self.push("PartA1");
    }

    fn produce_part_b(&mut self) {
        self.push("PartB1");
    }

    fn produce_part_c(&mut self) {
        self.push("PartC1");
    }

    fn product(&mut self) -> Product {
        let product = mem::take(&mut self.product);
        debug!(parts = product.parts.len(), "builder handed over product and reset");
        product
    }
}

/// Runs build sequences. Optional: clients may drive the builder directly
/// through [`Director::builder_mut`].
pub struct Director<B: Builder> {
    builder: B,
}

impl<B: Builder> Director<B> {
    pub fn new(builder: B) -> Self {
        Director { builder }
    }

    /// Swaps in another builder, returning the previous one.
    pub fn set_builder(&mut self, builder: B) -> B {
        mem::replace(&mut self.builder, builder)
    }

    pub fn builder_mut(&mut self) -> &mut B {
        &mut self.builder
    }

    pub fn build_minimal_viable_product(&mut self) {
        self.builder.produce_part_a();
    }

    pub fn build_full_featured_product(&mut self) {
        self.builder.produce_part_a();
        self.builder.produce_part_b();
        self.builder.produce_part_c();
    }
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let mut director = Director::new(ConcreteBuilder1::new());

    out.line("Standard basic product:");
    director.build_minimal_viable_product();
    out.line(director.builder_mut().product().list_parts());
    out.blank();

    out.line("Standard full featured product:");
    director.build_full_featured_product();
    out.line(director.builder_mut().product().list_parts());
    out.blank();

    out.line("Custom product:");
    let builder = director.builder_mut();
    builder.produce_part_a();
    builder.produce_part_c();
    out.line(builder.product().list_parts());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_returns_parts_since_last_call() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_a();
        builder.produce_part_b();
        assert_eq!(builder.product().parts(), ["PartA1", "PartB1"]);

        builder.produce_part_c();
        assert_eq!(builder.product().parts(), ["PartC1"]);
    }

    #[test]
    fn test_product_resets_accumulator() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_a();
        let _ = builder.product();

        let empty = builder.product();
        assert!(empty.parts().is_empty());
        assert_eq!(empty, Product::default());
    }

    #[test]
    fn test_director_sequences() {
        let mut director = Director::new(ConcreteBuilder1::new());

        director.build_minimal_viable_product();
        assert_eq!(
            director.builder_mut().product().list_parts(),
            "Product parts: PartA1"
        );

        director.build_full_featured_product();
        assert_eq!(
            director.builder_mut().product().list_parts(),
            "Product parts: PartA1, PartB1, PartC1"
        );
    }

    #[test]
    fn test_set_builder_returns_previous() {
        let mut first = ConcreteBuilder1::new();
        first.produce_part_b();

        let mut director = Director::new(first);
        let mut previous = director.set_builder(ConcreteBuilder1::new());

        assert_eq!(previous.product().parts(), ["PartB1"]);
        assert!(director.builder_mut().product().parts().is_empty());
    }

    #[test]
    fn test_demo_custom_product() {
        let out = Transcript::new();
        demo(&out).unwrap();
        assert_eq!(
            out.lines().last().map(String::as_str),
            Some("Product parts: PartA1, PartC1")
        );
    }
}
