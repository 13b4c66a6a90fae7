//! Creational Pattern: Abstract Factory
//! Example: two factories producing mutually consistent product pairs
//!
//! Run with: cargo run --bin abstract_factory

use tracing::debug;

use crate::error::CatalogError;
use crate::transcript::Transcript;

// =============================================================================
// Products
// =============================================================================

pub trait AbstractProductA {
    fn useful_function_a(&self) -> String;
}

pub trait AbstractProductB {
    fn useful_function_b(&self) -> String;

    /// B products can collaborate with any A product, but only make sense
    /// paired with the A from their own family.
    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String;
}

pub struct ConcreteProductA1;
pub struct ConcreteProductA2;
pub struct ConcreteProductB1;
pub struct ConcreteProductB2;

impl AbstractProductA for ConcreteProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

impl AbstractProductA for ConcreteProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

impl AbstractProductB for ConcreteProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of the B1 collaborating with the ({})",
            collaborator.useful_function_a()
        )
    }
}

impl AbstractProductB for ConcreteProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of the B2 collaborating with the ({})",
            collaborator.useful_function_a()
        )
    }
}

// =============================================================================
// Factories
// =============================================================================

pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;
    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

pub struct ConcreteFactory1;
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB1)
    }
}

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB2)
    }
}

/// Works with any factory through the abstract types only.
pub fn client_code(factory: &dyn AbstractFactory) -> Vec<String> {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();
    debug!("created product pair");

    vec![
        product_b.useful_function_b(),
        product_b.another_useful_function_b(product_a.as_ref()),
    ]
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    out.line("Client: Testing client code with the first factory type:");
    out.extend(client_code(&ConcreteFactory1));
    out.blank();

    out.line("Client: Testing the same client code with the second factory type:");
    out.extend(client_code(&ConcreteFactory2));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_are_distinct() {
        let first = client_code(&ConcreteFactory1);
        let second = client_code(&ConcreteFactory2);

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_b_embeds_a_from_same_family() {
        for factory in [&ConcreteFactory1 as &dyn AbstractFactory, &ConcreteFactory2] {
            let a = factory.create_product_a().useful_function_a();
            let lines = client_code(factory);
            assert!(lines[1].contains(&a), "{} should embed {}", lines[1], a);
        }
    }

    #[test]
    fn test_family_one_output() {
        assert_eq!(
            client_code(&ConcreteFactory1),
            vec![
                "The result of the product B1.",
                "The result of the B1 collaborating with the (The result of the product A1.)",
            ]
        );
    }

    #[test]
    fn test_cross_family_collaboration_still_works() {
        let b1 = ConcreteProductB1;
        let line = b1.another_useful_function_b(&ConcreteProductA2);
        assert!(line.starts_with("The result of the B1"));
        assert!(line.contains("product A2"));
    }

    #[test]
    fn test_demo_transcript() {
        let out = Transcript::new();
        demo(&out).unwrap();
        assert_eq!(out.len(), 7);
        assert_eq!(out.lines()[3], "");
    }
}
