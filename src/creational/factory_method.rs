//! Creational Pattern: Factory Method
//!
//! Run with: cargo run --bin factory_method

use crate::error::CatalogError;
use crate::transcript::Transcript;

pub trait Product {
    fn operation(&self) -> String;
}

pub struct ConcreteProduct1;
pub struct ConcreteProduct2;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    // Shared logic; only the product it works with changes.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

pub struct ConcreteCreator1;
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

pub fn client_code(creator: &dyn Creator) -> Vec<String> {
    vec![
        "Client: I'm not aware of the creator's class, but it still works.".to_string(),
        creator.some_operation(),
    ]
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    out.line("App: Launched with the ConcreteCreator1.");
    out.extend(client_code(&ConcreteCreator1));
    out.blank();

    out.line("App: Launched with the ConcreteCreator2.");
    out.extend(client_code(&ConcreteCreator2));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creators_produce_their_own_products() {
        assert_eq!(
            ConcreteCreator1.some_operation(),
            "Creator: The same creator's code has just worked with {Result of the ConcreteProduct1}"
        );
        assert!(ConcreteCreator2
            .some_operation()
            .ends_with("{Result of the ConcreteProduct2}"));
    }

    #[test]
    fn test_overriding_factory_method_only() {
        struct Custom;
        struct CustomProduct;

        impl Product for CustomProduct {
            fn operation(&self) -> String {
                "{custom}".to_string()
            }
        }

        impl Creator for Custom {
            fn factory_method(&self) -> Box<dyn Product> {
                Box::new(CustomProduct)
            }
        }

        assert!(Custom.some_operation().ends_with("{custom}"));
    }

    #[test]
    fn test_demo_lines() {
        let out = Transcript::new();
        demo(&out).unwrap();
        assert_eq!(out.len(), 7);
        assert_eq!(
            out.count("Client: I'm not aware of the creator's class, but it still works."),
            2
        );
    }
}
