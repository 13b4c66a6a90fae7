//! # Design Pattern Catalog
//!
//! Small, self-contained demonstrations of the classic object-oriented
//! design patterns, expressed with traits instead of inheritance.
//!
//! ## Creational Patterns
//! - Abstract Factory: families of related products
//! - Builder: step-by-step assembly with a reusable director
//! - Factory Method: creators deferring instantiation to implementors
//! - Prototype: cloning registered instances by key
//!
//! ## Structural Patterns
//! - Adapter: fitting a foreign interface into the expected one
//! - Bridge: computers and printers varying independently
//! - Decorator: pizza toppings stacked around a base
//! - Flyweight: player dresses shared through a cache
//!
//! ## Behavioral Patterns
//! - Command: buttons bound to device actions
//! - Interpreter: evaluating arithmetic expression trees
//! - Iterator: walking a user collection
//! - Mediator: a station manager serializing platform access
//! - Template Method: OTP delivery over SMS and email
//! - Visitor: shape operations without touching the shapes
//!
//! Every demonstration writes its output into a [`Transcript`], so the same
//! driver backs the binaries and the tests.
//!
//! Run a single pattern with: `cargo run --bin <pattern>`
//! Run the whole catalog with: `cargo run --bin catalog -- all`

pub mod behavioral;
pub mod catalog;
pub mod creational;
pub mod error;
pub mod logging;
pub mod structural;
pub mod transcript;

pub use error::{CatalogError, ParseError};
pub use transcript::Transcript;
