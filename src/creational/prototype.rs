//! Creational Pattern: Prototype
//! Example: a registry handing out clones of keyed prototypes
//!
//! Run with: cargo run --bin prototype

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use tracing::debug;

use crate::error::CatalogError;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrototypeKey {
    Prototype1,
    Prototype2,
}

impl PrototypeKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrototypeKey::Prototype1 => "PROTOTYPE_1",
            PrototypeKey::Prototype2 => "PROTOTYPE_2",
        }
    }
}

impl fmt::Display for PrototypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrototypeKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROTOTYPE_1" => Ok(PrototypeKey::Prototype1),
            "PROTOTYPE_2" => Ok(PrototypeKey::Prototype2),
            other => Err(CatalogError::UnknownPrototype(other.to_string())),
        }
    }
}

pub trait Prototype {
    fn key(&self) -> &str;
    fn value(&self) -> i32;

    /// Name of the concrete type, used to decide whether two prototypes are
    /// identical without being the same object.
    fn kind(&self) -> &'static str;

    fn clone_prototype(&self) -> Rc<dyn Prototype>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcretePrototype1 {
    key: String,
    value: i32,
    pub concrete_value: i32,
}

impl ConcretePrototype1 {
    pub fn new(key: PrototypeKey, value: i32, concrete_value: i32) -> Self {
        Self {
            key: key.to_string(),
            value,
            concrete_value,
        }
    }
}

impl Prototype for ConcretePrototype1 {
    fn key(&self) -> &str {
        &self.key
    }

    fn value(&self) -> i32 {
        self.value
    }

    fn kind(&self) -> &'static str {
        "ConcretePrototype1"
    }

    fn clone_prototype(&self) -> Rc<dyn Prototype> {
        Rc::new(self.clone())
    }

    fn describe(&self) -> String {
        format!(
            "Called from key: {}, value: {}, concrete_prototype_value_1: {}",
            self.key, self.value, self.concrete_value
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcretePrototype2 {
    key: String,
    value: i32,
    pub concrete_value: i32,
}

impl ConcretePrototype2 {
    pub fn new(key: PrototypeKey, value: i32, concrete_value: i32) -> Self {
        Self {
            key: key.to_string(),
            value,
            concrete_value,
        }
    }
}

impl Prototype for ConcretePrototype2 {
    fn key(&self) -> &str {
        &self.key
    }

    fn value(&self) -> i32 {
        self.value
    }

    fn kind(&self) -> &'static str {
        "ConcretePrototype2"
    }

    fn clone_prototype(&self) -> Rc<dyn Prototype> {
        Rc::new(self.clone())
    }

    fn describe(&self) -> String {
        format!(
            "Called from key: {}, value: {}, concrete_prototype_value_2: {}",
            self.key, self.value, self.concrete_value
        )
    }
}

/// Outcome of comparing two prototypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Both handles point at one allocation.
    pub same_object: bool,
    /// Same concrete type registered under the same key.
    pub identical: bool,
}

impl Comparison {
    pub fn between(left: &Rc<dyn Prototype>, right: &Rc<dyn Prototype>) -> Self {
        Comparison {
            same_object: Rc::ptr_eq(left, right),
            identical: left.kind() == right.kind() && left.key() == right.key(),
        }
    }

    pub fn lines(&self) -> [&'static str; 2] {
        [
            if self.same_object {
                "- Same objects"
            } else {
                "- Different objects"
            },
            if self.identical {
                "- Identical"
            } else {
                "- Not Identical"
            },
        ]
    }
}

pub struct PrototypeManager {
    prototypes: HashMap<String, Rc<dyn Prototype>>,
}

impl PrototypeManager {
    /// Starts with PROTOTYPE_1 registered.
    pub fn new() -> Self {
        let mut prototypes: HashMap<String, Rc<dyn Prototype>> = HashMap::new();
        prototypes.insert(
            PrototypeKey::Prototype1.to_string(),
            Rc::new(ConcretePrototype1::new(PrototypeKey::Prototype1, 1, 11)),
        );
        PrototypeManager { prototypes }
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn put(&mut self, key: PrototypeKey, prototype: Rc<dyn Prototype>) {
        debug!(key = key.as_str(), "registering prototype");
        self.prototypes.insert(key.to_string(), prototype);
    }

    pub fn registered(&self, key: &str) -> Result<&Rc<dyn Prototype>, CatalogError> {
        self.prototypes
            .get(key)
            .ok_or_else(|| CatalogError::UnknownPrototype(key.to_string()))
    }

    /// A fresh clone of the prototype registered under `key`.
    pub fn create(&self, key: &str) -> Result<Rc<dyn Prototype>, CatalogError> {
        let clone = self.registered(key)?.clone_prototype();
        debug!(key, kind = clone.kind(), "cloned prototype");
        Ok(clone)
    }

    pub fn compare_with_prototype(
        &self,
        key: &str,
        candidate: &Rc<dyn Prototype>,
    ) -> Result<Comparison, CatalogError> {
        Ok(Comparison::between(self.registered(key)?, candidate))
    }
}

impl Default for PrototypeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn list_prototypes(manager: &PrototypeManager, out: &Transcript) {
    out.line("Listing prototypes");
    out.extend(manager.keys());
}

fn create_and_compare(
    manager: &PrototypeManager,
    key: PrototypeKey,
    out: &Transcript,
) -> Result<Rc<dyn Prototype>, CatalogError> {
    out.line(format!("Creating prototype: {key}"));
    let prototype = manager.create(key.as_str())?;
    out.line(prototype.describe());
    out.line("Comparing with Prototype:");
    out.extend(manager.compare_with_prototype(key.as_str(), &prototype)?.lines());
    Ok(prototype)
}

fn compare_clones(left: &Rc<dyn Prototype>, right: &Rc<dyn Prototype>, out: &Transcript) {
    out.line("Comparing with Prototype:");
    out.extend(Comparison::between(left, right).lines());
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let mut manager = PrototypeManager::new();
    list_prototypes(&manager, out);

    out.line(format!("Putting prototype <{}>", PrototypeKey::Prototype2));
    manager.put(
        PrototypeKey::Prototype2,
        Rc::new(ConcretePrototype2::new(PrototypeKey::Prototype2, 2, 22)),
    );
    list_prototypes(&manager, out);

    out.line("======PROTOTYPE_1========");
    let prototype1 = create_and_compare(&manager, PrototypeKey::Prototype1, out)?;
    out.blank();
    let prototype2 = create_and_compare(&manager, PrototypeKey::Prototype1, out)?;
    out.blank();
    compare_clones(&prototype1, &prototype2, out);
    out.blank();

    out.line("======PROTOTYPE_2========");
    let prototype3 = create_and_compare(&manager, PrototypeKey::Prototype2, out)?;
    out.blank();
    let prototype4 = create_and_compare(&manager, PrototypeKey::Prototype2, out)?;
    out.blank();
    compare_clones(&prototype3, &prototype4, out);

    out.line("======DIFF========");
    compare_clones(&prototype1, &prototype3, out);
    compare_clones(&prototype2, &prototype4, out);

    out.blank();
    out.line("Creating prototype: PROTOTYPE_3");
    if let Err(err) = manager.create("PROTOTYPE_3") {
        out.line(format!("Error: {err}"));
    }
    Ok(())
}
