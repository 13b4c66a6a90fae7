//! Registry of every demonstration, in catalog order.
//!
//! The `catalog` binary lists and runs entries from here; each per-pattern
//! binary calls its module's `demo` directly.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info_span};

use crate::behavioral::{command, interpreter, iterator, mediator, template_method, visitor};
use crate::creational::{abstract_factory, builder, factory_method, prototype};
use crate::error::CatalogError;
use crate::structural::{adapter, bridge, decorator, flyweight};
use crate::transcript::Transcript;

pub type Demo = fn(&Transcript) -> Result<(), CatalogError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Creational => write!(f, "Creational"),
            Category::Structural => write!(f, "Structural"),
            Category::Behavioral => write!(f, "Behavioral"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pattern {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    #[serde(skip)]
    demo: Demo,
}

impl Pattern {
    const fn new(name: &'static str, category: Category, summary: &'static str, demo: Demo) -> Self {
        Pattern {
            name,
            category,
            summary,
            demo,
        }
    }

    /// Runs the demonstration into a fresh transcript.
    pub fn run(&self) -> Result<Transcript, CatalogError> {
        let _pattern = info_span!("pattern", name = self.name).entered();
        debug!("running demonstration");
        let out = Transcript::new();
        (self.demo)(&out)?;
        Ok(out)
    }
}

static PATTERNS: [Pattern; 14] = [
    Pattern::new(
        "abstract_factory",
        Category::Creational,
        "families of related products behind one factory",
        abstract_factory::demo,
    ),
    Pattern::new(
        "builder",
        Category::Creational,
        "step-by-step assembly driven by a director",
        builder::demo,
    ),
    Pattern::new(
        "factory_method",
        Category::Creational,
        "creators that defer product choice to implementors",
        factory_method::demo,
    ),
    Pattern::new(
        "prototype",
        Category::Creational,
        "new objects cloned from registered prototypes",
        prototype::demo,
    ),
    Pattern::new(
        "adapter",
        Category::Structural,
        "a USB machine behind a lightning port",
        adapter::demo,
    ),
    Pattern::new(
        "bridge",
        Category::Structural,
        "computers and printers varying independently",
        bridge::demo,
    ),
    Pattern::new(
        "decorator",
        Category::Structural,
        "toppings wrapping a pizza to extend its price",
        decorator::demo,
    ),
    Pattern::new(
        "flyweight",
        Category::Structural,
        "player dresses shared through a cache",
        flyweight::demo,
    ),
    Pattern::new(
        "command",
        Category::Behavioral,
        "buttons bound to device actions",
        command::demo,
    ),
    Pattern::new(
        "interpreter",
        Category::Behavioral,
        "arithmetic expression trees evaluated in a context",
        interpreter::demo,
    ),
    Pattern::new(
        "iterator",
        Category::Behavioral,
        "walking a collection without exposing its storage",
        iterator::demo,
    ),
    Pattern::new(
        "mediator",
        Category::Behavioral,
        "a station manager serializing platform access",
        mediator::demo,
    ),
    Pattern::new(
        "template_method",
        Category::Behavioral,
        "a fixed OTP workflow with per-channel steps",
        template_method::demo,
    ),
    Pattern::new(
        "visitor",
        Category::Behavioral,
        "shape operations added without touching the shapes",
        visitor::demo,
    ),
];

pub fn patterns() -> &'static [Pattern] {
    &PATTERNS
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Pattern> {
    PATTERNS
        .iter()
        .filter(move |pattern| pattern.category == category)
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

fn shared_prefix(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Looks up a pattern by name; `abstract-factory`, `Abstract_Factory` and
/// `abstract_factory` all resolve to the same entry.
pub fn find(name: &str) -> Result<&'static Pattern, CatalogError> {
    let wanted = normalize(name);

    if let Some(pattern) = PATTERNS.iter().find(|pattern| pattern.name == wanted) {
        return Ok(pattern);
    }

    if wanted.is_empty() {
        return Err(CatalogError::unknown_pattern(name, None));
    }

    let suggestion = PATTERNS
        .iter()
        .map(|pattern| {
            let score = if pattern.name.contains(wanted.as_str()) {
                wanted.len()
            } else {
                shared_prefix(pattern.name, &wanted)
            };
            (score, pattern.name)
        })
        .filter(|(score, _)| *score >= 3)
        .max_by_key(|(score, _)| *score)
        .map(|(_, name)| name.to_string());

    Err(CatalogError::unknown_pattern(name, suggestion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_size() {
        let names: Vec<&str> = patterns().iter().map(|p| p.name).collect();
        assert_eq!(names.len(), 14);
        assert_eq!(names.first(), Some(&"abstract_factory"));
        assert_eq!(names.last(), Some(&"visitor"));
    }

    #[test]
    fn test_categories_are_grouped() {
        assert_eq!(by_category(Category::Creational).count(), 4);
        assert_eq!(by_category(Category::Structural).count(), 4);
        assert_eq!(by_category(Category::Behavioral).count(), 6);

        let total: usize = Category::ALL.iter().map(|c| by_category(*c).count()).sum();
        assert_eq!(total, patterns().len());
    }

    #[test]
    fn test_find_accepts_separators_and_case() {
        assert_eq!(find("template-method").unwrap().name, "template_method");
        assert_eq!(find("Abstract_Factory").unwrap().name, "abstract_factory");
        assert_eq!(find(" visitor ").unwrap().category, Category::Behavioral);
    }

    #[test]
    fn test_find_unknown_suggests_close_name() {
        let err = find("decor").unwrap_err();
        assert_eq!(err.suggestion(), Some("decorator"));
        assert_eq!(err.to_string(), "Unknown pattern 'decor'");

        let err = find("singleton").unwrap_err();
        assert_eq!(err.suggestion(), None);
    }

    #[test]
    fn test_every_entry_runs() {
        for pattern in patterns() {
            let transcript = pattern.run().unwrap();
            assert!(!transcript.is_empty(), "{} printed nothing", pattern.name);
        }
    }

    #[test]
    fn test_serializes_without_demo() {
        let json = serde_json::to_value(find("bridge").unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "bridge",
                "category": "structural",
                "summary": "computers and printers varying independently",
            })
        );
    }
}
