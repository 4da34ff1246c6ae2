//! Category registry: an ordered, read-only catalog of example descriptors.
//!
//! A [`Catalog`] maps category labels to ordered sets of labelled [`ExampleDescriptor`]s.
//! Order is insertion order and drives menu ordering in a gallery host. The built-in
//! catalog is available process-wide through [`catalog`] and is built once on first use.
use std::sync::LazyLock;

use tracing::info;

use crate::catalog::descriptor::ExampleDescriptor;
use crate::error::{Error, Result};

/// A named group of examples.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub label: String,
    pub examples: Vec<(String, ExampleDescriptor)>,
}

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            examples: Vec::new(),
        }
    }

    /// Add an example. A repeated label replaces the earlier descriptor in place.
    pub fn with_example(mut self, label: impl Into<String>, descriptor: ExampleDescriptor) -> Self {
        let label = label.into();
        match self.examples.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = descriptor,
            None => self.examples.push((label, descriptor)),
        }
        self
    }

    pub fn get(&self, example: &str) -> Option<&ExampleDescriptor> {
        self.examples
            .iter()
            .find(|(l, _)| l == example)
            .map(|(_, d)| d)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(|(l, _)| l.as_str())
    }
}

/// An ordered catalog of categories.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Add a category. A repeated label replaces the earlier category in place.
    pub fn with_category(mut self, category: Category) -> Self {
        match self
            .categories
            .iter_mut()
            .find(|c| c.label == category.label)
        {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
        self
    }

    /// Category labels in menu order.
    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }

    /// Example labels of `category` in menu order.
    pub fn list_examples(&self, category: &str) -> Result<Vec<&str>> {
        Ok(self.category(category)?.labels().collect())
    }

    /// Looks up one descriptor.
    pub fn get_descriptor(&self, category: &str, example: &str) -> Result<&ExampleDescriptor> {
        self.category(category)?
            .get(example)
            .ok_or_else(|| Error::ExampleNotFound {
                category: category.to_owned(),
                example: example.to_owned(),
            })
    }

    pub fn category(&self, label: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .ok_or_else(|| Error::CategoryNotFound {
                category: label.to_owned(),
            })
    }

    /// Iterates `(category, example, descriptor)` triples in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &ExampleDescriptor)> {
        self.categories.iter().flat_map(|c| {
            c.examples
                .iter()
                .map(move |(l, d)| (c.label.as_str(), l.as_str(), d))
        })
    }

    /// Total number of examples across categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.examples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates the catalog, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i]
                .iter()
                .any(|c| c.label == category.label)
            {
                return Err(Error::InvalidConfig(format!(
                    "duplicate category '{}'",
                    category.label
                )));
            }
            if category.examples.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "category '{}' has no examples",
                    category.label
                )));
            }
            for (j, (label, descriptor)) in category.examples.iter().enumerate() {
                if category.examples[..j].iter().any(|(l, _)| l == label) {
                    return Err(Error::InvalidConfig(format!(
                        "duplicate example '{}' in category '{}'",
                        label, category.label
                    )));
                }
                descriptor.validate()?;
            }
        }
        Ok(())
    }
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = crate::builtin::builtin_catalog();
    info!(
        "Built example catalog | categories: {} | examples: {}.",
        catalog.categories.len(),
        catalog.len()
    );
    catalog
});

/// The built-in catalog, shared for the lifetime of the process.
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}
