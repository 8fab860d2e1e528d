//! Attribute sets for directory-aware resolution
//!
//! Directory-aware factories accept and produce an attribute set alongside
//! the resolved object. Insertion order is preserved.

use serde::{Deserialize, Serialize};

/// A single attribute: an identifier with zero or more ordered values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    pub values: Vec<String>,
}

impl Attribute {
    pub fn new(id: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }

    pub fn single(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: vec![value.into()],
        }
    }
}

/// An ordered set of attributes keyed by identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the attribute with the same id, preserving position
    pub fn put(&mut self, attribute: Attribute) {
        match self.entries.iter_mut().find(|a| a.id == attribute.id) {
            Some(existing) => *existing = attribute,
            None => self.entries.push(attribute),
        }
    }

    /// Chainable variant of [`Attributes::put`]
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.put(attribute);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Attribute> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_replaces_in_place() {
        let mut attrs = Attributes::new();
        attrs.put(Attribute::single("cn", "alpha"));
        attrs.put(Attribute::single("ou", "engineering"));
        attrs.put(Attribute::single("cn", "beta"));

        assert_eq!(attrs.len(), 2);
        let ids: Vec<&str> = attrs.ids().collect();
        assert_eq!(ids, vec!["cn", "ou"]);
        assert_eq!(attrs.get("cn").unwrap().values, vec!["beta"]);
    }
}
