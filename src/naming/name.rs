//! Composite names
//!
//! Ordered component sequences with a `/`-separated textual form. Names cross
//! naming system boundaries, so the suffix left over after a partial
//! resolution is itself a `CompositeName`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of name components spanning one or more naming systems
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositeName {
    components: Vec<String>,
}

impl CompositeName {
    /// Create an empty name
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `/`-separated textual name; empty segments are preserved
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        Self {
            components: text.split('/').map(str::to_string).collect(),
        }
    }

    /// Build a name from owned components
    pub fn from_components(components: Vec<String>) -> Self {
        Self { components }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.components.get(index).map(String::as_str)
    }

    /// The first `n` components as a new name
    pub fn prefix(&self, n: usize) -> Self {
        Self {
            components: self.components.iter().take(n).cloned().collect(),
        }
    }

    /// Everything from component `n` onward as a new name
    pub fn suffix(&self, n: usize) -> Self {
        Self {
            components: self.components.iter().skip(n).cloned().collect(),
        }
    }

    /// Append all components of `other`; `other` is cloned, never retained
    pub fn append(&mut self, other: &CompositeName) {
        self.components.extend(other.components.iter().cloned());
    }

    /// Append a single component
    pub fn push(&mut self, component: impl Into<String>) {
        self.components.push(component.into());
    }
}

impl fmt::Display for CompositeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

impl From<&str> for CompositeName {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}
