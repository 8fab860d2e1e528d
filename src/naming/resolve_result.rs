//! Partial resolution results
//!
//! Pairs a partially resolved object with the name suffix still to be
//! resolved. Owned and mutated only by its holder; names appended to the
//! suffix are cloned so callers' originals stay untouched.

use super::name::CompositeName;
use super::value::BoundValue;

/// A partially resolved object plus the remaining unresolved name suffix
#[derive(Debug, Clone)]
pub struct ResolveResult {
    resolved_object: Option<BoundValue>,
    remaining_name: CompositeName,
}

impl ResolveResult {
    pub fn new(resolved_object: BoundValue, remaining_name: &CompositeName) -> Self {
        Self {
            resolved_object: Some(resolved_object),
            remaining_name: remaining_name.clone(),
        }
    }

    pub fn empty() -> Self {
        Self {
            resolved_object: None,
            remaining_name: CompositeName::new(),
        }
    }

    pub fn resolved_object(&self) -> Option<&BoundValue> {
        self.resolved_object.as_ref()
    }

    pub fn remaining_name(&self) -> &CompositeName {
        &self.remaining_name
    }

    pub fn set_resolved_object(&mut self, object: BoundValue) {
        self.resolved_object = Some(object);
    }

    /// Extend the suffix with all components of `name`
    pub fn append_remaining_name(&mut self, name: &CompositeName) {
        self.remaining_name.append(name);
    }

    /// Extend the suffix with a single component
    pub fn append_remaining_component(&mut self, component: &str) {
        self.remaining_name.push(component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_operations_extend_suffix() {
        let mut result = ResolveResult::new(BoundValue::raw("obj"), &CompositeName::parse("a"));
        result.append_remaining_name(&CompositeName::parse("b/c"));
        result.append_remaining_component("d");
        assert_eq!(result.remaining_name().to_string(), "a/b/c/d");
    }

    #[test]
    fn test_new_clones_remaining_name() {
        let mut name = CompositeName::parse("x/y");
        let result = ResolveResult::new(BoundValue::null(), &name);
        name.push("z");
        assert_eq!(result.remaining_name().to_string(), "x/y");
    }
}
