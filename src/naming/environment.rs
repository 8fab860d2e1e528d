//! The caller-supplied environment mapping
//!
//! String key → string value pairs, immutable from the chain's perspective.
//! The pending continuation operation travels alongside the string properties
//! in a typed slot so continuation contexts can recover it without downcasts;
//! the slot is addressed by [`crate::constants::keys::PENDING_OPERATION`].

use super::pending::PendingOperation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Key → value mapping supplied by the caller; never mutated by the resolvers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Environment {
    values: HashMap<String, String>,

    /// Pending operation recorded by continuation resolution
    #[serde(skip)]
    pending_operation: Option<Arc<PendingOperation>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable setter for building environments in place
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy of this environment with the pending operation recorded
    pub fn with_pending_operation(&self, pending: PendingOperation) -> Self {
        let mut copy = self.clone();
        copy.pending_operation = Some(Arc::new(pending));
        copy
    }

    pub fn pending_operation(&self) -> Option<&PendingOperation> {
        self.pending_operation.as_deref()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            pending_operation: None,
        }
    }
}
