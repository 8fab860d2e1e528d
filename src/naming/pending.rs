//! Pending operations
//!
//! Captures the state of a naming operation that could not proceed locally:
//! what was resolved so far, what remains, and the environment in effect.
//! Continuation resolution consumes this capture and can re-raise it as a
//! fresh error when no follow-on context can be produced.

use super::environment::Environment;
use super::name::CompositeName;
use super::value::BoundValue;
use crate::error::ResolutionError;
use chrono::{DateTime, Utc};

/// Captured state of a naming operation interrupted at a system boundary
#[derive(Debug, Clone)]
pub struct PendingOperation {
    resolved_object: Option<BoundValue>,
    remaining_name: CompositeName,
    alt_name: Option<CompositeName>,
    environment: Environment,
    reason: String,
    captured_at: DateTime<Utc>,
}

impl PendingOperation {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            resolved_object: None,
            remaining_name: CompositeName::new(),
            alt_name: None,
            environment: Environment::new(),
            reason: reason.into(),
            captured_at: Utc::now(),
        }
    }

    /// Record the partially resolved object
    pub fn with_resolved_object(mut self, object: BoundValue) -> Self {
        self.resolved_object = Some(object);
        self
    }

    /// Record the unresolved suffix; `name` is cloned, never retained
    pub fn with_remaining_name(mut self, name: &CompositeName) -> Self {
        self.remaining_name = name.clone();
        self
    }

    /// Record the alternate name the resolved object is known by
    pub fn with_alt_name(mut self, name: &CompositeName) -> Self {
        self.alt_name = Some(name.clone());
        self
    }

    /// Record the environment in effect; cloned defensively
    pub fn with_environment(mut self, environment: &Environment) -> Self {
        self.environment = environment.clone();
        self
    }

    pub fn resolved_object(&self) -> Option<&BoundValue> {
        self.resolved_object.as_ref()
    }

    pub fn remaining_name(&self) -> &CompositeName {
        &self.remaining_name
    }

    pub fn alt_name(&self) -> Option<&CompositeName> {
        self.alt_name.as_ref()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Re-arm this capture as a fresh error for the caller
    pub fn re_raise(&self) -> ResolutionError {
        ResolutionError::CannotProceed {
            reason: self.reason.clone(),
            pending: Box::new(self.clone()),
        }
    }
}
