//! # Resolution Error Types
//!
//! Structured error handling for the factory resolution chain using thiserror
//! instead of `Box<dyn Error>` patterns.
//!
//! The taxonomy mirrors the chain's contract: a factory class that cannot be
//! found is skippable inside a stage, a factory that fails while executing
//! stops the chain, builder re-installation is permanent, and continuation
//! failures re-raise the captured pending operation.

use crate::naming::PendingOperation;
use thiserror::Error;

/// Errors raised by the resolution chain and its collaborators
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("Factory class not found: {class_name}")]
    FactoryNotFound { class_name: String },

    #[error("Factory '{factory}' failed during invocation: {source}")]
    FactoryFailure {
        factory: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("A {kind} factory builder is already installed")]
    BuilderAlreadyInstalled { kind: &'static str },

    #[error("Cannot proceed with resolution: {reason}")]
    CannotProceed {
        reason: String,
        pending: Box<PendingOperation>,
    },

    #[error("Name not bound: {name}")]
    NameNotBound { name: String },

    #[error("Invalid configuration for '{key}': {reason}")]
    InvalidConfiguration { key: String, reason: String },

    #[error("No initial context factory available: {reason}")]
    NoInitialContext { reason: String },
}

impl ResolutionError {
    /// Wrap an arbitrary factory error, recording which factory failed
    pub fn factory_failure(factory: impl Into<String>, source: anyhow::Error) -> Self {
        ResolutionError::FactoryFailure {
            factory: factory.into(),
            source,
        }
    }

    /// Whether this error carries a re-raisable pending operation
    pub fn pending_operation(&self) -> Option<&PendingOperation> {
        match self {
            ResolutionError::CannotProceed { pending, .. } => Some(pending),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolutionError>;
