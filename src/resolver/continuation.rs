//! Continuation resolution
//!
//! When a naming operation cannot proceed locally — typically because a name
//! crosses into another naming system — the interrupted operation is captured
//! as a [`PendingOperation`]. Continuation resolution turns that capture into
//! the follow-on context the operation should resume in, promoting a plain
//! context to directory capability through an adapter when the caller needs
//! the richer surface.
//!
//! Terminal states: a usable context, or the original pending operation
//! re-raised with a fresh stack context.

use crate::error::Result;
use crate::naming::{
    Attributes, BoundValue, CompositeName, ContextObject, DirContext, Environment,
    PendingOperation,
};
use crate::resolver::object::ObjectResolver;
use std::sync::Arc;
use tracing::debug;

/// Builds follow-on contexts from captured pending operations
pub struct ContinuationResolver {
    object_resolver: ObjectResolver,
}

impl ContinuationResolver {
    pub fn new() -> Self {
        Self {
            object_resolver: ObjectResolver::new(),
        }
    }

    /// Continuation over a specific object resolver
    pub fn with_resolver(object_resolver: ObjectResolver) -> Self {
        Self { object_resolver }
    }

    /// Build the plain follow-on context for `pending`.
    ///
    /// Returns the already-resolved context directly when there is one,
    /// otherwise resolves the captured object; failure to obtain a context
    /// re-raises the pending operation.
    pub fn continuation(&self, pending: &PendingOperation) -> Result<ContextObject> {
        let environment = self.record_pending(pending);

        let Some(resolved) = pending.resolved_object() else {
            debug!("No resolved object captured, re-raising pending operation");
            return Err(pending.re_raise());
        };

        if let Some(context) = resolved.as_context() {
            return Ok(context.clone());
        }

        match self.resolve_to_context(resolved, pending, &environment, None)? {
            Some(context) => Ok(context),
            None => Err(pending.re_raise()),
        }
    }

    /// Build the directory-capable follow-on context for `pending`.
    ///
    /// A resolved object that already satisfies the directory capability is
    /// returned directly. A plain context is wrapped in an adapter whose
    /// directory-only operations re-raise `pending`.
    pub fn continuation_dir(
        &self,
        pending: &PendingOperation,
        attributes: Option<&Attributes>,
    ) -> Result<Arc<dyn DirContext>> {
        let environment = self.record_pending(pending);

        let Some(resolved) = pending.resolved_object() else {
            debug!("No resolved object captured, re-raising pending operation");
            return Err(pending.re_raise());
        };

        if let Some(ContextObject::Directory(dir)) = resolved.as_context() {
            return Ok(Arc::clone(dir));
        }
        if let Some(context) = resolved.as_context() {
            return Ok(context.clone().into_directory(pending));
        }

        match self.resolve_to_context(resolved, pending, &environment, attributes)? {
            Some(context) => Ok(context.into_directory(pending)),
            None => Err(pending.re_raise()),
        }
    }

    /// Record the pending operation so the eventual context can recover it
    fn record_pending(&self, pending: &PendingOperation) -> Environment {
        pending
            .environment()
            .with_pending_operation(pending.clone())
    }

    /// Resolve the captured object, accepting only context results
    fn resolve_to_context(
        &self,
        resolved: &BoundValue,
        pending: &PendingOperation,
        environment: &Environment,
        attributes: Option<&Attributes>,
    ) -> Result<Option<ContextObject>> {
        let name = pending
            .alt_name()
            .cloned()
            .unwrap_or_else(CompositeName::new);

        let answer =
            self.object_resolver
                .resolve(resolved, &name, None, environment, attributes)?;

        match answer {
            BoundValue::Context(context) => Ok(Some(context)),
            other => {
                debug!(resolved = ?other, "Continuation resolution produced a non-context");
                Ok(None)
            }
        }
    }
}

impl Default for ContinuationResolver {
    fn default() -> Self {
        Self::new()
    }
}
