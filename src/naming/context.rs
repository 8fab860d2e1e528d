//! Context traits and the context variant type
//!
//! A `Context` is a resolution target: something names can be looked up in
//! and bound into. `DirContext` is the richer, directory-capable variant that
//! additionally carries attributes per binding. Rather than relying on
//! downcasts, resolved contexts travel as the explicit [`ContextObject`]
//! variant type, and plain contexts are promoted to directory capability via
//! an adapter whose directory-only operations re-raise the pending operation
//! that triggered continuation.

use super::attributes::Attributes;
use super::name::CompositeName;
use super::pending::PendingOperation;
use super::reference::Reference;
use super::value::BoundValue;
use crate::error::Result;
use crate::naming::Environment;
use std::fmt;
use std::sync::Arc;

/// A naming context: the target of lookup and bind operations
pub trait Context: Send + Sync {
    /// Resolve `name` to the value bound under it
    fn lookup(&self, name: &CompositeName) -> Result<BoundValue>;

    /// Bind `value` under `name`
    fn bind(&self, name: &CompositeName, value: BoundValue) -> Result<()>;

    /// Factory identifiers this context's provider declares, keyed by the
    /// same property keys as the caller environment. Lower precedence than
    /// caller-supplied names. Defaults to empty.
    fn provider_resource(&self) -> Environment {
        Environment::new()
    }

    /// The reference describing this context, for contexts that are
    /// themselves reconstructable (the `Referenceable` capability)
    fn as_reference(&self) -> Option<Reference> {
        None
    }
}

/// A directory-capable context: bindings carry attribute sets
pub trait DirContext: Context {
    /// Attributes of the object bound under `name`
    fn get_attributes(&self, name: &CompositeName) -> Result<Attributes>;

    /// Bind `value` under `name` together with its attributes
    fn bind_with_attributes(
        &self,
        name: &CompositeName,
        value: BoundValue,
        attributes: &Attributes,
    ) -> Result<()>;
}

/// Explicit variant type over the two context capabilities
#[derive(Clone)]
pub enum ContextObject {
    Plain(Arc<dyn Context>),
    Directory(Arc<dyn DirContext>),
}

impl ContextObject {
    pub fn plain(context: Arc<dyn Context>) -> Self {
        ContextObject::Plain(context)
    }

    pub fn directory(context: Arc<dyn DirContext>) -> Self {
        ContextObject::Directory(context)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, ContextObject::Directory(_))
    }

    pub fn lookup(&self, name: &CompositeName) -> Result<BoundValue> {
        match self {
            ContextObject::Plain(c) => c.lookup(name),
            ContextObject::Directory(c) => c.lookup(name),
        }
    }

    pub fn bind(&self, name: &CompositeName, value: BoundValue) -> Result<()> {
        match self {
            ContextObject::Plain(c) => c.bind(name, value),
            ContextObject::Directory(c) => c.bind(name, value),
        }
    }

    pub fn provider_resource(&self) -> Environment {
        match self {
            ContextObject::Plain(c) => c.provider_resource(),
            ContextObject::Directory(c) => c.provider_resource(),
        }
    }

    pub fn as_reference(&self) -> Option<Reference> {
        match self {
            ContextObject::Plain(c) => c.as_reference(),
            ContextObject::Directory(c) => c.as_reference(),
        }
    }

    /// Promote to directory capability. Directory contexts are returned as
    /// they are; plain contexts are wrapped in an adapter whose
    /// directory-only operations re-raise `pending`.
    pub fn into_directory(self, pending: &PendingOperation) -> Arc<dyn DirContext> {
        match self {
            ContextObject::Directory(c) => c,
            ContextObject::Plain(c) => Arc::new(PlainDirContextAdapter::new(c, pending.clone())),
        }
    }

    /// Pointer equality for identity checks across clones
    pub fn ptr_eq(&self, other: &ContextObject) -> bool {
        match (self, other) {
            (ContextObject::Plain(a), ContextObject::Plain(b)) => Arc::ptr_eq(a, b),
            (ContextObject::Directory(a), ContextObject::Directory(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ContextObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextObject::Plain(_) => write!(f, "ContextObject::Plain(<dyn Context>)"),
            ContextObject::Directory(_) => write!(f, "ContextObject::Directory(<dyn DirContext>)"),
        }
    }
}

/// Adapter exposing a plain context through the directory-capable trait.
///
/// Context operations delegate to the wrapped plain context. Directory-only
/// operations fail deliberately by re-raising the pending operation captured
/// when the continuation was built, so callers can retry or abort with the
/// original error state intact.
pub struct PlainDirContextAdapter {
    inner: Arc<dyn Context>,
    pending: PendingOperation,
}

impl PlainDirContextAdapter {
    pub fn new(inner: Arc<dyn Context>, pending: PendingOperation) -> Self {
        Self { inner, pending }
    }
}

impl Context for PlainDirContextAdapter {
    fn lookup(&self, name: &CompositeName) -> Result<BoundValue> {
        self.inner.lookup(name)
    }

    fn bind(&self, name: &CompositeName, value: BoundValue) -> Result<()> {
        self.inner.bind(name, value)
    }

    fn provider_resource(&self) -> Environment {
        self.inner.provider_resource()
    }

    fn as_reference(&self) -> Option<Reference> {
        self.inner.as_reference()
    }
}

impl DirContext for PlainDirContextAdapter {
    fn get_attributes(&self, _name: &CompositeName) -> Result<Attributes> {
        Err(self.pending.re_raise())
    }

    fn bind_with_attributes(
        &self,
        _name: &CompositeName,
        _value: BoundValue,
        _attributes: &Attributes,
    ) -> Result<()> {
        Err(self.pending.re_raise())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolutionError;

    struct EmptyContext;

    impl Context for EmptyContext {
        fn lookup(&self, name: &CompositeName) -> Result<BoundValue> {
            Err(ResolutionError::NameNotBound {
                name: name.to_string(),
            })
        }

        fn bind(&self, _name: &CompositeName, _value: BoundValue) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_plain_adapter_delegates_context_operations() {
        let pending = PendingOperation::new("crossed boundary");
        let ctx = ContextObject::plain(Arc::new(EmptyContext));
        let dir = ctx.into_directory(&pending);

        assert!(dir.bind(&CompositeName::parse("a"), BoundValue::null()).is_ok());
        assert!(matches!(
            dir.lookup(&CompositeName::parse("a")),
            Err(ResolutionError::NameNotBound { .. })
        ));
    }

    #[test]
    fn test_plain_adapter_reraises_on_directory_operations() {
        let pending = PendingOperation::new("crossed boundary");
        let ctx = ContextObject::plain(Arc::new(EmptyContext));
        let dir = ctx.into_directory(&pending);

        let err = dir.get_attributes(&CompositeName::parse("a")).unwrap_err();
        match err {
            ResolutionError::CannotProceed { reason, .. } => {
                assert_eq!(reason, "crossed boundary");
            }
            other => panic!("expected CannotProceed, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_context_is_returned_unwrapped() {
        struct Dir;
        impl Context for Dir {
            fn lookup(&self, _name: &CompositeName) -> Result<BoundValue> {
                Ok(BoundValue::null())
            }
            fn bind(&self, _name: &CompositeName, _value: BoundValue) -> Result<()> {
                Ok(())
            }
        }
        impl DirContext for Dir {
            fn get_attributes(&self, _name: &CompositeName) -> Result<Attributes> {
                Ok(Attributes::new())
            }
            fn bind_with_attributes(
                &self,
                _name: &CompositeName,
                _value: BoundValue,
                _attributes: &Attributes,
            ) -> Result<()> {
                Ok(())
            }
        }

        let pending = PendingOperation::new("unused");
        let ctx = ContextObject::directory(Arc::new(Dir));
        let dir = ctx.into_directory(&pending);
        assert!(dir.get_attributes(&CompositeName::new()).is_ok());
    }
}
