//! Factory shapes
//!
//! The four factory capabilities the chain can invoke, plus the initial
//! context factory. Directory-aware variants take an attribute set and, in
//! the state direction, hand back possibly-updated attributes with the
//! state. The shapes are modeled as a tagged union with a capability check
//! rather than a subtype chain, so a loader can hand back any shape and the
//! resolvers dispatch on what they received.
//!
//! Factories are stateless per contract and must be cheap to construct; the
//! chain builds a fresh instance per resolution call. Factory failures are
//! opaque to the chain, so the boundary type is `anyhow::Error`; the chain
//! wraps them as [`crate::error::ResolutionError::FactoryFailure`].

use crate::naming::{Attributes, BoundValue, CompositeName, ContextObject, Environment};
use std::fmt;
use std::sync::Arc;

/// Converts a stored representation into a usable object.
///
/// Returning `Ok(None)` means "not mine, try the next candidate".
pub trait ObjectFactory: Send + Sync {
    fn get_object_instance(
        &self,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
    ) -> anyhow::Result<Option<BoundValue>>;

    /// Identifier used in logs and failure reports
    fn factory_name(&self) -> &str {
        "object_factory"
    }
}

/// Directory-aware object factory: also receives the attribute set
pub trait DirObjectFactory: Send + Sync {
    fn get_object_instance(
        &self,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
        attributes: &Attributes,
    ) -> anyhow::Result<Option<BoundValue>>;

    fn factory_name(&self) -> &str {
        "dir_object_factory"
    }
}

/// Converts a live object into the state suitable for binding
pub trait StateFactory: Send + Sync {
    fn get_state_to_bind(
        &self,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
    ) -> anyhow::Result<Option<BoundValue>>;

    fn factory_name(&self) -> &str {
        "state_factory"
    }
}

/// State plus the attributes to bind alongside it
#[derive(Debug, Clone)]
pub struct DirStateResult {
    pub object: BoundValue,
    pub attributes: Attributes,
}

/// Directory-aware state factory: bundles possibly-updated attributes with
/// the bindable state
pub trait DirStateFactory: Send + Sync {
    fn get_state_to_bind(
        &self,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
        attributes: &Attributes,
    ) -> anyhow::Result<Option<DirStateResult>>;

    fn factory_name(&self) -> &str {
        "dir_state_factory"
    }
}

/// Produces the initial context an application starts resolution from
pub trait InitialContextFactory: Send + Sync {
    fn create_initial_context(&self, environment: &Environment) -> anyhow::Result<ContextObject>;

    fn factory_name(&self) -> &str {
        "initial_context_factory"
    }
}

/// A resolved, instantiated factory, polymorphic over capability
#[derive(Clone)]
pub enum FactoryInstance {
    Object(Arc<dyn ObjectFactory>),
    DirObject(Arc<dyn DirObjectFactory>),
    State(Arc<dyn StateFactory>),
    DirState(Arc<dyn DirStateFactory>),
    InitialContext(Arc<dyn InitialContextFactory>),
}

impl FactoryInstance {
    /// Whether this factory accepts an attribute set
    pub fn is_directory_aware(&self) -> bool {
        matches!(
            self,
            FactoryInstance::DirObject(_) | FactoryInstance::DirState(_)
        )
    }

    /// Whether this factory serves the object direction
    pub fn is_object_kind(&self) -> bool {
        matches!(
            self,
            FactoryInstance::Object(_) | FactoryInstance::DirObject(_)
        )
    }

    /// Whether this factory serves the bind direction
    pub fn is_state_kind(&self) -> bool {
        matches!(
            self,
            FactoryInstance::State(_) | FactoryInstance::DirState(_)
        )
    }

    pub fn factory_name(&self) -> &str {
        match self {
            FactoryInstance::Object(f) => f.factory_name(),
            FactoryInstance::DirObject(f) => f.factory_name(),
            FactoryInstance::State(f) => f.factory_name(),
            FactoryInstance::DirState(f) => f.factory_name(),
            FactoryInstance::InitialContext(f) => f.factory_name(),
        }
    }
}

impl fmt::Debug for FactoryInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            FactoryInstance::Object(_) => "Object",
            FactoryInstance::DirObject(_) => "DirObject",
            FactoryInstance::State(_) => "State",
            FactoryInstance::DirState(_) => "DirState",
            FactoryInstance::InitialContext(_) => "InitialContext",
        };
        write!(f, "FactoryInstance::{kind}({})", self.factory_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl ObjectFactory for Noop {
        fn get_object_instance(
            &self,
            _value: &BoundValue,
            _name: &CompositeName,
            _context: Option<&ContextObject>,
            _environment: &Environment,
        ) -> anyhow::Result<Option<BoundValue>> {
            Ok(None)
        }
    }

    impl DirStateFactory for Noop {
        fn get_state_to_bind(
            &self,
            _value: &BoundValue,
            _name: &CompositeName,
            _context: Option<&ContextObject>,
            _environment: &Environment,
            _attributes: &Attributes,
        ) -> anyhow::Result<Option<DirStateResult>> {
            Ok(None)
        }
    }

    #[test]
    fn test_capability_checks() {
        let object = FactoryInstance::Object(Arc::new(Noop));
        assert!(object.is_object_kind());
        assert!(!object.is_directory_aware());

        let dir_state = FactoryInstance::DirState(Arc::new(Noop));
        assert!(dir_state.is_state_kind());
        assert!(dir_state.is_directory_aware());
    }
}
