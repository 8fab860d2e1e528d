//! Initial context creation
//!
//! Applications enter the naming system through an initial context. Its
//! factory is selected either by a process-wide builder (set-once, like the
//! other builder slots) or by the class identifier under the
//! `initial.context.factory` environment key.

use crate::constants::keys;
use crate::error::{ResolutionError, Result};
use crate::factory::{global_loader, BuilderSlot, FactoryInstance, FactoryLoader};
use crate::naming::{ContextObject, Environment};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Produces the initial context factory customized for an environment
pub trait InitialContextFactoryBuilder: Send + Sync {
    fn create_initial_context_factory(
        &self,
        environment: &Environment,
    ) -> anyhow::Result<FactoryInstance>;
}

static GLOBAL_INITIAL_BUILDER: OnceLock<Arc<BuilderSlot<dyn InitialContextFactoryBuilder>>> =
    OnceLock::new();

/// The process-wide initial context factory builder slot
pub fn global_initial_builder() -> Arc<BuilderSlot<dyn InitialContextFactoryBuilder>> {
    GLOBAL_INITIAL_BUILDER
        .get_or_init(|| Arc::new(BuilderSlot::new("initial context")))
        .clone()
}

/// Install the process-wide initial context factory builder; permanent once set
pub fn set_initial_context_factory_builder(
    builder: Arc<dyn InitialContextFactoryBuilder>,
) -> Result<()> {
    global_initial_builder().install(builder)
}

/// Creates initial contexts from an environment
pub struct InitialContextResolver {
    builder_slot: Arc<BuilderSlot<dyn InitialContextFactoryBuilder>>,
    loader: Arc<dyn FactoryLoader>,
}

impl InitialContextResolver {
    pub fn new() -> Self {
        Self {
            builder_slot: global_initial_builder(),
            loader: global_loader(),
        }
    }

    pub fn with_builder_slot(
        mut self,
        slot: Arc<BuilderSlot<dyn InitialContextFactoryBuilder>>,
    ) -> Self {
        self.builder_slot = slot;
        self
    }

    pub fn with_loader(mut self, loader: Arc<dyn FactoryLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Create the initial context for `environment`.
    ///
    /// An installed builder takes precedence; otherwise the factory named
    /// under the `initial.context.factory` key is loaded and invoked.
    pub fn initial_context(&self, environment: &Environment) -> Result<ContextObject> {
        let factory = if let Some(builder) = self.builder_slot.get() {
            debug!("Initial context builder installed, delegating");
            builder
                .create_initial_context_factory(environment)
                .map_err(|e| ResolutionError::factory_failure("initial_context_builder", e))?
        } else {
            let class_name = environment.get(keys::INITIAL_CONTEXT_FACTORY).ok_or_else(|| {
                ResolutionError::NoInitialContext {
                    reason: format!("environment does not set '{}'", keys::INITIAL_CONTEXT_FACTORY),
                }
            })?;
            self.loader
                .load(class_name)?
                .ok_or_else(|| ResolutionError::FactoryNotFound {
                    class_name: class_name.to_string(),
                })?
        };

        match factory {
            FactoryInstance::InitialContext(f) => f
                .create_initial_context(environment)
                .map_err(|e| ResolutionError::factory_failure(f.factory_name(), e)),
            other => Err(ResolutionError::NoInitialContext {
                reason: format!("factory does not create initial contexts: {other:?}"),
            }),
        }
    }
}

impl Default for InitialContextResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{InitialContextFactory, StaticFactoryLoader};
    use crate::naming::{BoundValue, CompositeName, Context};

    struct MemoryContext;

    impl Context for MemoryContext {
        fn lookup(&self, name: &CompositeName) -> Result<BoundValue> {
            Err(ResolutionError::NameNotBound {
                name: name.to_string(),
            })
        }

        fn bind(&self, _name: &CompositeName, _value: BoundValue) -> Result<()> {
            Ok(())
        }
    }

    struct MemoryContextFactory;

    impl InitialContextFactory for MemoryContextFactory {
        fn create_initial_context(
            &self,
            _environment: &Environment,
        ) -> anyhow::Result<ContextObject> {
            Ok(ContextObject::plain(Arc::new(MemoryContext)))
        }
    }

    fn isolated_resolver(loader: Arc<StaticFactoryLoader>) -> InitialContextResolver {
        InitialContextResolver::new()
            .with_builder_slot(Arc::new(BuilderSlot::new("initial context")))
            .with_loader(loader)
    }

    #[test]
    fn test_factory_selected_from_environment_key() {
        let loader = Arc::new(StaticFactoryLoader::new());
        loader.register("stub.MemoryContextFactory", || {
            FactoryInstance::InitialContext(Arc::new(MemoryContextFactory))
        });
        let resolver = isolated_resolver(loader);

        let env = Environment::new().set("initial.context.factory", "stub.MemoryContextFactory");
        let context = resolver.initial_context(&env).unwrap();
        assert!(!context.is_directory());
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let resolver = isolated_resolver(Arc::new(StaticFactoryLoader::new()));
        let err = resolver.initial_context(&Environment::new()).unwrap_err();
        assert!(matches!(err, ResolutionError::NoInitialContext { .. }));
    }

    #[test]
    fn test_unknown_factory_is_an_error() {
        let resolver = isolated_resolver(Arc::new(StaticFactoryLoader::new()));
        let env = Environment::new().set("initial.context.factory", "missing.Factory");
        let err = resolver.initial_context(&env).unwrap_err();
        assert!(matches!(err, ResolutionError::FactoryNotFound { .. }));
    }

    #[test]
    fn test_builder_takes_precedence() {
        struct Builder;

        impl InitialContextFactoryBuilder for Builder {
            fn create_initial_context_factory(
                &self,
                _environment: &Environment,
            ) -> anyhow::Result<FactoryInstance> {
                Ok(FactoryInstance::InitialContext(Arc::new(
                    MemoryContextFactory,
                )))
            }
        }

        let slot: Arc<BuilderSlot<dyn InitialContextFactoryBuilder>> =
            Arc::new(BuilderSlot::new("initial context"));
        slot.install(Arc::new(Builder)).unwrap();

        let resolver = InitialContextResolver::new()
            .with_builder_slot(slot)
            .with_loader(Arc::new(StaticFactoryLoader::new()));

        // no environment key needed when a builder is installed
        let context = resolver.initial_context(&Environment::new()).unwrap();
        assert!(!context.is_directory());
    }
}
