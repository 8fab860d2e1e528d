//! State resolution
//!
//! Mirror of the object chain for the bind direction: converts a live object
//! into the state suitable for binding. Directory-aware factories are asked
//! through their attribute-accepting entry point and hand back
//! possibly-updated attributes; plain factories return bare state, which is
//! paired with the caller's attributes unchanged. The fallback is the value
//! and attributes unmodified — never null.

use crate::constants::keys;
use crate::error::{ResolutionError, Result};
use crate::factory::{
    global_loader, global_state_builder, BuilderSlot, FactoryInstance, FactoryLoader,
    StateFactoryBuilder,
};
use crate::naming::{Attributes, BoundValue, CompositeName, ContextObject, Environment};
use crate::registry::FactoryRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Bindable state paired with the attributes to bind alongside it
#[derive(Debug, Clone)]
pub struct StateResult {
    object: BoundValue,
    attributes: Option<Attributes>,
}

impl StateResult {
    pub fn new(object: BoundValue, attributes: Option<Attributes>) -> Self {
        Self { object, attributes }
    }

    pub fn object(&self) -> &BoundValue {
        &self.object
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn into_parts(self) -> (BoundValue, Option<Attributes>) {
        (self.object, self.attributes)
    }
}

/// The bind-direction resolution chain
pub struct StateResolver {
    builder_slot: Arc<BuilderSlot<dyn StateFactoryBuilder>>,
    loader: Arc<dyn FactoryLoader>,
}

impl StateResolver {
    /// Resolver over the process-wide builder slot and global loader
    pub fn new() -> Self {
        Self {
            builder_slot: global_state_builder(),
            loader: global_loader(),
        }
    }

    pub fn with_builder_slot(mut self, slot: Arc<BuilderSlot<dyn StateFactoryBuilder>>) -> Self {
        self.builder_slot = slot;
        self
    }

    pub fn with_loader(mut self, loader: Arc<dyn FactoryLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Convert `value` into bindable state.
    ///
    /// First success wins; a chosen factory's own error stops the chain.
    /// Unknown or un-instantiable registry candidates are skipped.
    pub fn resolve(
        &self,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
        attributes: Option<&Attributes>,
    ) -> Result<StateResult> {
        debug!(name = %name, value = ?value, "Resolving state to bind");

        // Builder stage: terminal once installed, mirroring the object chain.
        if let Some(builder) = self.builder_slot.get() {
            let factory = builder
                .create_state_factory(value, environment)
                .map_err(|e| ResolutionError::factory_failure("state_factory_builder", e))?;
            let answer =
                self.invoke_state_factory(&factory, value, name, context, environment, attributes)?;
            return Ok(answer
                .unwrap_or_else(|| StateResult::new(value.clone(), attributes.cloned())));
        }

        for class_name in FactoryRegistry::candidate_names(environment, context, keys::STATE_FACTORIES)
        {
            let factory = match self.loader.load(&class_name) {
                Ok(Some(factory)) => factory,
                Ok(None) => {
                    debug!(class_name = %class_name, "Candidate not found, skipping");
                    continue;
                }
                Err(e) => {
                    warn!(class_name = %class_name, error = %e, "Candidate failed to load, skipping");
                    continue;
                }
            };

            if let Some(result) =
                self.invoke_state_factory(&factory, value, name, context, environment, attributes)?
            {
                info!(class_name = %class_name, "State resolved");
                return Ok(result);
            }
        }

        debug!("No state factory answered, returning value and attributes unchanged");
        Ok(StateResult::new(value.clone(), attributes.cloned()))
    }

    fn invoke_state_factory(
        &self,
        factory: &FactoryInstance,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
        attributes: Option<&Attributes>,
    ) -> Result<Option<StateResult>> {
        match factory {
            FactoryInstance::State(f) => {
                let answer = f
                    .get_state_to_bind(value, name, context, environment)
                    .map_err(|e| ResolutionError::factory_failure(f.factory_name(), e))?;
                // bare state pairs with the caller's attributes unchanged
                Ok(answer.map(|object| StateResult::new(object, attributes.cloned())))
            }
            FactoryInstance::DirState(f) => {
                let empty = Attributes::new();
                let answer = f
                    .get_state_to_bind(
                        value,
                        name,
                        context,
                        environment,
                        attributes.unwrap_or(&empty),
                    )
                    .map_err(|e| ResolutionError::factory_failure(f.factory_name(), e))?;
                Ok(answer.map(|r| StateResult::new(r.object, Some(r.attributes))))
            }
            other => {
                warn!(factory = ?other, "Factory does not serve the bind direction, skipping");
                Ok(None)
            }
        }
    }
}

impl Default for StateResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{DirStateFactory, DirStateResult, StateFactory, StaticFactoryLoader};
    use crate::naming::Attribute;
    use serde_json::json;

    struct Stamp;

    impl StateFactory for Stamp {
        fn get_state_to_bind(
            &self,
            _value: &BoundValue,
            _name: &CompositeName,
            _context: Option<&ContextObject>,
            _environment: &Environment,
        ) -> anyhow::Result<Option<BoundValue>> {
            Ok(Some(BoundValue::raw(json!({"stamped": true}))))
        }
    }

    struct DirStamp;

    impl DirStateFactory for DirStamp {
        fn get_state_to_bind(
            &self,
            value: &BoundValue,
            _name: &CompositeName,
            _context: Option<&ContextObject>,
            _environment: &Environment,
            attributes: &Attributes,
        ) -> anyhow::Result<Option<DirStateResult>> {
            let mut updated = attributes.clone();
            updated.put(Attribute::single("stamped", "yes"));
            Ok(Some(DirStateResult {
                object: value.clone(),
                attributes: updated,
            }))
        }
    }

    fn isolated_resolver(loader: Arc<StaticFactoryLoader>) -> StateResolver {
        StateResolver::new()
            .with_builder_slot(Arc::new(BuilderSlot::new("state")))
            .with_loader(loader)
    }

    #[test]
    fn test_fallback_returns_value_and_attributes_unmodified() {
        let resolver = isolated_resolver(Arc::new(StaticFactoryLoader::new()));
        let attrs = Attributes::new().with(Attribute::single("cn", "x"));
        let value = BoundValue::raw("plain");

        let result = resolver
            .resolve(&value, &CompositeName::new(), None, &Environment::new(), Some(&attrs))
            .unwrap();
        assert_eq!(result.object(), &value);
        assert_eq!(result.attributes(), Some(&attrs));
    }

    #[test]
    fn test_plain_factory_pairs_original_attributes() {
        let loader = Arc::new(StaticFactoryLoader::new());
        loader.register("stub.StampFactory", || {
            FactoryInstance::State(Arc::new(Stamp))
        });
        let resolver = isolated_resolver(loader);

        let attrs = Attributes::new().with(Attribute::single("cn", "x"));
        let env = Environment::new().set("state.factories", "stub.StampFactory");
        let result = resolver
            .resolve(
                &BoundValue::raw("v"),
                &CompositeName::new(),
                None,
                &env,
                Some(&attrs),
            )
            .unwrap();

        assert_eq!(result.object(), &BoundValue::raw(json!({"stamped": true})));
        // attributes pass through untouched
        assert_eq!(result.attributes(), Some(&attrs));
    }

    #[test]
    fn test_directory_factory_returns_updated_attributes() {
        let loader = Arc::new(StaticFactoryLoader::new());
        loader.register("stub.DirStampFactory", || {
            FactoryInstance::DirState(Arc::new(DirStamp))
        });
        let resolver = isolated_resolver(loader);

        let attrs = Attributes::new().with(Attribute::single("cn", "x"));
        let env = Environment::new().set("state.factories", "stub.DirStampFactory");
        let result = resolver
            .resolve(
                &BoundValue::raw("v"),
                &CompositeName::new(),
                None,
                &env,
                Some(&attrs),
            )
            .unwrap();

        let updated = result.attributes().unwrap();
        assert!(updated.get("cn").is_some());
        assert_eq!(updated.get("stamped").unwrap().values, vec!["yes"]);
    }

    #[test]
    fn test_object_then_state_round_trip_is_identity() {
        let object_resolver = crate::resolver::ObjectResolver::new()
            .with_builder_slot(Arc::new(BuilderSlot::new("object")))
            .with_loader(Arc::new(StaticFactoryLoader::new()));
        let state_resolver = isolated_resolver(Arc::new(StaticFactoryLoader::new()));

        let value = BoundValue::raw(json!({"id": 42}));
        let name = CompositeName::parse("a/b");
        let env = Environment::new();

        let resolved = object_resolver
            .resolve(&value, &name, None, &env, None)
            .unwrap();
        let state = state_resolver
            .resolve(&resolved, &name, None, &env, None)
            .unwrap();

        assert_eq!(state.object(), &value);
        assert!(state.attributes().is_none());
    }
}
