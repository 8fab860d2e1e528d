//! Object resolution
//!
//! Materializes an opaque bound value by trying, in strict order: an
//! installed builder, reference-embedded factory metadata, the URL factory
//! naming convention, and registry-listed candidates — returning the first
//! non-null answer or the original value unchanged.

use crate::constants::keys;
use crate::error::{ResolutionError, Result};
use crate::factory::{
    global_loader, global_object_builder, BuilderSlot, FactoryInstance, FactoryLoader,
    ObjectFactoryBuilder,
};
use crate::naming::{Attributes, BoundValue, CompositeName, ContextObject, Environment, Reference};
use crate::registry::FactoryRegistry;
use crate::resolver::url;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// The object-direction resolution chain
pub struct ObjectResolver {
    builder_slot: Arc<BuilderSlot<dyn ObjectFactoryBuilder>>,
    loader: Arc<dyn FactoryLoader>,
}

impl ObjectResolver {
    /// Resolver over the process-wide builder slot and global loader
    pub fn new() -> Self {
        Self {
            builder_slot: global_object_builder(),
            loader: global_loader(),
        }
    }

    /// Resolver over a private builder slot
    pub fn with_builder_slot(mut self, slot: Arc<BuilderSlot<dyn ObjectFactoryBuilder>>) -> Self {
        self.builder_slot = slot;
        self
    }

    /// Resolver over a specific loader
    pub fn with_loader(mut self, loader: Arc<dyn FactoryLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Resolve `value` into a usable object.
    ///
    /// Stages run in strict order and the first stage to produce a result is
    /// terminal. A chosen factory's own error propagates immediately; only
    /// unknown class identifiers are skipped, and only where the stage
    /// permits skipping.
    pub fn resolve(
        &self,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
        attributes: Option<&Attributes>,
    ) -> Result<BoundValue> {
        let resolution_id = Uuid::new_v4();
        debug!(
            resolution_id = %resolution_id,
            name = %name,
            value = ?value,
            "Resolving object"
        );

        // Builder stage: terminal once a builder is installed, even when its
        // factory answers null for this particular value.
        if let Some(builder) = self.builder_slot.get() {
            debug!(resolution_id = %resolution_id, stage = "builder", "Builder installed, delegating");
            let factory = builder
                .create_object_factory(value, environment)
                .map_err(|e| ResolutionError::factory_failure("object_factory_builder", e))?;
            let answer =
                self.invoke_object_factory(&factory, value, name, context, environment, attributes)?;
            return Ok(answer.unwrap_or_else(|| value.clone()));
        }

        // Reference stage.
        if let Some(reference) = value.to_reference() {
            if let Some(class_name) = reference.factory_class_name() {
                return self.resolve_via_reference_factory(
                    &reference,
                    class_name,
                    value,
                    name,
                    context,
                    environment,
                    attributes,
                    resolution_id,
                );
            }

            if let Some(answer) = self.resolve_via_url_addrs(
                &reference,
                value,
                name,
                context,
                environment,
                attributes,
                resolution_id,
            )? {
                return Ok(answer);
            }
        }

        // Registry stage: unknown or un-instantiable candidates are skipped.
        for class_name in FactoryRegistry::candidate_names(environment, context, keys::OBJECT_FACTORIES)
        {
            let factory = match self.loader.load(&class_name) {
                Ok(Some(factory)) => factory,
                Ok(None) => {
                    debug!(resolution_id = %resolution_id, class_name = %class_name, "Candidate not found, skipping");
                    continue;
                }
                Err(e) => {
                    warn!(resolution_id = %resolution_id, class_name = %class_name, error = %e, "Candidate failed to load, skipping");
                    continue;
                }
            };

            if let Some(answer) =
                self.invoke_object_factory(&factory, value, name, context, environment, attributes)?
            {
                info!(
                    resolution_id = %resolution_id,
                    class_name = %class_name,
                    stage = "registry",
                    "Object resolved"
                );
                return Ok(answer);
            }
        }

        debug!(resolution_id = %resolution_id, "No factory answered, returning value unchanged");
        Ok(value.clone())
    }

    /// Reference stage with an explicit factory identifier. Terminal: either
    /// the named factory answers, or the original value comes back unchanged.
    #[allow(clippy::too_many_arguments)]
    fn resolve_via_reference_factory(
        &self,
        reference: &Reference,
        class_name: &str,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
        attributes: Option<&Attributes>,
        resolution_id: Uuid,
    ) -> Result<BoundValue> {
        let mut factory = self.loader.load(class_name)?;
        if factory.is_none() {
            for location in reference.factory_location() {
                factory = self.loader.load_from(class_name, location)?;
                if factory.is_some() {
                    break;
                }
            }
        }

        match factory {
            Some(factory) => {
                debug!(
                    resolution_id = %resolution_id,
                    class_name = %class_name,
                    stage = "reference",
                    "Invoking reference factory"
                );
                let answer = self
                    .invoke_object_factory(&factory, value, name, context, environment, attributes)?;
                Ok(answer.unwrap_or_else(|| value.clone()))
            }
            None => {
                debug!(
                    resolution_id = %resolution_id,
                    class_name = %class_name,
                    "Reference factory not resolvable, returning value unchanged"
                );
                Ok(value.clone())
            }
        }
    }

    /// Reference stage without a factory identifier: scan URL-typed addresses
    /// and try the naming convention per package prefix. The first factory
    /// that instantiates for an address is invoked once; a null answer moves
    /// on to the next address.
    #[allow(clippy::too_many_arguments)]
    fn resolve_via_url_addrs(
        &self,
        reference: &Reference,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
        attributes: Option<&Attributes>,
        resolution_id: Uuid,
    ) -> Result<Option<BoundValue>> {
        let prefixes = url::package_prefixes(environment, context);

        for addr in reference.addrs().iter().filter(|a| a.is_url()) {
            let Some(scheme) = url::extract_scheme(addr.contents()) else {
                continue;
            };

            for prefix in &prefixes {
                let class_name = url::url_factory_class_name(prefix, scheme);
                let Some(factory) = self.loader.load(&class_name)? else {
                    continue;
                };

                debug!(
                    resolution_id = %resolution_id,
                    class_name = %class_name,
                    scheme = %scheme,
                    stage = "url",
                    "Invoking URL context factory"
                );
                let answer = self
                    .invoke_object_factory(&factory, value, name, context, environment, attributes)?;
                if answer.is_some() {
                    return Ok(answer);
                }
                // this address is spoken for; move on to the next one
                break;
            }
        }

        Ok(None)
    }

    /// Invoke one factory, preferring the attribute-accepting entry point
    /// when attributes were supplied and the factory supports them
    fn invoke_object_factory(
        &self,
        factory: &FactoryInstance,
        value: &BoundValue,
        name: &CompositeName,
        context: Option<&ContextObject>,
        environment: &Environment,
        attributes: Option<&Attributes>,
    ) -> Result<Option<BoundValue>> {
        match factory {
            FactoryInstance::Object(f) => f
                .get_object_instance(value, name, context, environment)
                .map_err(|e| ResolutionError::factory_failure(f.factory_name(), e)),
            FactoryInstance::DirObject(f) => {
                let empty = Attributes::new();
                f.get_object_instance(
                    value,
                    name,
                    context,
                    environment,
                    attributes.unwrap_or(&empty),
                )
                .map_err(|e| ResolutionError::factory_failure(f.factory_name(), e))
            }
            other => {
                warn!(factory = ?other, "Factory does not serve the object direction, skipping");
                Ok(None)
            }
        }
    }
}

impl Default for ObjectResolver {
    fn default() -> Self {
        Self::new()
    }
}
