//! Factory loading
//!
//! The chain never reflects on class names. [`FactoryLoader`] is the
//! pluggable capability that turns a class identifier into a constructible
//! factory instance: `Ok(None)` means the identifier is unknown (a skippable
//! condition inside a stage), while `Err` is fatal and propagates. The
//! distinction is the contract, not an implementation detail — reference and
//! URL stages skip unknown classes but surface real loader failures.
//!
//! [`StaticFactoryLoader`] is the in-process substitute for reflective class
//! loading: a concurrent registry of constructor closures keyed by class
//! identifier. A fresh factory is constructed per lookup; instances are never
//! cached across resolutions.

use super::traits::FactoryInstance;
use crate::error::Result;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Constructor closure producing a fresh factory instance per call
pub type FactoryCtor = Arc<dyn Fn() -> FactoryInstance + Send + Sync>;

/// Turns class identifiers into constructible factory instances
pub trait FactoryLoader: Send + Sync {
    /// Construct the factory registered under `class_name`.
    /// `Ok(None)` means not found; `Err` means loading itself failed.
    fn load(&self, class_name: &str) -> Result<Option<FactoryInstance>>;

    /// Construct a factory from an explicit retrieval location, used for
    /// references that carry a factory location. Defaults to not found.
    fn load_from(&self, _class_name: &str, _location: &str) -> Result<Option<FactoryInstance>> {
        Ok(None)
    }
}

struct LoaderEntry {
    ctor: FactoryCtor,
    registered_at: DateTime<Utc>,
}

/// Concurrent constructor registry keyed by class identifier
#[derive(Default)]
pub struct StaticFactoryLoader {
    ctors: DashMap<String, LoaderEntry>,
}

impl StaticFactoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor under `class_name`, replacing any previous one
    pub fn register<F>(&self, class_name: impl Into<String>, ctor: F)
    where
        F: Fn() -> FactoryInstance + Send + Sync + 'static,
    {
        let class_name = class_name.into();
        self.ctors.insert(
            class_name.clone(),
            LoaderEntry {
                ctor: Arc::new(ctor),
                registered_at: Utc::now(),
            },
        );
        debug!(class_name = %class_name, "Registered factory constructor");
    }

    pub fn unregister(&self, class_name: &str) -> bool {
        self.ctors.remove(class_name).is_some()
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.ctors.contains_key(class_name)
    }

    /// Registry statistics for diagnostics
    pub fn stats(&self) -> LoaderStats {
        let mut names: Vec<String> = self.ctors.iter().map(|e| e.key().clone()).collect();
        names.sort();
        LoaderStats {
            registered_factories: names.len(),
            factory_names: names,
        }
    }

    pub fn oldest_registration(&self) -> Option<DateTime<Utc>> {
        self.ctors.iter().map(|e| e.value().registered_at).min()
    }
}

impl FactoryLoader for StaticFactoryLoader {
    fn load(&self, class_name: &str) -> Result<Option<FactoryInstance>> {
        Ok(self.ctors.get(class_name).map(|entry| (entry.ctor)()))
    }
}

/// Ordered loader layers: a call-scoped loader first, the process-global one
/// as fallback. First hit wins; loader errors propagate from any layer.
pub struct LayeredLoader {
    layers: Vec<Arc<dyn FactoryLoader>>,
}

impl LayeredLoader {
    pub fn new(layers: Vec<Arc<dyn FactoryLoader>>) -> Self {
        Self { layers }
    }

    /// A call-scoped loader layered over the process-global registry
    pub fn over_global(scoped: Arc<dyn FactoryLoader>) -> Self {
        Self {
            layers: vec![scoped, global_loader()],
        }
    }
}

impl FactoryLoader for LayeredLoader {
    fn load(&self, class_name: &str) -> Result<Option<FactoryInstance>> {
        for layer in &self.layers {
            if let Some(factory) = layer.load(class_name)? {
                return Ok(Some(factory));
            }
        }
        Ok(None)
    }

    fn load_from(&self, class_name: &str, location: &str) -> Result<Option<FactoryInstance>> {
        for layer in &self.layers {
            if let Some(factory) = layer.load_from(class_name, location)? {
                return Ok(Some(factory));
            }
        }
        Ok(None)
    }
}

/// Statistics about a constructor registry
#[derive(Debug, Clone)]
pub struct LoaderStats {
    pub registered_factories: usize,
    pub factory_names: Vec<String>,
}

static GLOBAL_LOADER: OnceLock<Arc<StaticFactoryLoader>> = OnceLock::new();

/// The process-global constructor registry
pub fn global_loader() -> Arc<StaticFactoryLoader> {
    GLOBAL_LOADER
        .get_or_init(|| {
            info!("Initializing global factory loader");
            Arc::new(StaticFactoryLoader::new())
        })
        .clone()
}

/// Register a constructor in the process-global registry
pub fn register_global_factory<F>(class_name: impl Into<String>, ctor: F)
where
    F: Fn() -> FactoryInstance + Send + Sync + 'static,
{
    global_loader().register(class_name, ctor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::traits::ObjectFactory;
    use crate::naming::{BoundValue, CompositeName, ContextObject, Environment};

    struct Marker(&'static str);

    impl ObjectFactory for Marker {
        fn get_object_instance(
            &self,
            _value: &BoundValue,
            _name: &CompositeName,
            _context: Option<&ContextObject>,
            _environment: &Environment,
        ) -> anyhow::Result<Option<BoundValue>> {
            Ok(Some(BoundValue::raw(self.0)))
        }

        fn factory_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_register_and_load() {
        let loader = StaticFactoryLoader::new();
        loader.register("test.Marker", || {
            FactoryInstance::Object(Arc::new(Marker("marker")))
        });

        let loaded = loader.load("test.Marker").unwrap();
        assert!(loaded.is_some());
        assert!(loader.load("test.Unknown").unwrap().is_none());
    }

    #[test]
    fn test_instances_are_fresh_per_load() {
        let loader = StaticFactoryLoader::new();
        loader.register("test.Marker", || {
            FactoryInstance::Object(Arc::new(Marker("marker")))
        });

        let first = loader.load("test.Marker").unwrap().unwrap();
        let second = loader.load("test.Marker").unwrap().unwrap();
        match (first, second) {
            (FactoryInstance::Object(a), FactoryInstance::Object(b)) => {
                assert!(!Arc::ptr_eq(&a, &b));
            }
            _ => panic!("expected object factories"),
        }
    }

    #[test]
    fn test_layered_loader_prefers_scoped_layer() {
        let scoped = Arc::new(StaticFactoryLoader::new());
        let fallback = Arc::new(StaticFactoryLoader::new());
        scoped.register("test.Marker", || {
            FactoryInstance::Object(Arc::new(Marker("scoped")))
        });
        fallback.register("test.Marker", || {
            FactoryInstance::Object(Arc::new(Marker("fallback")))
        });
        fallback.register("test.Other", || {
            FactoryInstance::Object(Arc::new(Marker("other")))
        });

        let layered = LayeredLoader::new(vec![scoped, fallback]);
        let hit = layered.load("test.Marker").unwrap().unwrap();
        assert_eq!(hit.factory_name(), "scoped");
        let fallthrough = layered.load("test.Other").unwrap().unwrap();
        assert_eq!(fallthrough.factory_name(), "other");
    }

    #[test]
    fn test_stats() {
        let loader = StaticFactoryLoader::new();
        assert_eq!(loader.stats().registered_factories, 0);

        loader.register("b.Factory", || {
            FactoryInstance::Object(Arc::new(Marker("b")))
        });
        loader.register("a.Factory", || {
            FactoryInstance::Object(Arc::new(Marker("a")))
        });

        let stats = loader.stats();
        assert_eq!(stats.registered_factories, 2);
        assert_eq!(stats.factory_names, vec!["a.Factory", "b.Factory"]);
        assert!(loader.oldest_registration().is_some());
    }
}
