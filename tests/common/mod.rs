//! Shared stub factories and contexts for integration tests.

use parking_lot::Mutex;
use serde_json::json;
use spi_core::factory::{FactoryInstance, ObjectFactory, StaticFactoryLoader};
use spi_core::naming::{
    BoundValue, CompositeName, Context, ContextObject, Environment,
};
use spi_core::Result;
use std::sync::Arc;

/// Records every invocation, always declines to resolve
pub struct AlwaysNullFactory {
    log: Arc<Mutex<Vec<String>>>,
}

impl ObjectFactory for AlwaysNullFactory {
    fn get_object_instance(
        &self,
        _value: &BoundValue,
        _name: &CompositeName,
        _context: Option<&ContextObject>,
        _environment: &Environment,
    ) -> anyhow::Result<Option<BoundValue>> {
        self.log.lock().push("stub.AlwaysNullFactory".to_string());
        Ok(None)
    }

    fn factory_name(&self) -> &str {
        "stub.AlwaysNullFactory"
    }
}

/// Records every invocation, answers with a marker payload
pub struct EchoFactory {
    log: Arc<Mutex<Vec<String>>>,
}

impl ObjectFactory for EchoFactory {
    fn get_object_instance(
        &self,
        _value: &BoundValue,
        _name: &CompositeName,
        _context: Option<&ContextObject>,
        _environment: &Environment,
    ) -> anyhow::Result<Option<BoundValue>> {
        self.log.lock().push("stub.EchoFactory".to_string());
        Ok(Some(echo_answer()))
    }

    fn factory_name(&self) -> &str {
        "stub.EchoFactory"
    }
}

/// The payload `EchoFactory` answers with
pub fn echo_answer() -> BoundValue {
    BoundValue::raw(json!({"resolved_by": "stub.EchoFactory"}))
}

/// A context whose provider resource lists factory candidates
pub struct ProviderContext {
    resource: Environment,
}

impl ProviderContext {
    pub fn with_resource(resource: Environment) -> ContextObject {
        ContextObject::plain(Arc::new(Self { resource }))
    }
}

impl Context for ProviderContext {
    fn lookup(&self, name: &CompositeName) -> Result<BoundValue> {
        Err(spi_core::ResolutionError::NameNotBound {
            name: name.to_string(),
        })
    }

    fn bind(&self, _name: &CompositeName, _value: BoundValue) -> Result<()> {
        Ok(())
    }

    fn provider_resource(&self) -> Environment {
        self.resource.clone()
    }
}

/// A loader preloaded with the stub factories, plus the shared invocation log
pub fn stub_loader() -> (Arc<StaticFactoryLoader>, Arc<Mutex<Vec<String>>>) {
    let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let loader = Arc::new(StaticFactoryLoader::new());

    let null_log = Arc::clone(&log);
    loader.register("stub.AlwaysNullFactory", move || {
        FactoryInstance::Object(Arc::new(AlwaysNullFactory {
            log: Arc::clone(&null_log),
        }))
    });

    let echo_log = Arc::clone(&log);
    loader.register("stub.EchoFactory", move || {
        FactoryInstance::Object(Arc::new(EchoFactory {
            log: Arc::clone(&echo_log),
        }))
    });

    (loader, log)
}
