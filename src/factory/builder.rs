//! Builder slots
//!
//! A builder, once installed, takes over factory selection for its direction
//! of the chain. Installation is set-once for the slot's lifetime: a second
//! install fails without mutating state, leaving the first builder in effect.
//!
//! Process-global slots back the conventional `set_*_factory_builder` entry
//! points; resolvers can also be constructed over private slots so callers
//! with narrower scopes (and tests) get the same semantics without touching
//! process-wide state.

use super::traits::FactoryInstance;
use crate::error::{ResolutionError, Result};
use crate::naming::{BoundValue, Environment};
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Produces exactly one object factory customized for a resolution call
pub trait ObjectFactoryBuilder: Send + Sync {
    fn create_object_factory(
        &self,
        value: &BoundValue,
        environment: &Environment,
    ) -> anyhow::Result<FactoryInstance>;
}

/// Produces exactly one state factory customized for a bind call
pub trait StateFactoryBuilder: Send + Sync {
    fn create_state_factory(
        &self,
        value: &BoundValue,
        environment: &Environment,
    ) -> anyhow::Result<FactoryInstance>;
}

/// Single-slot, lock-guarded holder with install-once semantics
pub struct BuilderSlot<B: ?Sized> {
    kind: &'static str,
    slot: Mutex<Option<Arc<B>>>,
}

impl<B: ?Sized> BuilderSlot<B> {
    pub const fn new(kind: &'static str) -> Self {
        Self {
            kind,
            slot: Mutex::new(None),
        }
    }

    /// Install `builder`. Fails permanently once a builder is in place.
    pub fn install(&self, builder: Arc<B>) -> Result<()> {
        let mut slot = self.slot.lock();
        if slot.is_some() {
            return Err(ResolutionError::BuilderAlreadyInstalled { kind: self.kind });
        }
        *slot = Some(builder);
        info!(kind = self.kind, "Installed factory builder");
        Ok(())
    }

    pub fn get(&self) -> Option<Arc<B>> {
        self.slot.lock().clone()
    }

    pub fn is_installed(&self) -> bool {
        self.slot.lock().is_some()
    }
}

static GLOBAL_OBJECT_BUILDER: OnceLock<Arc<BuilderSlot<dyn ObjectFactoryBuilder>>> =
    OnceLock::new();
static GLOBAL_STATE_BUILDER: OnceLock<Arc<BuilderSlot<dyn StateFactoryBuilder>>> = OnceLock::new();

/// The process-wide object factory builder slot
pub fn global_object_builder() -> Arc<BuilderSlot<dyn ObjectFactoryBuilder>> {
    GLOBAL_OBJECT_BUILDER
        .get_or_init(|| Arc::new(BuilderSlot::new("object")))
        .clone()
}

/// The process-wide state factory builder slot
pub fn global_state_builder() -> Arc<BuilderSlot<dyn StateFactoryBuilder>> {
    GLOBAL_STATE_BUILDER
        .get_or_init(|| Arc::new(BuilderSlot::new("state")))
        .clone()
}

/// Install the process-wide object factory builder; permanent once set
pub fn set_object_factory_builder(builder: Arc<dyn ObjectFactoryBuilder>) -> Result<()> {
    global_object_builder().install(builder)
}

/// Install the process-wide state factory builder; permanent once set
pub fn set_state_factory_builder(builder: Arc<dyn StateFactoryBuilder>) -> Result<()> {
    global_state_builder().install(builder)
}
