//! # Factory Infrastructure
//!
//! The pluggable half of the resolution chain: the factory shapes resolvers
//! invoke, the set-once builder slots that can take over factory selection
//! process-wide, and the loader capability that turns class identifiers into
//! constructible factory instances.
//!
//! ## Architecture
//!
//! ```text
//! Factory Infrastructure
//! ├── traits         (ObjectFactory / StateFactory + directory-aware shapes)
//! ├── builder        (BuilderSlot: lock-guarded, install-once holders)
//! └── loader         (FactoryLoader trait + StaticFactoryLoader registry)
//! ```
//!
//! Factories are stateless and constructed per call; nothing here caches a
//! factory instance across resolutions.

pub mod builder;
pub mod loader;
pub mod traits;

pub use builder::{
    global_object_builder, global_state_builder, set_object_factory_builder,
    set_state_factory_builder, BuilderSlot, ObjectFactoryBuilder, StateFactoryBuilder,
};
pub use loader::{
    global_loader, register_global_factory, FactoryLoader, LayeredLoader, LoaderStats,
    StaticFactoryLoader,
};
pub use traits::{
    DirObjectFactory, DirStateFactory, DirStateResult, FactoryInstance, InitialContextFactory,
    ObjectFactory, StateFactory,
};
