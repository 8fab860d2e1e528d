#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # SPI Core
//!
//! Service-provider resolution core: a synchronous, pluggable factory
//! resolution chain for naming systems.
//!
//! ## Overview
//!
//! A caller holding an opaque bound value — possibly a [`naming::Reference`]
//! to a remote resource — asks the chain to materialize it. The chain
//! discovers and instantiates candidate factories from a fixed sequence of
//! sources and returns the first non-null answer, or the original value
//! unchanged. The reverse direction converts live objects back into bindable
//! state, and continuation resolution builds follow-on contexts when a name
//! crosses a naming system boundary.
//!
//! ## Architecture
//!
//! The object chain tries, in strict order with first-success-wins
//! semantics:
//!
//! 1. **Builder stage** — a process-wide, set-once factory builder
//! 2. **Reference stage** — factory metadata embedded in the reference,
//!    or the URL context factory naming convention over its addresses
//! 3. **Registry stage** — candidates listed under the `object.factories`
//!    environment key and the context's provider resource
//! 4. **Fallback** — the value itself, unchanged
//!
//! A chosen factory's own error always propagates; only unknown class
//! identifiers are skipped, and only where the stage permits it.
//!
//! ## Module Organization
//!
//! - [`naming`] - Names, references, environments, contexts, attributes
//! - [`factory`] - Factory shapes, builder slots, and the loader registry
//! - [`registry`] - Ordered factory-candidate discovery
//! - [`resolver`] - The object, state, continuation, and initial chains
//! - [`config`] - Environment loading from files and process variables
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use spi_core::factory::{register_global_factory, FactoryInstance, ObjectFactory};
//! use spi_core::naming::{BoundValue, CompositeName, ContextObject, Environment};
//! use spi_core::resolver::ObjectResolver;
//! use std::sync::Arc;
//!
//! struct EchoFactory;
//!
//! impl ObjectFactory for EchoFactory {
//!     fn get_object_instance(
//!         &self,
//!         value: &BoundValue,
//!         _name: &CompositeName,
//!         _context: Option<&ContextObject>,
//!         _environment: &Environment,
//!     ) -> anyhow::Result<Option<BoundValue>> {
//!         Ok(Some(value.clone()))
//!     }
//! }
//!
//! register_global_factory("demo.EchoFactory", || {
//!     FactoryInstance::Object(Arc::new(EchoFactory))
//! });
//!
//! let environment = Environment::new().set("object.factories", "demo.EchoFactory");
//! let resolver = ObjectResolver::new();
//! let value = BoundValue::raw("hello");
//! let resolved = resolver
//!     .resolve(&value, &CompositeName::new(), None, &environment, None)
//!     .unwrap();
//! assert_eq!(resolved, value);
//! ```
//!
//! ## Concurrency
//!
//! Every chain runs synchronously on the caller's thread. The only shared
//! mutable process-wide state is the set-once builder slots; concurrent
//! resolutions on different values need no coordination, and the global
//! loader registry supports concurrent reads.

pub mod config;
pub mod constants;
pub mod error;
pub mod factory;
pub mod logging;
pub mod naming;
pub mod registry;
pub mod resolver;

pub use config::EnvironmentLoader;
pub use error::{ResolutionError, Result};
pub use factory::{
    set_object_factory_builder, set_state_factory_builder, FactoryInstance, FactoryLoader,
    ObjectFactory, ObjectFactoryBuilder, StateFactory, StateFactoryBuilder,
};
pub use naming::{
    Attributes, BoundValue, CompositeName, Context, ContextObject, DirContext, Environment,
    PendingOperation, RefAddr, Reference, ResolveResult,
};
pub use resolver::{ContinuationResolver, InitialContextResolver, ObjectResolver, StateResolver};
