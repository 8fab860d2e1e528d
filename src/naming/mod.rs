//! # Naming Data Model
//!
//! Caller-owned value objects that flow through the resolution chain:
//! composite names, references with typed addresses, the environment mapping,
//! attribute sets for the directory-aware variants, and the context traits
//! that resolution targets implement.
//!
//! All of these are owned by the calling stack frame for the duration of one
//! resolution call. The chain clones them defensively whenever it retains
//! anything beyond the call, so callers' originals are never mutated.

pub mod attributes;
pub mod context;
pub mod environment;
pub mod name;
pub mod pending;
pub mod reference;
pub mod resolve_result;
pub mod value;

pub use attributes::{Attribute, Attributes};
pub use context::{Context, ContextObject, DirContext};
pub use environment::Environment;
pub use name::CompositeName;
pub use pending::PendingOperation;
pub use reference::{RefAddr, Reference};
pub use resolve_result::ResolveResult;
pub use value::BoundValue;
