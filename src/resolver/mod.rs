//! # Resolution Chain
//!
//! The decision core of the crate: prioritized, first-success-wins policy
//! chains over pluggable factories.
//!
//! ## Architecture
//!
//! ```text
//! Resolution Chain
//! ├── object        (builder → reference → URL convention → registry → identity)
//! ├── state         (mirror chain for the bind direction)
//! ├── continuation  (follow-on contexts at naming system boundaries)
//! ├── initial       (initial context creation)
//! └── url           (scheme extraction + URL factory naming convention)
//! ```
//!
//! Every chain runs synchronously on the caller's thread. A factory's own
//! error stops the chain; an unknown class identifier is skipped where the
//! stage permits it.

pub mod continuation;
pub mod initial;
pub mod object;
pub mod state;
pub mod url;

pub use continuation::ContinuationResolver;
pub use initial::{
    set_initial_context_factory_builder, InitialContextFactoryBuilder, InitialContextResolver,
};
pub use object::ObjectResolver;
pub use state::{StateResolver, StateResult};
pub use url::{extract_scheme, url_factory_class_name};
