//! # System Constants
//!
//! Environment property keys and defaults that callers and providers agree on
//! externally. The keys are opaque strings; the chain only ever reads them.

/// Environment property keys consumed by the resolution chain
pub mod keys {
    /// Ordered, comma-separated object factory class identifiers
    pub const OBJECT_FACTORIES: &str = "object.factories";

    /// Ordered, comma-separated state factory class identifiers
    pub const STATE_FACTORIES: &str = "state.factories";

    /// Ordered, comma-separated package prefixes for URL context factories
    pub const URL_PKG_PREFIXES: &str = "url.package.prefixes";

    /// Class identifier of the initial context factory
    pub const INITIAL_CONTEXT_FACTORY: &str = "initial.context.factory";

    /// Well-known key under which a continuation records its pending operation
    pub const PENDING_OPERATION: &str = "continuation.pending.operation";
}

/// Built-in defaults applied when the environment supplies nothing
pub mod defaults {
    /// Package prefix always appended after caller-supplied URL prefixes
    pub const URL_PKG_PREFIX: &str = "spi_core.url";
}
