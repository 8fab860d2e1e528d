//! # Registry Infrastructure
//!
//! Candidate discovery for the resolution chain: which factory class
//! identifiers should be tried, and in what order.
//!
//! ## Overview
//!
//! [`FactoryRegistry`] merges two sources under a single property key: the
//! caller-supplied environment (highest precedence, order preserved) and the
//! provider resource associated with the context being resolved against
//! (lower precedence, order preserved). Duplicates are deliberately kept —
//! factories are stateless per contract, so instantiating the same class
//! twice is harmless — and an absent source contributes nothing rather than
//! an error.

pub mod factory_registry;

pub use factory_registry::FactoryRegistry;
