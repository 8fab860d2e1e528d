//! The opaque bound value
//!
//! What callers hand the chain and what factories produce: either a
//! [`Reference`] describing how to reconstruct an object, an opaque raw
//! payload, or an already-live context.

use super::context::ContextObject;
use super::reference::Reference;
use serde_json::Value;
use std::fmt;

/// Opaque value flowing through the resolution chain
#[derive(Clone)]
pub enum BoundValue {
    /// A serializable pointer to an external resource
    Reference(Reference),

    /// An opaque payload the chain passes through untouched
    Raw(Value),

    /// A live naming context
    Context(ContextObject),
}

impl BoundValue {
    /// A raw null payload
    pub fn null() -> Self {
        BoundValue::Raw(Value::Null)
    }

    pub fn raw(value: impl Into<Value>) -> Self {
        BoundValue::Raw(value.into())
    }

    pub fn reference(reference: Reference) -> Self {
        BoundValue::Reference(reference)
    }

    pub fn context(context: ContextObject) -> Self {
        BoundValue::Context(context)
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, BoundValue::Reference(_))
    }

    pub fn is_context(&self) -> bool {
        matches!(self, BoundValue::Context(_))
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            BoundValue::Reference(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            BoundValue::Raw(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_context(&self) -> Option<&ContextObject> {
        match self {
            BoundValue::Context(c) => Some(c),
            _ => None,
        }
    }

    /// The reference this value carries: either directly, or via a context
    /// that is itself reconstructable
    pub fn to_reference(&self) -> Option<Reference> {
        match self {
            BoundValue::Reference(r) => Some(r.clone()),
            BoundValue::Context(c) => c.as_reference(),
            BoundValue::Raw(_) => None,
        }
    }
}

impl fmt::Debug for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundValue::Reference(r) => f.debug_tuple("Reference").field(r).finish(),
            BoundValue::Raw(v) => f.debug_tuple("Raw").field(v).finish(),
            BoundValue::Context(c) => f.debug_tuple("Context").field(c).finish(),
        }
    }
}

impl PartialEq for BoundValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BoundValue::Reference(a), BoundValue::Reference(b)) => a == b,
            (BoundValue::Raw(a), BoundValue::Raw(b)) => a == b,
            (BoundValue::Context(a), BoundValue::Context(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}
