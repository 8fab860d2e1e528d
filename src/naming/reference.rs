//! References and typed addresses
//!
//! A `Reference` is a serializable description of how to reconstruct an
//! object, independent of the object itself. It optionally names the factory
//! able to materialize it, optionally lists retrieval locations for that
//! factory, and carries an ordered list of typed address entries.

use serde::{Deserialize, Serialize};

/// Address type used by the URL stage of object resolution
pub const URL_ADDR_TYPE: &str = "URL";

/// A typed key/value address entry within a reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefAddr {
    addr_type: String,
    contents: String,
}

impl RefAddr {
    pub fn new(addr_type: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            addr_type: addr_type.into(),
            contents: contents.into(),
        }
    }

    /// Convenience constructor for `"URL"`-typed addresses
    pub fn url(contents: impl Into<String>) -> Self {
        Self::new(URL_ADDR_TYPE, contents)
    }

    pub fn addr_type(&self) -> &str {
        &self.addr_type
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn is_url(&self) -> bool {
        self.addr_type.eq_ignore_ascii_case(URL_ADDR_TYPE)
    }
}

/// A named pointer to an external resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Class identifier of the object this reference describes
    class_name: String,

    /// Factory able to materialize the referenced object, when known
    factory_class_name: Option<String>,

    /// Ordered retrieval addresses for loading the factory itself
    factory_location: Vec<String>,

    /// Ordered address entries describing the resource
    addrs: Vec<RefAddr>,
}

impl Reference {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            factory_class_name: None,
            factory_location: Vec::new(),
            addrs: Vec::new(),
        }
    }

    /// Attach an explicit factory class identifier
    pub fn with_factory(mut self, factory_class_name: impl Into<String>) -> Self {
        self.factory_class_name = Some(factory_class_name.into());
        self
    }

    /// Add a retrieval location for the factory
    pub fn with_factory_location(mut self, location: impl Into<String>) -> Self {
        self.factory_location.push(location.into());
        self
    }

    /// Append an address entry, preserving insertion order
    pub fn with_addr(mut self, addr: RefAddr) -> Self {
        self.addrs.push(addr);
        self
    }

    pub fn add_addr(&mut self, addr: RefAddr) {
        self.addrs.push(addr);
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn factory_class_name(&self) -> Option<&str> {
        self.factory_class_name.as_deref()
    }

    pub fn factory_location(&self) -> &[String] {
        &self.factory_location
    }

    pub fn addrs(&self) -> &[RefAddr] {
        &self.addrs
    }

    /// First address entry of the given type, matched case-insensitively
    pub fn get_addr(&self, addr_type: &str) -> Option<&RefAddr> {
        self.addrs
            .iter()
            .find(|a| a.addr_type.eq_ignore_ascii_case(addr_type))
    }
}
