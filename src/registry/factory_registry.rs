//! Ordered factory-candidate lookup

use crate::naming::{ContextObject, Environment};
use tracing::debug;

/// Ordered lookup of factory class identifiers from the environment and the
/// context's provider resource
pub struct FactoryRegistry;

impl FactoryRegistry {
    /// Candidate class identifiers under `property_key`, highest precedence
    /// first: caller environment, then the context's provider resource.
    /// Never deduplicates; returns an empty list when no source exists.
    pub fn candidate_names(
        environment: &Environment,
        context: Option<&ContextObject>,
        property_key: &str,
    ) -> Vec<String> {
        let mut names = Vec::new();

        if let Some(list) = environment.get(property_key) {
            names.extend(Self::split_names(list));
        }

        if let Some(context) = context {
            let provider = context.provider_resource();
            if let Some(list) = provider.get(property_key) {
                names.extend(Self::split_names(list));
            }
        }

        debug!(
            property_key = %property_key,
            candidates = names.len(),
            "Enumerated factory candidates"
        );
        names
    }

    fn split_names(list: &str) -> impl Iterator<Item = String> + '_ {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}
