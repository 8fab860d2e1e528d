//! URL scheme extraction and the URL context factory naming convention
//!
//! A URL-typed reference address names its handler implicitly: the scheme is
//! the substring up to the first colon, and the factory class identifier is
//! derived as `<prefix>.<scheme>.<scheme>URLContextFactory` for each
//! configured package prefix.

use crate::constants::{defaults, keys};
use crate::naming::{ContextObject, Environment};
use crate::registry::FactoryRegistry;

/// Extract the scheme of a URL-like string: the substring up to (excluding)
/// the first colon. Absent when the string begins with a quote character,
/// contains no colon, or the colon is the first character. Case preserved.
pub fn extract_scheme(url: &str) -> Option<&str> {
    if url.starts_with('"') || url.starts_with('\'') {
        return None;
    }
    match url.find(':') {
        Some(idx) if idx > 0 => Some(&url[..idx]),
        _ => None,
    }
}

/// The factory class identifier for `scheme` under `prefix`
pub fn url_factory_class_name(prefix: &str, scheme: &str) -> String {
    format!("{prefix}.{scheme}.{scheme}URLContextFactory")
}

/// Package prefixes to try, in order: caller environment, then the context's
/// provider resource, then the built-in default prefix
pub fn package_prefixes(environment: &Environment, context: Option<&ContextObject>) -> Vec<String> {
    let mut prefixes =
        FactoryRegistry::candidate_names(environment, context, keys::URL_PKG_PREFIXES);
    prefixes.push(defaults::URL_PKG_PREFIX.to_string());
    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scheme_extraction() {
        assert_eq!(extract_scheme("http://x"), Some("http"));
        assert_eq!(extract_scheme("'http://x'"), None);
        assert_eq!(extract_scheme("\"http://x\""), None);
        assert_eq!(extract_scheme("http"), None);
        assert_eq!(extract_scheme("HTTP2:"), Some("HTTP2"));
        assert_eq!(extract_scheme(":stray"), None);
        assert_eq!(extract_scheme(""), None);
    }

    #[test]
    fn test_factory_class_name_convention() {
        assert_eq!(
            url_factory_class_name("acme.url", "ldap"),
            "acme.url.ldap.ldapURLContextFactory"
        );
    }

    #[test]
    fn test_default_prefix_appended_last() {
        let env = Environment::new().set("url.package.prefixes", "acme.url,corp.url");
        let prefixes = package_prefixes(&env, None);
        assert_eq!(
            prefixes,
            vec!["acme.url", "corp.url", crate::constants::defaults::URL_PKG_PREFIX]
        );
    }

    proptest! {
        #[test]
        fn prop_extracted_scheme_never_contains_colon(url in "\\PC*") {
            if let Some(scheme) = extract_scheme(&url) {
                prop_assert!(!scheme.contains(':'));
                prop_assert!(url.starts_with(scheme));
            }
        }

        #[test]
        fn prop_quoted_strings_have_no_scheme(body in "\\PC*") {
            let quoted = format!("'{body}'");
            prop_assert_eq!(extract_scheme(&quoted), None);
        }
    }
}
