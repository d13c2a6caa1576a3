//! Versioned path resolution.

use super::{Catalog, ProductVersion};
use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Catalog resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid endpoint: {endpoint}")]
    UnknownEndpoint { endpoint: String },

    #[error("Invalid version: {path}")]
    UnknownVersion { path: String },

    #[error("Duplicate endpoint in catalog: {endpoint}")]
    DuplicateEndpoint { endpoint: String },

    #[error("Invalid product {endpoint}: {reason}")]
    InvalidProduct { endpoint: String, reason: String },
}

/// Split `/v{N}{endpoint}` into a 0-based version index and the endpoint.
///
/// The index is `None` when the first segment is not `v` followed by digits,
/// or when `N` is zero. A path without a second `/` resolves to endpoint `/`.
pub fn parse_versioned_path(path: &str) -> (Option<usize>, &str) {
    let rest = path.get(1..).unwrap_or("");
    match rest.find('/') {
        Some(sep) => (version_index(&rest[..sep]), &rest[sep..]),
        None => (version_index(rest), "/"),
    }
}

fn version_index(segment: &str) -> Option<usize> {
    let digits = segment.strip_prefix('v')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok()?.checked_sub(1)
}

/// Memoizing resolver from versioned path to [`ProductVersion`].
///
/// Entries are only ever added. Two callers racing on the same new path both
/// resolve it and the map keeps whichever insert lands first; both hold the
/// same catalog `Arc`, so the outcome is identical.
pub struct CatalogLookup {
    catalog: Arc<Catalog>,
    resolved: ArcSwap<HashMap<String, Arc<ProductVersion>>>,
}

impl CatalogLookup {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            resolved: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Resolve a versioned path; repeated calls return the same `Arc`.
    pub fn resolve(&self, path: &str) -> Result<Arc<ProductVersion>, CatalogError> {
        if let Some(version) = self.resolved.load().get(path) {
            return Ok(Arc::clone(version));
        }

        let (index, endpoint) = parse_versioned_path(path);
        let product = self
            .catalog
            .product(endpoint)
            .ok_or_else(|| CatalogError::UnknownEndpoint {
                endpoint: endpoint.to_string(),
            })?;
        let version = index
            .and_then(|i| product.versions.get(i))
            .ok_or_else(|| CatalogError::UnknownVersion {
                path: path.to_string(),
            })?;

        self.resolved.rcu(|current| {
            let mut next = HashMap::clone(current);
            next.entry(path.to_string())
                .or_insert_with(|| Arc::clone(version));
            next
        });
        debug!(path, product = product.name.as_str(), "catalog path resolved");

        Ok(Arc::clone(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_and_endpoint() {
        assert_eq!(
            parse_versioned_path("/v1/message-parser"),
            (Some(0), "/message-parser")
        );
        assert_eq!(parse_versioned_path("/v12/a/b"), (Some(11), "/a/b"));
        assert_eq!(parse_versioned_path("/v0/x"), (None, "/x"));
        assert_eq!(parse_versioned_path("/version1/x"), (None, "/x"));
        assert_eq!(parse_versioned_path("/v1"), (Some(0), "/"));
        assert_eq!(parse_versioned_path(""), (None, "/"));
    }

    #[test]
    fn resolve_is_memoized_by_identity() {
        let lookup = CatalogLookup::new(Catalog::builtin());
        let first = lookup.resolve("/v1/message-parser").unwrap();
        let second = lookup.resolve("/v1/message-parser").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.tokens, 1);
    }

    #[test]
    fn unknown_endpoint_and_version_are_distinguished() {
        let lookup = CatalogLookup::new(Catalog::builtin());
        assert_eq!(
            lookup.resolve("/v1/nope").unwrap_err(),
            CatalogError::UnknownEndpoint {
                endpoint: "/nope".into()
            }
        );
        for path in ["/v2/message-parser", "/v0/message-parser", "/vx/message-parser"] {
            assert_eq!(
                lookup.resolve(path).unwrap_err(),
                CatalogError::UnknownVersion { path: path.into() }
            );
        }
    }
}
