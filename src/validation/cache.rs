use super::{SchemaValidator, ValidatorEngine};
use crate::catalog::CatalogLookup;
use crate::Result;
use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Compiled parameter validators, one per versioned path.
///
/// Populated lazily. A first-use race compiles the same schema twice and keeps
/// one result; validators are pure over their schema so either is fine.
pub struct ParameterValidators {
    engine: Arc<dyn ValidatorEngine>,
    compiled: ArcSwap<HashMap<String, Arc<dyn SchemaValidator>>>,
}

impl ParameterValidators {
    pub fn new(engine: Arc<dyn ValidatorEngine>) -> Self {
        Self {
            engine,
            compiled: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// Validator for the parameter schema of `path`.
    pub fn get(&self, path: &str, lookup: &CatalogLookup) -> Result<Arc<dyn SchemaValidator>> {
        if let Some(validator) = self.compiled.load().get(path) {
            return Ok(Arc::clone(validator));
        }

        let version = lookup.resolve(path)?;
        let validator = self.engine.compile(&version.parameters)?;
        self.compiled.rcu(|current| {
            let mut next = HashMap::clone(current);
            next.entry(path.to_string())
                .or_insert_with(|| Arc::clone(&validator));
            next
        });
        debug!(path, "parameter validator compiled");

        Ok(validator)
    }

    /// Number of compiled validators held.
    pub fn len(&self) -> usize {
        self.compiled.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
