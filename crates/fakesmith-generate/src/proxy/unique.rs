use std::collections::{HashMap, HashSet};

use tracing::warn;

use fakesmith_core::FakeValue;

use super::{Dispatch, check_max_retries};
use crate::config::DEFAULT_MAX_RETRIES;
use crate::errors::GenerationError;

/// Returns each value at most once per formatter name.
///
/// The ledger only grows; drop the proxy to start over. Like the engine it
/// wraps, it is not synchronized and needs a `Mutex` to be shared.
#[derive(Debug)]
pub struct UniqueGenerator<D> {
    inner: D,
    max_retries: u32,
    uniques: HashMap<String, HashSet<String>>,
}

impl<D: Dispatch> UniqueGenerator<D> {
    pub(crate) fn new(inner: D, max_retries: u32) -> Self {
        Self {
            inner,
            max_retries: max_retries.max(1),
            uniques: HashMap::new(),
        }
    }

    pub fn with_max_retries(inner: D, max_retries: u32) -> Result<Self, GenerationError> {
        Ok(Self::new(inner, check_max_retries(max_retries)?))
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Number of distinct values already handed out for `name`.
    pub fn seen(&self, name: &str) -> usize {
        self.uniques.get(name).map_or(0, HashSet::len)
    }
}

impl<D: Dispatch> From<D> for UniqueGenerator<D> {
    fn from(inner: D) -> Self {
        Self::new(inner, DEFAULT_MAX_RETRIES)
    }
}

impl<D: Dispatch> Dispatch for UniqueGenerator<D> {
    fn invoke(&mut self, name: &str, args: &[FakeValue]) -> Result<FakeValue, GenerationError> {
        let ledger = self.uniques.entry(name.to_string()).or_default();
        for _ in 0..self.max_retries {
            let value = self.inner.invoke(name, args)?;
            if ledger.insert(value.ledger_key()) {
                return Ok(value);
            }
        }

        warn!(
            formatter = name,
            max_retries = self.max_retries,
            seen = ledger.len(),
            "retry budget exhausted without a unique value"
        );
        Err(GenerationError::RetryBudgetExceeded {
            formatter: name.to_string(),
            max_retries: self.max_retries,
        })
    }
}
