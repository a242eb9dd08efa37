use std::fmt;

use tracing::warn;

use fakesmith_core::FakeValue;

use super::{Dispatch, check_max_retries};
use crate::errors::GenerationError;

/// Predicate a [`ValidGenerator`] applies to candidate values.
pub type Validator = Box<dyn Fn(&FakeValue) -> bool>;

/// Re-invokes the wrapped dispatcher until the validator accepts a value.
///
/// Without a validator every value is accepted on the first attempt.
pub struct ValidGenerator<D> {
    inner: D,
    validator: Option<Validator>,
    max_retries: u32,
}

impl<D: Dispatch> ValidGenerator<D> {
    pub(crate) fn new(inner: D, validator: Option<Validator>, max_retries: u32) -> Self {
        Self {
            inner,
            validator,
            max_retries: max_retries.max(1),
        }
    }

    pub fn with_max_retries(
        inner: D,
        validator: Option<Validator>,
        max_retries: u32,
    ) -> Result<Self, GenerationError> {
        Ok(Self::new(inner, validator, check_max_retries(max_retries)?))
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    fn accepts(&self, value: &FakeValue) -> bool {
        self.validator
            .as_ref()
            .is_none_or(|validator| validator(value))
    }
}

impl<D: Dispatch> Dispatch for ValidGenerator<D> {
    fn invoke(&mut self, name: &str, args: &[FakeValue]) -> Result<FakeValue, GenerationError> {
        for _ in 0..self.max_retries {
            let value = self.inner.invoke(name, args)?;
            if self.accepts(&value) {
                return Ok(value);
            }
        }

        warn!(
            formatter = name,
            max_retries = self.max_retries,
            "retry budget exhausted without a valid value"
        );
        Err(GenerationError::RetryBudgetExceeded {
            formatter: name.to_string(),
            max_retries: self.max_retries,
        })
    }
}

impl<D: fmt::Debug> fmt::Debug for ValidGenerator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidGenerator")
            .field("inner", &self.inner)
            .field("has_validator", &self.validator.is_some())
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
