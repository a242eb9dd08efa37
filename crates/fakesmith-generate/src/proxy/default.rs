use fakesmith_core::FakeValue;

use super::Dispatch;
use crate::errors::GenerationError;

/// Null object: every formatter call answers with the same default value.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultGenerator {
    default: FakeValue,
}

impl DefaultGenerator {
    pub fn new(default: impl Into<FakeValue>) -> Self {
        Self {
            default: default.into(),
        }
    }
}

impl Default for DefaultGenerator {
    fn default() -> Self {
        Self::new(FakeValue::Null)
    }
}

impl Dispatch for DefaultGenerator {
    fn invoke(&mut self, _name: &str, _args: &[FakeValue]) -> Result<FakeValue, GenerationError> {
        Ok(self.default.clone())
    }
}
