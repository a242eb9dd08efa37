//! Facades that sit in front of a [`Generator`] and shape what it returns.
//!
//! Every facade speaks the same [`Dispatch`] interface as the engine, so they
//! nest (`unique` over `valid` over the engine) and callers never branch on
//! which one they hold.

mod default;
mod optional;
mod unique;
mod valid;

pub use default::DefaultGenerator;
pub use optional::Optional;
pub use unique::UniqueGenerator;
pub use valid::{ValidGenerator, Validator};

use fakesmith_core::FakeValue;

use crate::engine::Generator;
use crate::errors::GenerationError;

/// Name-based formatter dispatch.
pub trait Dispatch {
    fn invoke(&mut self, name: &str, args: &[FakeValue]) -> Result<FakeValue, GenerationError>;

    /// Field-access form: the formatter called without arguments.
    fn get(&mut self, name: &str) -> Result<FakeValue, GenerationError> {
        self.invoke(name, &[])
    }
}

impl Dispatch for Generator {
    fn invoke(&mut self, name: &str, args: &[FakeValue]) -> Result<FakeValue, GenerationError> {
        Generator::invoke(self, name, args)
    }
}

impl<D: Dispatch + ?Sized> Dispatch for &mut D {
    fn invoke(&mut self, name: &str, args: &[FakeValue]) -> Result<FakeValue, GenerationError> {
        (**self).invoke(name, args)
    }
}

impl<D: Dispatch + ?Sized> Dispatch for Box<D> {
    fn invoke(&mut self, name: &str, args: &[FakeValue]) -> Result<FakeValue, GenerationError> {
        (**self).invoke(name, args)
    }
}

pub(crate) fn check_max_retries(max_retries: u32) -> Result<u32, GenerationError> {
    if max_retries == 0 {
        return Err(GenerationError::InvalidArgument(
            "max_retries must be >= 1".to_string(),
        ));
    }
    Ok(max_retries)
}
