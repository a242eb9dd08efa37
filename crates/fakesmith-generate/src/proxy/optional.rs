use rand::Rng;

use fakesmith_core::FakeValue;

use super::{DefaultGenerator, Dispatch};
use crate::engine::Generator;
use crate::errors::GenerationError;

/// Models a field that is sometimes absent.
///
/// Each call delegates to the engine with probability `weight` and otherwise
/// answers from the wrapped [`DefaultGenerator`].
#[derive(Debug)]
pub struct Optional<'a> {
    generator: &'a mut Generator,
    weight: f64,
    fallback: DefaultGenerator,
}

impl<'a> Optional<'a> {
    pub(crate) fn new(
        generator: &'a mut Generator,
        weight: f64,
        fallback: DefaultGenerator,
    ) -> Result<Self, GenerationError> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(GenerationError::InvalidArgument(format!(
                "optional weight must be between 0 and 1, got {weight}"
            )));
        }
        Ok(Self {
            generator,
            weight,
            fallback,
        })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Dispatch for Optional<'_> {
    fn invoke(&mut self, name: &str, args: &[FakeValue]) -> Result<FakeValue, GenerationError> {
        if self.generator.rng().random_bool(self.weight) {
            self.generator.invoke(name, args)
        } else {
            self.fallback.invoke(name, args)
        }
    }
}
