//! Small reference providers registered by [`ProviderRegistry::builtin`].
//!
//! Their data tables are intentionally short; real locale packs plug in
//! through the same [`Provider`](crate::Provider) contract.

pub mod base;
pub mod company;
pub mod date_time;
pub mod miscellaneous;
pub mod payment;
pub mod person;
pub mod phone_number;

use crate::engine::Generator;
use crate::errors::GenerationError;
use crate::registry::ProviderRegistry;

pub fn register(registry: &mut ProviderRegistry) {
    base::register(registry);
    company::register(registry);
    date_time::register(registry);
    miscellaneous::register(registry);
    payment::register(registry);
    person::register(registry);
    phone_number::register(registry);
}

/// Picks one entry of a static table.
pub(crate) fn pick(
    generator: &mut Generator,
    values: &[&'static str],
    ctx: &str,
) -> Result<&'static str, GenerationError> {
    generator
        .random_element(values)
        .ok_or_else(|| GenerationError::InvalidArgument(format!("{ctx}: nothing to choose from")))
}
