use fakesmith_core::FakeValue;

use crate::provider::{FormatterTable, Provider};
use crate::registry::ProviderRegistry;

pub const FAMILY: &str = "Base";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(FAMILY, "", || BaseProvider);
}

/// Primitive random helpers every locale shares.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseProvider;

impl Provider for BaseProvider {
    fn family(&self) -> &str {
        FAMILY
    }

    fn formatters(&self) -> FormatterTable {
        FormatterTable::new()
            .with("randomDigit", |generator, _| {
                Ok(FakeValue::from(generator.random_digit()))
            })
            .with("randomDigitNotNull", |generator, _| {
                Ok(FakeValue::from(generator.random_digit_not_null()))
            })
            .with("numberBetween", |generator, args| {
                let min = args.get_i64(0)?.unwrap_or(0);
                let max = args.get_i64(1)?.unwrap_or(i64::from(i32::MAX));
                Ok(FakeValue::Int(generator.number_between(min, max)))
            })
            .with("numerify", |generator, args| {
                let pattern = args.get_string(0).unwrap_or_else(|| "###".to_string());
                Ok(FakeValue::Text(generator.numerify(&pattern)))
            })
            .with("lexify", |generator, args| {
                let pattern = args.get_string(0).unwrap_or_else(|| "????".to_string());
                Ok(FakeValue::Text(generator.lexify(&pattern)))
            })
            .with("bothify", |generator, args| {
                let pattern = args.get_string(0).unwrap_or_else(|| "## ??".to_string());
                Ok(FakeValue::Text(generator.bothify(&pattern)))
            })
    }
}
