use rand::Rng;

use fakesmith_core::FakeValue;

use crate::provider::{FormatterTable, Provider};
use crate::registry::ProviderRegistry;

pub const FAMILY: &str = "Miscellaneous";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(FAMILY, "", || MiscellaneousProvider);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MiscellaneousProvider;

impl Provider for MiscellaneousProvider {
    fn family(&self) -> &str {
        FAMILY
    }

    fn formatters(&self) -> FormatterTable {
        FormatterTable::new()
            .with("boolean", |generator, args| {
                let chance = args.get_u32(0)?.unwrap_or(50);
                if chance > 100 {
                    return Err(args.invalid(0, "a percentage between 0 and 100"));
                }
                Ok(FakeValue::Bool(generator.boolean(chance)))
            })
            .with("uuid", |generator, _| {
                let bytes: [u8; 16] = generator.rng().random();
                let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
                Ok(FakeValue::Uuid(uuid.to_string()))
            })
    }
}
