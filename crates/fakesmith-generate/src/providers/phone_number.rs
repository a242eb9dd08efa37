use fakesmith_core::FakeValue;
use fakesmith_core::calculator::luhn;

use super::pick;
use crate::provider::{FormatterTable, Provider};
use crate::registry::ProviderRegistry;

pub const FAMILY: &str = "PhoneNumber";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(FAMILY, "", || PhoneNumberProvider::new("", AGNOSTIC_FORMATS));
    registry.register(FAMILY, "en_US", || {
        PhoneNumberProvider::new("en_US", EN_US_FORMATS)
    });
    registry.register(FAMILY, "pt_BR", || {
        PhoneNumberProvider::new("pt_BR", PT_BR_FORMATS)
    });
}

const AGNOSTIC_FORMATS: &[&str] = &["###-###-###"];
const EN_US_FORMATS: &[&str] = &["###-###-####", "(###) ###-####", "+1-###-###-####"];
const PT_BR_FORMATS: &[&str] = &["(##) 9####-####", "(##) ####-####"];

/// Phone numbers and IMEIs.
#[derive(Debug, Clone, Copy)]
pub struct PhoneNumberProvider {
    locale: &'static str,
    formats: &'static [&'static str],
}

impl PhoneNumberProvider {
    pub const fn new(locale: &'static str, formats: &'static [&'static str]) -> Self {
        Self { locale, formats }
    }
}

impl Provider for PhoneNumberProvider {
    fn family(&self) -> &str {
        FAMILY
    }

    fn locale(&self) -> &str {
        self.locale
    }

    fn formatters(&self) -> FormatterTable {
        let formats = self.formats;
        FormatterTable::new()
            .with("phoneNumber", move |generator, _| {
                let format = pick(generator, formats, "phoneNumber")?;
                let expanded = generator.parse(format)?;
                Ok(FakeValue::Text(generator.numerify(&expanded)))
            })
            .with("e164PhoneNumber", |generator, _| {
                Ok(FakeValue::Text(generator.numerify("+%############")))
            })
            .with("imei", |generator, _| {
                let body = generator.numerify("##############");
                Ok(FakeValue::Text(luhn::generate(&body)?))
            })
    }
}
