use fakesmith_core::FakeValue;
use fakesmith_core::calculator::{iban, luhn};

use super::pick;
use crate::engine::Generator;
use crate::errors::GenerationError;
use crate::params::Args;
use crate::provider::{FormatterTable, Provider};
use crate::registry::ProviderRegistry;

pub const FAMILY: &str = "Payment";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(FAMILY, "", || PaymentProvider);
}

struct CardBrand {
    name: &'static str,
    prefixes: &'static [&'static str],
    length: usize,
}

const CARD_BRANDS: &[CardBrand] = &[
    CardBrand {
        name: "Visa",
        prefixes: &["4"],
        length: 16,
    },
    CardBrand {
        name: "MasterCard",
        prefixes: &["51", "52", "53", "54", "55", "2221", "2720"],
        length: 16,
    },
    CardBrand {
        name: "American Express",
        prefixes: &["34", "37"],
        length: 15,
    },
    CardBrand {
        name: "Discover Card",
        prefixes: &["6011"],
        length: 16,
    },
];

/// BBAN layouts per country: `#` digit, `?` letter.
const IBAN_FORMATS: &[(&str, &str)] = &[
    ("BE", "############"),
    ("DE", "##################"),
    ("ES", "####################"),
    ("FR", "#######################"),
    ("GB", "????##############"),
    ("NL", "????##########"),
    ("TR", "######################"),
];

const FALLBACK_BBAN: &str = "####################";

const DEFAULT_IBAN_COUNTRY: &str = "GB";

/// Card numbers and bank account numbers with valid check digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentProvider;

impl Provider for PaymentProvider {
    fn family(&self) -> &str {
        FAMILY
    }

    fn formatters(&self) -> FormatterTable {
        FormatterTable::new()
            .with("creditCardType", |generator, _| {
                let names: Vec<&'static str> = CARD_BRANDS.iter().map(|brand| brand.name).collect();
                pick(generator, &names, "creditCardType").map(FakeValue::from)
            })
            .with("creditCardNumber", |generator, args| {
                let brand = card_brand(generator, args)?;
                let prefix = pick(generator, brand.prefixes, "creditCardNumber")?;
                let body_len = brand.length - prefix.len() - 1;
                let body = generator.numerify(&"#".repeat(body_len));
                Ok(FakeValue::Text(luhn::generate(&format!("{prefix}{body}"))?))
            })
            .with("iban", |generator, args| {
                let country = args
                    .get_str(0)
                    .unwrap_or(DEFAULT_IBAN_COUNTRY)
                    .to_ascii_uppercase();
                if country.len() != 2 || !country.chars().all(|ch| ch.is_ascii_uppercase()) {
                    return Err(args.invalid(0, "a two-letter country code"));
                }

                let layout = IBAN_FORMATS
                    .iter()
                    .find(|(code, _)| *code == country)
                    .map_or(FALLBACK_BBAN, |(_, layout)| *layout);
                let digits = generator.numerify(layout);
                let bban = generator.lexify(&digits).to_ascii_uppercase();
                let checksum = iban::checksum(&format!("{country}00{bban}"))?;
                Ok(FakeValue::Text(format!("{country}{checksum}{bban}")))
            })
    }
}

fn card_brand(
    generator: &mut Generator,
    args: &Args<'_>,
) -> Result<&'static CardBrand, GenerationError> {
    match args.get_str(0) {
        Some(name) => CARD_BRANDS
            .iter()
            .find(|brand| brand.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| args.invalid(0, "a known card brand")),
        None => {
            let idx = generator.number_between(0, CARD_BRANDS.len() as i64 - 1);
            Ok(&CARD_BRANDS[idx as usize])
        }
    }
}
