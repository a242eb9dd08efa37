use fakesmith_core::FakeValue;
use fakesmith_core::calculator::tcno;

use super::pick;
use crate::engine::Generator;
use crate::errors::GenerationError;
use crate::provider::{FormatterTable, Provider};
use crate::registry::ProviderRegistry;

pub const FAMILY: &str = "Person";

pub const GENDER_MALE: &str = "male";
pub const GENDER_FEMALE: &str = "female";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(FAMILY, "", PersonProvider::agnostic);
    registry.register(FAMILY, "en_US", PersonProvider::en_us);
    registry.register(FAMILY, "pt_BR", PersonProvider::pt_br);
    registry.register(FAMILY, "tr_TR", PersonProvider::tr_tr);
}

/// Name tables for one locale.
#[derive(Debug)]
pub struct PersonData {
    pub male_name_formats: &'static [&'static str],
    pub female_name_formats: &'static [&'static str],
    pub first_name_male: &'static [&'static str],
    pub first_name_female: &'static [&'static str],
    pub last_name: &'static [&'static str],
    pub title_male: &'static [&'static str],
    pub title_female: &'static [&'static str],
}

static AGNOSTIC: PersonData = PersonData {
    male_name_formats: &["{{firstNameMale}} {{lastName}}"],
    female_name_formats: &["{{firstNameFemale}} {{lastName}}"],
    first_name_male: &["John"],
    first_name_female: &["Jane"],
    last_name: &["Doe"],
    title_male: &["Mr.", "Dr.", "Prof."],
    title_female: &["Mrs.", "Ms.", "Miss", "Dr.", "Prof."],
};

static EN_US: PersonData = PersonData {
    male_name_formats: &[
        "{{firstNameMale}} {{lastName}}",
        "{{titleMale}} {{firstNameMale}} {{lastName}}",
    ],
    female_name_formats: &[
        "{{firstNameFemale}} {{lastName}}",
        "{{titleFemale}} {{firstNameFemale}} {{lastName}}",
    ],
    first_name_male: &[
        "Aaron", "Brian", "Carl", "David", "Edward", "Frank", "George", "Henry", "Jack", "Liam",
    ],
    first_name_female: &[
        "Alice", "Betty", "Clara", "Diana", "Emma", "Grace", "Helen", "Iris", "Julia", "Olivia",
    ],
    last_name: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson", "Moore",
        "Taylor",
    ],
    title_male: &["Mr.", "Dr.", "Prof."],
    title_female: &["Mrs.", "Ms.", "Miss", "Dr.", "Prof."],
};

static PT_BR: PersonData = PersonData {
    male_name_formats: &[
        "{{firstNameMale}} {{lastName}}",
        "{{firstNameMale}} {{lastName}} {{lastName}}",
    ],
    female_name_formats: &[
        "{{firstNameFemale}} {{lastName}}",
        "{{firstNameFemale}} {{lastName}} {{lastName}}",
    ],
    first_name_male: &["Bruno", "Carlos", "Eduardo", "Gustavo", "Rafael", "Thiago"],
    first_name_female: &["Ana", "Daniela", "Fernanda", "Helena", "Juliana", "Larissa"],
    last_name: &[
        "Silva", "Santos", "Oliveira", "Souza", "Lima", "Costa", "Ribeiro", "Almeida",
    ],
    title_male: &["Sr.", "Dr."],
    title_female: &["Sra.", "Srta.", "Dra."],
};

static TR_TR: PersonData = PersonData {
    male_name_formats: &["{{firstNameMale}} {{lastName}}"],
    female_name_formats: &["{{firstNameFemale}} {{lastName}}"],
    first_name_male: &["Ahmet", "Mehmet", "Mustafa", "Emre", "Burak"],
    first_name_female: &["Ayşe", "Fatma", "Zeynep", "Elif", "Merve"],
    last_name: &["Yılmaz", "Kaya", "Demir", "Şahin", "Çelik"],
    title_male: &["Bay", "Dr.", "Prof."],
    title_female: &["Bayan", "Dr.", "Prof."],
};

/// Person names with gender-aware formats.
#[derive(Debug, Clone, Copy)]
pub struct PersonProvider {
    locale: &'static str,
    data: &'static PersonData,
    national_id: bool,
}

impl PersonProvider {
    pub const fn new(locale: &'static str, data: &'static PersonData) -> Self {
        Self {
            locale,
            data,
            national_id: false,
        }
    }

    pub fn agnostic() -> Self {
        Self::new("", &AGNOSTIC)
    }

    pub fn en_us() -> Self {
        Self::new("en_US", &EN_US)
    }

    pub fn pt_br() -> Self {
        Self::new("pt_BR", &PT_BR)
    }

    /// Turkish names plus the `tcNo` identity number formatter.
    pub fn tr_tr() -> Self {
        Self {
            national_id: true,
            ..Self::new("tr_TR", &TR_TR)
        }
    }
}

impl Provider for PersonProvider {
    fn family(&self) -> &str {
        FAMILY
    }

    fn locale(&self) -> &str {
        self.locale
    }

    fn formatters(&self) -> FormatterTable {
        let data = self.data;
        let mut table = FormatterTable::new()
            .with("name", move |generator, args| {
                let formats: Vec<&'static str> = match args.get_str(0) {
                    Some(GENDER_MALE) => data.male_name_formats.to_vec(),
                    Some(GENDER_FEMALE) => data.female_name_formats.to_vec(),
                    _ => data
                        .male_name_formats
                        .iter()
                        .chain(data.female_name_formats)
                        .copied()
                        .collect(),
                };
                let format = pick(generator, &formats, "name")?;
                Ok(FakeValue::Text(generator.parse(format)?))
            })
            .with("firstName", move |generator, args| {
                let format = match args.get_str(0) {
                    Some(GENDER_MALE) => "{{firstNameMale}}",
                    Some(GENDER_FEMALE) => "{{firstNameFemale}}",
                    _ => pick(
                        generator,
                        &["{{firstNameMale}}", "{{firstNameFemale}}"],
                        "firstName",
                    )?,
                };
                Ok(FakeValue::Text(generator.parse(format)?))
            })
            .with("firstNameMale", move |generator, _| {
                text(generator, data.first_name_male, "firstNameMale")
            })
            .with("firstNameFemale", move |generator, _| {
                text(generator, data.first_name_female, "firstNameFemale")
            })
            .with("lastName", move |generator, _| {
                text(generator, data.last_name, "lastName")
            })
            .with("title", move |generator, args| {
                let format = match args.get_str(0) {
                    Some(GENDER_MALE) => "{{titleMale}}",
                    Some(GENDER_FEMALE) => "{{titleFemale}}",
                    _ => pick(generator, &["{{titleMale}}", "{{titleFemale}}"], "title")?,
                };
                Ok(FakeValue::Text(generator.parse(format)?))
            })
            .with("titleMale", move |generator, _| {
                text(generator, data.title_male, "titleMale")
            })
            .with("titleFemale", move |generator, _| {
                text(generator, data.title_female, "titleFemale")
            });

        if self.national_id {
            table.register("tcNo", |generator, _| {
                let prefix = generator.numerify("%########");
                let checksum = tcno::checksum(&prefix)?;
                Ok(FakeValue::Text(format!("{prefix}{checksum}")))
            });
        }
        table
    }
}

fn text(
    generator: &mut Generator,
    values: &[&'static str],
    ctx: &str,
) -> Result<FakeValue, GenerationError> {
    pick(generator, values, ctx).map(FakeValue::from)
}
