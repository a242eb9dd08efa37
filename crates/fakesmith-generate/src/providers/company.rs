use fakesmith_core::FakeValue;

use super::pick;
use crate::provider::{FormatterTable, Provider};
use crate::registry::ProviderRegistry;

pub const FAMILY: &str = "Company";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(FAMILY, "", || CompanyProvider::new("", &AGNOSTIC));
    registry.register(FAMILY, "en_US", || CompanyProvider::new("en_US", &EN_US));
    registry.register(FAMILY, "pt_BR", || CompanyProvider::new("pt_BR", &PT_BR));
}

#[derive(Debug)]
pub struct CompanyData {
    pub formats: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub job_titles: &'static [&'static str],
}

static AGNOSTIC: CompanyData = CompanyData {
    formats: &["{{lastName}} {{companySuffix}}"],
    suffixes: &["Ltd"],
    job_titles: &["Job"],
};

static EN_US: CompanyData = CompanyData {
    formats: &[
        "{{lastName}} {{companySuffix}}",
        "{{lastName}}-{{lastName}}",
        "{{lastName}}, {{lastName}} and {{lastName}}",
    ],
    suffixes: &["Inc", "and Sons", "LLC", "Group", "PLC", "Ltd"],
    job_titles: &[
        "Accountant",
        "Data Analyst",
        "Nurse",
        "Software Engineer",
        "Teacher",
        "Technical Writer",
    ],
};

static PT_BR: CompanyData = CompanyData {
    formats: &["{{lastName}} {{companySuffix}}", "{{lastName}} e {{lastName}}"],
    suffixes: &["S.A.", "Ltda.", "e Filhos"],
    job_titles: &["Analista", "Contador", "Enfermeira", "Professor"],
};

/// Company names; relies on a `Person` provider for `lastName`.
#[derive(Debug, Clone, Copy)]
pub struct CompanyProvider {
    locale: &'static str,
    data: &'static CompanyData,
}

impl CompanyProvider {
    pub const fn new(locale: &'static str, data: &'static CompanyData) -> Self {
        Self { locale, data }
    }
}

impl Provider for CompanyProvider {
    fn family(&self) -> &str {
        FAMILY
    }

    fn locale(&self) -> &str {
        self.locale
    }

    fn formatters(&self) -> FormatterTable {
        let data = self.data;
        FormatterTable::new()
            .with("company", move |generator, _| {
                let format = pick(generator, data.formats, "company")?;
                Ok(FakeValue::Text(generator.parse(format)?))
            })
            .with("companySuffix", move |generator, _| {
                pick(generator, data.suffixes, "companySuffix").map(FakeValue::from)
            })
            .with("jobTitle", move |generator, _| {
                pick(generator, data.job_titles, "jobTitle").map(FakeValue::from)
            })
    }
}
