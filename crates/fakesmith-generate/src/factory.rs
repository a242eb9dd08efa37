use tracing::info;

use crate::config::GeneratorConfig;
use crate::engine::Generator;
use crate::errors::GenerationError;
use crate::registry::{ProviderRegistry, Resolution};

/// Families a factory registers, in registration order. Later families shadow
/// earlier ones for formatter names they share.
pub const DEFAULT_PROVIDERS: &[&str] = &[
    "Base",
    "Company",
    "DateTime",
    "Miscellaneous",
    "Payment",
    "Person",
    "PhoneNumber",
];

/// Builds generators for a locale from a provider registry.
#[derive(Debug, Clone)]
pub struct Factory {
    registry: ProviderRegistry,
    config: GeneratorConfig,
    families: Vec<String>,
}

impl Factory {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_registry(ProviderRegistry::builtin(), config)
    }

    pub fn with_registry(registry: ProviderRegistry, config: GeneratorConfig) -> Self {
        Self {
            registry,
            config,
            families: DEFAULT_PROVIDERS
                .iter()
                .map(|family| family.to_string())
                .collect(),
        }
    }

    /// Replaces the family list and therefore the shadowing order.
    pub fn with_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.families = families.into_iter().map(Into::into).collect();
        self
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// Resolves every configured family for `locale`, failing on the first
    /// family that has no implementation at any fallback tier.
    pub fn resolve_all(&self, locale: &str) -> Result<Vec<Resolution>, GenerationError> {
        self.families
            .iter()
            .map(|family| {
                self.registry
                    .resolve(family, locale, &self.config.default_locale)
            })
            .collect()
    }

    pub fn create(&self, locale: &str) -> Result<Generator, GenerationError> {
        let resolutions = self.resolve_all(locale)?;
        let mut generator = Generator::new(self.config.clone())?;
        for resolution in &resolutions {
            generator.add_provider(resolution.provider.clone());
        }
        info!(
            locale,
            providers = resolutions.len(),
            seeded = self.config.seed.is_some(),
            "generator created"
        );
        Ok(generator)
    }

    pub fn create_default(&self) -> Result<Generator, GenerationError> {
        self.create(&self.config.default_locale)
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
