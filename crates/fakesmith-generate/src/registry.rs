use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use fakesmith_core::AGNOSTIC_LOCALE;

use crate::errors::GenerationError;
use crate::provider::Provider;

/// Builds a fresh provider instance for one (family, locale) slot.
pub type ProviderFactory = Arc<dyn Fn() -> Arc<dyn Provider> + Send + Sync>;

/// Which step of the locale fallback chain produced a provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionTier {
    Requested,
    DefaultLocale,
    LocaleAgnostic,
}

/// Outcome of resolving a provider family for a locale.
#[derive(Clone)]
pub struct Resolution {
    pub family: String,
    pub requested_locale: String,
    pub resolved_locale: String,
    pub tier: ResolutionTier,
    pub provider: Arc<dyn Provider>,
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("family", &self.family)
            .field("requested_locale", &self.requested_locale)
            .field("resolved_locale", &self.resolved_locale)
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}

/// Catalog of provider implementations keyed by family and locale.
///
/// Resolution works on whole providers: a family resolves to exactly one
/// implementation, never a per-formatter mix.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: BTreeMap<(String, String), ProviderFactory>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the bundled reference providers.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::providers::register(&mut registry);
        registry
    }

    /// Registers `factory` for `family` at `locale` (`""` for locale-agnostic),
    /// replacing any previous entry.
    pub fn register<F, P>(&mut self, family: &str, locale: &str, factory: F)
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: Provider + 'static,
    {
        let factory: ProviderFactory = Arc::new(move || Arc::new(factory()) as Arc<dyn Provider>);
        self.factories
            .insert((family.to_string(), locale.to_string()), factory);
    }

    pub fn contains(&self, family: &str, locale: &str) -> bool {
        self.factories
            .contains_key(&(family.to_string(), locale.to_string()))
    }

    /// Registered family names, sorted and de-duplicated.
    pub fn families(&self) -> Vec<String> {
        let mut families: Vec<String> = self
            .factories
            .keys()
            .map(|(family, _)| family.clone())
            .collect();
        families.dedup();
        families
    }

    /// Locales registered for `family`; the agnostic slot shows up as `""`.
    pub fn locales(&self, family: &str) -> Vec<String> {
        self.factories
            .keys()
            .filter(|(name, _)| name == family)
            .map(|(_, locale)| locale.clone())
            .collect()
    }

    /// Resolves `family` trying `locale`, then `default_locale`, then the
    /// locale-agnostic implementation.
    pub fn resolve(
        &self,
        family: &str,
        locale: &str,
        default_locale: &str,
    ) -> Result<Resolution, GenerationError> {
        let candidates = [
            (locale, ResolutionTier::Requested),
            (default_locale, ResolutionTier::DefaultLocale),
            (AGNOSTIC_LOCALE, ResolutionTier::LocaleAgnostic),
        ];

        for (candidate, tier) in candidates {
            let key = (family.to_string(), candidate.to_string());
            if let Some(factory) = self.factories.get(&key) {
                debug!(
                    family,
                    requested_locale = locale,
                    resolved_locale = candidate,
                    tier = ?tier,
                    "provider resolved"
                );
                return Ok(Resolution {
                    family: family.to_string(),
                    requested_locale: locale.to_string(),
                    resolved_locale: candidate.to_string(),
                    tier,
                    provider: factory(),
                });
            }
        }

        Err(GenerationError::UnresolvedProvider {
            family: family.to_string(),
            locale: locale.to_string(),
        })
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}
