use std::fmt;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use fakesmith_core::FakeValue;

use crate::config::GeneratorConfig;
use crate::errors::GenerationError;
use crate::params::Args;
use crate::provider::{FormatterFn, FormatterTable, Provider};
use crate::proxy::{DefaultGenerator, Optional, UniqueGenerator, ValidGenerator};
use crate::template::placeholders;

/// A provider as registered with a [`Generator`].
#[derive(Debug, Clone)]
pub struct RegisteredProvider {
    pub family: String,
    pub locale: String,
    pub formatters: FormatterTable,
}

/// Dispatches formatter names to registered providers and expands templates.
///
/// Providers are kept in registration order. Lookups scan that list from the
/// most recently added provider backwards, so a later provider shadows earlier
/// ones for every formatter name it implements.
///
/// Not synchronized: share it across threads behind a `Mutex`.
pub struct Generator {
    config: GeneratorConfig,
    providers: Vec<RegisteredProvider>,
    rng: ChaCha8Rng,
    depth: usize,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            config,
            providers: Vec::new(),
            rng,
            depth: 0,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Appends `provider`; no de-duplication is performed.
    pub fn add_provider(&mut self, provider: impl Provider) {
        let formatters = provider.formatters();
        debug!(
            family = provider.family(),
            locale = provider.locale(),
            formatters = formatters.len(),
            position = self.providers.len(),
            "provider added"
        );
        self.providers.push(RegisteredProvider {
            family: provider.family().to_string(),
            locale: provider.locale().to_string(),
            formatters,
        });
    }

    /// Registered providers, oldest first.
    pub fn providers(&self) -> &[RegisteredProvider] {
        &self.providers
    }

    pub fn has_formatter(&self, name: &str) -> bool {
        self.provider_for(name).is_some()
    }

    /// The provider that currently serves `name`.
    pub fn provider_for(&self, name: &str) -> Option<&RegisteredProvider> {
        self.providers
            .iter()
            .rev()
            .find(|provider| provider.formatters.contains(name))
    }

    fn lookup(&self, name: &str) -> Option<FormatterFn> {
        self.provider_for(name)
            .and_then(|provider| provider.formatters.get(name))
            .cloned()
    }

    /// Calls formatter `name` with `args` and returns its result unchanged.
    pub fn invoke(&mut self, name: &str, args: &[FakeValue]) -> Result<FakeValue, GenerationError> {
        let Some(formatter) = self.lookup(name) else {
            debug!(formatter = name, "unknown formatter");
            return Err(GenerationError::UnknownFormatter(name.to_string()));
        };
        if self.depth >= self.config.max_nesting {
            warn!(
                formatter = name,
                max_nesting = self.config.max_nesting,
                "formatter nesting limit reached"
            );
            return Err(GenerationError::NestingTooDeep(name.to_string()));
        }

        self.depth += 1;
        let result = formatter(self, &Args::new(name, args));
        self.depth -= 1;
        result
    }

    /// Field-access form of [`invoke`](Self::invoke): no arguments.
    pub fn get(&mut self, name: &str) -> Result<FakeValue, GenerationError> {
        self.invoke(name, &[])
    }

    /// Replaces each `{{name}}` / `{{name:a,b}}` token with the formatter's
    /// output, in a single pass.
    ///
    /// Substituted text is not scanned again; a formatter that wants nested
    /// expansion calls `parse` itself.
    pub fn parse(&mut self, template: &str) -> Result<String, GenerationError> {
        let tokens = placeholders(template)?;
        let mut output = String::with_capacity(template.len());
        let mut cursor = 0;
        for token in tokens {
            output.push_str(&template[cursor..token.span.start]);
            let value = self.invoke(token.name, &token.args)?;
            output.push_str(&value.to_string());
            cursor = token.span.end;
        }
        output.push_str(&template[cursor..]);
        Ok(output)
    }

    /// Reseeds the pseudo-random source.
    pub fn seed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Proxy that answers `default` with probability `1 - weight`.
    pub fn optional(
        &mut self,
        weight: f64,
        default: impl Into<FakeValue>,
    ) -> Result<Optional<'_>, GenerationError> {
        Optional::new(self, weight, DefaultGenerator::new(default))
    }

    pub fn unique(&mut self) -> UniqueGenerator<&mut Generator> {
        let max_retries = self.config.max_retries;
        UniqueGenerator::new(self, max_retries)
    }

    pub fn unique_with(
        &mut self,
        max_retries: u32,
    ) -> Result<UniqueGenerator<&mut Generator>, GenerationError> {
        UniqueGenerator::with_max_retries(self, max_retries)
    }

    pub fn valid<F>(&mut self, predicate: F) -> ValidGenerator<&mut Generator>
    where
        F: Fn(&FakeValue) -> bool + 'static,
    {
        let max_retries = self.config.max_retries;
        ValidGenerator::new(self, Some(Box::new(predicate)), max_retries)
    }

    pub fn valid_with<F>(
        &mut self,
        predicate: F,
        max_retries: u32,
    ) -> Result<ValidGenerator<&mut Generator>, GenerationError>
    where
        F: Fn(&FakeValue) -> bool + 'static,
    {
        ValidGenerator::with_max_retries(self, Some(Box::new(predicate)), max_retries)
    }

    /// Uniform integer in `[min, max]`; the bounds may be given in any order.
    pub fn number_between(&mut self, min: i64, max: i64) -> i64 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.rng.random_range(low..=high)
    }

    pub fn random_digit(&mut self) -> u32 {
        self.rng.random_range(0..=9)
    }

    pub fn random_digit_not_null(&mut self) -> u32 {
        self.rng.random_range(1..=9)
    }

    pub fn random_letter(&mut self) -> char {
        char::from(self.rng.random_range(b'a'..=b'z'))
    }

    pub fn random_element<T: Clone>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.rng).cloned()
    }

    /// `true` with `chance_of_true` percent probability.
    pub fn boolean(&mut self, chance_of_true: u32) -> bool {
        self.rng.random_range(1..=100) <= chance_of_true
    }

    /// Replaces `#` with a digit and `%` with a non-zero digit.
    pub fn numerify(&mut self, pattern: &str) -> String {
        pattern
            .chars()
            .map(|ch| match ch {
                '#' => digit_char(self.random_digit()),
                '%' => digit_char(self.random_digit_not_null()),
                other => other,
            })
            .collect()
    }

    /// Replaces `?` with a lowercase ASCII letter.
    pub fn lexify(&mut self, pattern: &str) -> String {
        pattern
            .chars()
            .map(|ch| if ch == '?' { self.random_letter() } else { ch })
            .collect()
    }

    /// Numerifies and lexifies `pattern`; `*` becomes either a digit or a letter.
    pub fn bothify(&mut self, pattern: &str) -> String {
        let expanded: String = pattern
            .chars()
            .map(|ch| match ch {
                '*' if self.rng.random_bool(0.5) => '#',
                '*' => '?',
                other => other,
            })
            .collect();
        let numerified = self.numerify(&expanded);
        self.lexify(&numerified)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::with_valid_config(GeneratorConfig::default())
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .field("providers", &self.providers)
            .finish_non_exhaustive()
    }
}

fn digit_char(digit: u32) -> char {
    char::from_digit(digit, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Generator {
        let config = GeneratorConfig {
            seed: Some(7),
            ..GeneratorConfig::default()
        };
        Generator::new(config).expect("valid config")
    }

    #[test]
    fn numerify_replaces_only_markers() {
        let mut generator = seeded();
        let value = generator.numerify("ab-#%#");
        assert!(value.starts_with("ab-"));
        let digits: Vec<char> = value.chars().skip(3).collect();
        assert!(digits.iter().all(char::is_ascii_digit));
        assert_ne!(digits[1], '0');
    }

    #[test]
    fn lexify_emits_lowercase_letters() {
        let mut generator = seeded();
        let value = generator.lexify("??-?");
        assert_eq!(value.len(), 4);
        assert_eq!(value.chars().nth(2), Some('-'));
        assert!(
            value
                .chars()
                .filter(|ch| *ch != '-')
                .all(|ch| ch.is_ascii_lowercase())
        );
    }

    #[test]
    fn bothify_leaves_no_markers() {
        let mut generator = seeded();
        let value = generator.bothify("**##??");
        assert!(!value.contains(['*', '#', '?']));
        assert_eq!(value.len(), 6);
    }

    #[test]
    fn number_between_accepts_reversed_bounds() {
        let mut generator = seeded();
        for _ in 0..50 {
            let value = generator.number_between(10, 3);
            assert!((3..=10).contains(&value));
        }
    }

    #[test]
    fn boolean_extremes() {
        let mut generator = seeded();
        assert!((0..20).all(|_| generator.boolean(100)));
        assert!((0..20).all(|_| !generator.boolean(0)));
    }
}
