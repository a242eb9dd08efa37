use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use fakesmith_core::{AGNOSTIC_LOCALE, FakeValue};

use crate::engine::Generator;
use crate::errors::GenerationError;
use crate::params::Args;

/// Handler behind a formatter name.
///
/// Handlers receive the engine so they can draw randomness or expand nested
/// templates through [`Generator::parse`].
pub type FormatterFn =
    Arc<dyn Fn(&mut Generator, &Args<'_>) -> Result<FakeValue, GenerationError> + Send + Sync>;

/// Bundle of named formatters, optionally specialised for a locale.
pub trait Provider: Send + Sync {
    /// Provider family, e.g. `Person`.
    fn family(&self) -> &str;

    /// Locale tag; empty for locale-agnostic providers.
    fn locale(&self) -> &str {
        AGNOSTIC_LOCALE
    }

    fn formatters(&self) -> FormatterTable;
}

impl<P: Provider + ?Sized> Provider for Arc<P> {
    fn family(&self) -> &str {
        (**self).family()
    }

    fn locale(&self) -> &str {
        (**self).locale()
    }

    fn formatters(&self) -> FormatterTable {
        (**self).formatters()
    }
}

/// Explicit formatter name to handler mapping for one provider.
#[derive(Clone, Default)]
pub struct FormatterTable {
    formatters: BTreeMap<String, FormatterFn>,
}

impl FormatterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any previous handler.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&mut Generator, &Args<'_>) -> Result<FakeValue, GenerationError>
            + Send
            + Sync
            + 'static,
    {
        self.formatters.insert(name.into(), Arc::new(handler));
        self
    }

    pub fn with<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Generator, &Args<'_>) -> Result<FakeValue, GenerationError>
            + Send
            + Sync
            + 'static,
    {
        self.register(name, handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FormatterFn> {
        self.formatters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Formatter names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formatters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

impl fmt::Debug for FormatterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Provider assembled from closures, for test setups and ad-hoc overrides.
#[derive(Debug, Clone)]
pub struct CustomProvider {
    family: String,
    locale: String,
    formatters: FormatterTable,
}

impl CustomProvider {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            locale: AGNOSTIC_LOCALE.to_string(),
            formatters: FormatterTable::new(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn formatter<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Generator, &Args<'_>) -> Result<FakeValue, GenerationError>
            + Send
            + Sync
            + 'static,
    {
        self.formatters.register(name, handler);
        self
    }

    /// Formatter that always returns `value`.
    pub fn constant(self, name: impl Into<String>, value: impl Into<FakeValue>) -> Self {
        let value = value.into();
        self.formatter(name, move |_, _| Ok(value.clone()))
    }
}

impl Provider for CustomProvider {
    fn family(&self) -> &str {
        &self.family
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn formatters(&self) -> FormatterTable {
        self.formatters.clone()
    }
}
