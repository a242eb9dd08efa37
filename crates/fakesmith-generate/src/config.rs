use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Locale used when none is requested and no override is configured.
pub const DEFAULT_LOCALE: &str = "en_US";
/// Time zone applied to generated moments when a formatter gets none.
pub const DEFAULT_TIMEZONE: &str = "UTC";
/// Retry ceiling shared by unique and valid proxies.
pub const DEFAULT_MAX_RETRIES: u32 = 10_000;

/// Options for a [`Generator`](crate::Generator) and the factory that builds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Second tier of the locale fallback chain.
    pub default_locale: String,
    /// IANA time zone for date formatters called without one.
    pub default_timezone: String,
    /// Seed for the pseudo-random source; OS entropy when absent.
    pub seed: Option<u64>,
    /// Attempts a unique or valid proxy makes before giving up.
    pub max_retries: u32,
    /// Maximum depth of formatters invoking other formatters.
    pub max_nesting: usize,
    /// Fixed "now" for date formatters, for reproducible runs.
    pub reference_time: Option<NaiveDateTime>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            seed: None,
            max_retries: DEFAULT_MAX_RETRIES,
            max_nesting: 32,
            reference_time: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, GenerationError> {
        let config: GeneratorConfig =
            toml::from_str(content).map_err(|err| GenerationError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, GenerationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, GenerationError> {
        toml::to_string_pretty(self).map_err(|err| GenerationError::Config(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_retries == 0 {
            return Err(GenerationError::Config(
                "max_retries must be >= 1".to_string(),
            ));
        }
        if self.max_nesting == 0 {
            return Err(GenerationError::Config(
                "max_nesting must be >= 1".to_string(),
            ));
        }
        self.timezone()?;
        Ok(())
    }

    pub fn timezone(&self) -> Result<Tz, GenerationError> {
        self.default_timezone.parse::<Tz>().map_err(|err| {
            GenerationError::Config(format!(
                "unknown time zone '{}': {err}",
                self.default_timezone
            ))
        })
    }

    /// The moment date formatters treat as "now".
    pub fn reference_now(&self) -> DateTime<Utc> {
        self.reference_time
            .map(|time| time.and_utc())
            .unwrap_or_else(Utc::now)
    }
}
