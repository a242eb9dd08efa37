//! Fake data generation engine for Fakesmith.
//!
//! A [`Factory`] resolves provider families for a locale and assembles a
//! [`Generator`], which dispatches formatter names, expands `{{placeholder}}`
//! templates, and hands out the unique, valid and optional proxies.

pub mod config;
pub mod engine;
pub mod errors;
pub mod factory;
pub mod params;
pub mod provider;
pub mod providers;
pub mod proxy;
pub mod registry;
pub mod template;

pub use config::GeneratorConfig;
pub use engine::{Generator, RegisteredProvider};
pub use errors::GenerationError;
pub use factory::{DEFAULT_PROVIDERS, Factory};
pub use fakesmith_core::FakeValue;
pub use params::Args;
pub use provider::{CustomProvider, FormatterFn, FormatterTable, Provider};
pub use proxy::{DefaultGenerator, Dispatch, Optional, UniqueGenerator, ValidGenerator, Validator};
pub use registry::{ProviderFactory, ProviderRegistry, Resolution, ResolutionTier};
