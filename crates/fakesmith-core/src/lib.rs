//! Core contracts and helpers for fakesmith.
//!
//! This crate defines the value model produced by formatters, the checksum
//! calculators consumed by identifier formatters, and the shared error type.

pub mod calculator;
pub mod error;
pub mod value;

pub use error::{Error, Result};
pub use value::FakeValue;

/// Locale tag used by locale-agnostic providers.
pub const AGNOSTIC_LOCALE: &str = "";
