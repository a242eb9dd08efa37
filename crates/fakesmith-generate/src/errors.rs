use thiserror::Error;

/// Errors emitted by the generation engine and its proxies.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("unknown formatter '{0}'")]
    UnknownFormatter(String),
    #[error("unable to find provider '{family}' with locale '{locale}'")]
    UnresolvedProvider { family: String, locale: String },
    #[error(
        "maximum retries of {max_retries} reached without finding a suitable value for '{formatter}'"
    )]
    RetryBudgetExceeded { formatter: String, max_retries: u32 },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("formatter '{0}' exceeded the nesting limit")]
    NestingTooDeep(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Core(#[from] fakesmith_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
