use core_types::CoreError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Universe must be provided")]
    MissingUniverse,

    #[error("Strategy '{0}' was built without a signal function")]
    MissingSignalFn(String),

    #[error("Strategy name must not be empty")]
    InvalidName,

    #[error("Signal function returned no signal for asset '{0}'")]
    MissingSignal(String),

    #[error("Signal function returned a signal for '{0}', which is not in the universe")]
    UnexpectedSignal(String),

    #[error("Invalid universe: {0}")]
    Core(#[from] CoreError),

    #[error("Failed to build signal frame: {0}")]
    Frame(#[from] PolarsError),
}

impl StrategyError {
    /// True for errors caused by how the strategy was set up rather than by
    /// what its signal function returned.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            StrategyError::MissingUniverse
                | StrategyError::MissingSignalFn(_)
                | StrategyError::InvalidName
                | StrategyError::Core(_)
        )
    }
}
