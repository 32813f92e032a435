use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("signals and returns must have the same length ({signals} vs {returns})")]
    LengthMismatch { signals: usize, returns: usize },

    #[error("Not enough data to perform calculation: {0} is empty")]
    EmptyInput(&'static str),

    #[error("Correlation is undefined: {0} has zero variance")]
    ZeroVariance(&'static str),

    #[error("{series} contains a non-finite value at position {index}")]
    NonFiniteValue { series: &'static str, index: usize },

    #[error("No realized return for asset '{0}'")]
    MissingReturn(String),
}
