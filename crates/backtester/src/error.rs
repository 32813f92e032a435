use thiserror::Error;

#[derive(Error, Debug)]
pub enum BacktestError {
    #[error("Strategy execution error: {0}")]
    Strategy(#[from] strategies::StrategyError),

    #[error("Analytics calculation error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Failed to encode backtest result value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Backtest engine error: {0}")]
    Engine(String),

    #[error("Adapter cannot run this alpha: {0}")]
    Unsupported(String),
}
