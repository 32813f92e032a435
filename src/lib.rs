//! # AlphaLab
//!
//! Define alpha signal strategies, run them through pluggable backtesting
//! adapters and score them with signal-quality diagnostics.
//!
//! This crate is a facade over the workspace:
//!
//! - `strategies` holds `Alpha`, the strategy holder, and its `SignalTable` output.
//! - `backtester` defines the `BacktestAdapter` contract engines implement.
//! - `analytics` computes the information coefficient and related metrics.
//! - `configuration` loads settings and installs the tracing subscriber.
//!
//! The pieces share data shapes only; callers compose them by passing values
//! from one to the next.

pub use analytics;
pub use backtester;
pub use configuration;
pub use core_types;
pub use strategies;

pub mod prelude {
    pub use analytics::{
        AnalyticsEngine, AnalyticsError, SignalReport, information_coefficient,
        information_coefficient_by_asset, sharpe_ratio,
    };
    pub use backtester::{BacktestAdapter, BacktestError, BacktestResult, run_batch};
    pub use configuration::{Config, ConfigError, init_tracing, load_config};
    pub use strategies::{
        Alpha, AlphaMetadata, CoveragePolicy, SignalGenerator, SignalMap, SignalTable,
        StrategyError, Universe, create_alpha,
    };
}
