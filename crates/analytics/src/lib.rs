//! # AlphaLab Analytics Engine
//!
//! This crate measures signal quality. It acts as the "unbiased judge" of the system.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of strategies or
//!   backtesting engines; it works on plain numeric series and keyed rows.
//! - **Stateless Calculation:** Every metric is a pure function. The `AnalyticsEngine`
//!   only carries configuration, which makes it highly reliable and easy to test.
//! - **Explicit Alignment:** `information_coefficient` pairs inputs by position;
//!   `information_coefficient_by_asset` pairs them by asset identifier.
//!
//! ## Public API
//!
//! - `information_coefficient`, `information_coefficient_by_asset`, `align_by_asset`.
//! - `sharpe_ratio`: annualised risk-adjusted return of a periodic series.
//! - `AnalyticsEngine` / `SignalReport`: configured diagnostics and their output.
//! - `AnalyticsError`: the validation errors that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod ic;
pub mod ratios;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use ic::{align_by_asset, information_coefficient, information_coefficient_by_asset};
pub use ratios::{daily_sharpe_ratio, sharpe_ratio};
pub use report::SignalReport;
