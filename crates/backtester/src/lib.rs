//! # AlphaLab Backtester Interface
//!
//! Backtesting engines differ wildly in their APIs. This crate defines the one
//! capability AlphaLab needs from any of them, `BacktestAdapter::run_alpha`, so
//! that engines can be plugged in without the rest of the workspace knowing
//! which one is in use.

use strategies::Alpha;

pub mod error;
pub mod result;
pub mod snapshot;

pub use error::BacktestError;
pub use result::BacktestResult;
pub use snapshot::SignalSnapshotAdapter;

/// The contract every backtesting engine integration implements.
///
/// `run_alpha` has no default body, so a type cannot become an adapter without
/// providing it. The `Send + Sync` bounds let one adapter serve several callers.
pub trait BacktestAdapter: Send + Sync {
    /// A short identifier for logs.
    fn name(&self) -> &str;

    /// Feeds the alpha's signals into the engine and packages the statistics it
    /// computes. The keys of the result are chosen by the implementation.
    fn run_alpha(&self, alpha: &Alpha) -> Result<BacktestResult, BacktestError>;
}

/// Runs every alpha through `adapter`, in order.
///
/// A failing alpha does not stop the batch; each outcome is returned next to
/// the name of the alpha that produced it.
pub fn run_batch<A>(
    adapter: &A,
    alphas: &[Alpha],
) -> Vec<(String, Result<BacktestResult, BacktestError>)>
where
    A: BacktestAdapter + ?Sized,
{
    tracing::info!(adapter = adapter.name(), alphas = alphas.len(), "Starting backtest batch.");

    let outcomes: Vec<_> = alphas
        .iter()
        .map(|alpha| {
            let outcome = adapter.run_alpha(alpha);
            match &outcome {
                Ok(result) => {
                    tracing::debug!(alpha = %alpha.name(), entries = result.len(), "Backtest complete.")
                }
                Err(e) => tracing::warn!(alpha = %alpha.name(), error = %e, "Backtest failed."),
            }
            (alpha.name().to_string(), outcome)
        })
        .collect();

    let failed = outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count();
    tracing::info!(adapter = adapter.name(), failed, "Backtest batch finished.");
    outcomes
}
