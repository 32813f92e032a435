use crate::BacktestAdapter;
use crate::error::BacktestError;
use crate::result::BacktestResult;
use analytics::AnalyticsEngine;
use std::collections::HashMap;
use strategies::Alpha;

/// A reference adapter that summarises one cross-section of signals.
///
/// It is not a trading simulation: it runs the alpha over its default universe
/// and reports descriptive statistics of the signals. When forward returns are
/// attached it also scores the signals against them.
#[derive(Debug, Clone, Default)]
pub struct SignalSnapshotAdapter {
    forward_returns: Option<HashMap<String, f64>>,
    engine: AnalyticsEngine,
}

impl SignalSnapshotAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores every snapshot against these realized returns, keyed by asset.
    pub fn with_forward_returns(mut self, returns: HashMap<String, f64>) -> Self {
        self.forward_returns = Some(returns);
        self
    }

    pub fn with_engine(mut self, engine: AnalyticsEngine) -> Self {
        self.engine = engine;
        self
    }
}

impl BacktestAdapter for SignalSnapshotAdapter {
    fn name(&self) -> &str {
        "signal-snapshot"
    }

    fn run_alpha(&self, alpha: &Alpha) -> Result<BacktestResult, BacktestError> {
        let table = alpha.run(None)?;
        let signals = table.signals();

        let n = signals.len() as f64;
        let mean = signals.iter().sum::<f64>() / n;
        let std_dev = (signals.len() >= 2).then(|| {
            let variance = signals.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        });

        let mut result = BacktestResult::new();
        result.insert("alpha", alpha.name())?;
        result.insert("universe_size", table.len())?;
        result.insert("signal_mean", mean)?;
        result.insert("signal_std", std_dev)?;
        result.insert("long_count", signals.iter().filter(|s| **s > 0.0).count())?;
        result.insert("short_count", signals.iter().filter(|s| **s < 0.0).count())?;

        if let Some(returns) = &self.forward_returns {
            let report = self.engine.signal_report_by_asset(&table.to_pairs(), returns)?;
            result.insert("observations", report.observations)?;
            result.insert("information_coefficient", report.information_coefficient)?;
            result.insert("hit_rate", report.hit_rate)?;
        }

        Ok(result)
    }
}
