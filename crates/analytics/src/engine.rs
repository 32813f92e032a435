use crate::error::AnalyticsError;
use crate::ic::{align_by_asset, information_coefficient};
use crate::ratios::sharpe_ratio;
use crate::report::SignalReport;
use configuration::DiagnosticsSettings;
use std::collections::HashMap;

/// A stateless calculator for signal diagnostics.
///
/// It only carries the configured annualisation settings; every call is a pure
/// function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsEngine {
    settings: DiagnosticsSettings,
}

impl AnalyticsEngine {
    pub fn new(settings: DiagnosticsSettings) -> Self {
        Self { settings }
    }

    /// Scores positionally aligned signals against realized returns.
    pub fn signal_report(
        &self,
        signals: &[f64],
        returns: &[f64],
    ) -> Result<SignalReport, AnalyticsError> {
        let ic = information_coefficient(signals, returns)?;

        let hits = signals
            .iter()
            .zip(returns)
            .filter(|(s, r)| s.signum() == r.signum() && **s != 0.0 && **r != 0.0)
            .count();

        let report = SignalReport {
            observations: signals.len(),
            information_coefficient: ic,
            hit_rate: hits as f64 / signals.len() as f64,
        };
        tracing::debug!(?report, "Signal report computed.");
        Ok(report)
    }

    /// Scores `(asset, signal)` rows against a return per asset.
    pub fn signal_report_by_asset(
        &self,
        signals: &[(String, f64)],
        returns: &HashMap<String, f64>,
    ) -> Result<SignalReport, AnalyticsError> {
        let (signals, returns) = align_by_asset(signals, returns)?;
        self.signal_report(&signals, &returns)
    }

    /// The annualised Sharpe ratio using the configured rate and periods.
    pub fn sharpe_ratio(&self, returns: &[f64]) -> f64 {
        sharpe_ratio(
            returns,
            self.settings.risk_free_rate,
            self.settings.periods_per_year,
        )
    }
}
