use crate::error::StrategyError;
use core_types::{CoveragePolicy, SignalMap, Universe};
use polars::prelude::*;

/// Name of the index column of an exported signal frame.
pub const ASSET_COLUMN: &str = "asset";
/// Name of the single value column of a signal table.
pub const SIGNAL_COLUMN: &str = "signal";

/// The result of running a strategy: one signal per asset, in universe order.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalTable {
    assets: Vec<String>,
    signals: Vec<f64>,
}

impl SignalTable {
    /// Lays the generator output out in universe order, applying `policy` to
    /// any key mismatch between the two.
    pub(crate) fn reconcile(
        universe: &Universe,
        mut signals: SignalMap,
        policy: CoveragePolicy,
    ) -> Result<Self, StrategyError> {
        let mut values = Vec::with_capacity(universe.len());

        for asset in universe {
            match (signals.remove(asset), policy) {
                (Some(value), _) => values.push(value),
                (None, CoveragePolicy::FillMissing(fill)) => {
                    tracing::debug!(asset = %asset, fill, "No signal returned, filling.");
                    values.push(fill);
                }
                (None, CoveragePolicy::Strict) => {
                    return Err(StrategyError::MissingSignal(asset.clone()));
                }
            }
        }

        // Whatever is left over was never asked for.
        if !signals.is_empty() {
            match policy {
                CoveragePolicy::Strict => {
                    let extra = signals.keys().min().cloned().unwrap_or_default();
                    return Err(StrategyError::UnexpectedSignal(extra));
                }
                CoveragePolicy::FillMissing(_) => {
                    tracing::debug!(dropped = signals.len(), "Dropping signals outside the universe.");
                }
            }
        }

        Ok(Self {
            assets: universe.as_slice().to_vec(),
            signals: values,
        })
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// The row index, in universe order.
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// The `signal` column, row-aligned with [`SignalTable::assets`].
    pub fn signals(&self) -> &[f64] {
        &self.signals
    }

    pub fn get(&self, asset: &str) -> Option<f64> {
        self.assets
            .iter()
            .position(|a| a == asset)
            .map(|row| self.signals[row])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.assets
            .iter()
            .map(String::as_str)
            .zip(self.signals.iter().copied())
    }

    /// Owned `(asset, signal)` rows, the shape the keyed diagnostics consume.
    pub fn to_pairs(&self) -> Vec<(String, f64)> {
        self.assets
            .iter()
            .cloned()
            .zip(self.signals.iter().copied())
            .collect()
    }

    /// Exports the table as a two-column DataFrame: `asset` and `signal`.
    pub fn to_frame(&self) -> Result<DataFrame, StrategyError> {
        let frame = DataFrame::new(vec![
            Series::new(ASSET_COLUMN, self.assets.as_slice()),
            Series::new(SIGNAL_COLUMN, self.signals.as_slice()),
        ])?;
        Ok(frame)
    }
}
