use crate::SignalGenerator;
use crate::error::StrategyError;
use crate::table::SignalTable;
use core_types::{CoveragePolicy, SignalMap, Universe};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A named alpha: a signal function paired with an optional default universe.
///
/// The signal function is held behind a shared handle and is never inspected
/// or mutated. Neither `run` nor `metadata` changes the alpha.
#[derive(Clone)]
pub struct Alpha {
    name: String,
    signal_fn: Arc<dyn SignalGenerator>,
    universe: Option<Universe>,
    coverage: CoveragePolicy,
}

/// A read-only summary of an alpha, safe to log or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaMetadata {
    pub name: String,
    pub universe_size: usize,
    pub has_universe: bool,
}

impl Alpha {
    /// Creates an alpha with the default (strict) coverage policy.
    pub fn new<F>(
        name: impl Into<String>,
        signal_fn: F,
        universe: Option<Universe>,
    ) -> Result<Self, StrategyError>
    where
        F: Fn(&[String]) -> SignalMap + Send + Sync + 'static,
    {
        Self::builder(name)
            .signal_fn(signal_fn)
            .maybe_universe(universe)
            .build()
    }

    pub fn builder(name: impl Into<String>) -> AlphaBuilder {
        AlphaBuilder {
            name: name.into(),
            signal_fn: None,
            universe: None,
            coverage: CoveragePolicy::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> Option<&Universe> {
        self.universe.as_ref()
    }

    pub fn coverage(&self) -> CoveragePolicy {
        self.coverage
    }

    /// Runs the signal function and lays its output out as a signal table.
    ///
    /// # Arguments
    ///
    /// * `universe` - Overrides the stored default universe when `Some`.
    ///
    /// # Returns
    ///
    /// * `Ok(SignalTable)` - one row per asset of the effective universe, in order.
    /// * `Err(StrategyError::MissingUniverse)` - if neither source yields a non-empty universe.
    /// * `Err(StrategyError::MissingSignal | UnexpectedSignal)` - if the signal function's
    ///   keys disagree with the universe under the strict coverage policy.
    #[tracing::instrument(name = "alpha_run", skip(self, universe), fields(alpha = %self.name))]
    pub fn run(&self, universe: Option<&Universe>) -> Result<SignalTable, StrategyError> {
        let effective = universe
            .or(self.universe.as_ref())
            .filter(|u| !u.is_empty())
            .ok_or(StrategyError::MissingUniverse)?;

        tracing::debug!(assets = effective.len(), "Generating signals.");
        let signals = self.signal_fn.generate(effective.as_slice());

        SignalTable::reconcile(effective, signals, self.coverage)
    }

    /// Describes the alpha without invoking its signal function.
    pub fn metadata(&self) -> AlphaMetadata {
        let universe_size = self.universe.as_ref().map_or(0, Universe::len);
        AlphaMetadata {
            name: self.name.clone(),
            universe_size,
            has_universe: universe_size > 0,
        }
    }
}

impl fmt::Debug for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alpha")
            .field("name", &self.name)
            .field("universe", &self.universe)
            .field("coverage", &self.coverage)
            .finish_non_exhaustive()
    }
}

/// Step-by-step construction of an [`Alpha`].
pub struct AlphaBuilder {
    name: String,
    signal_fn: Option<Arc<dyn SignalGenerator>>,
    universe: Option<Universe>,
    coverage: CoveragePolicy,
}

impl AlphaBuilder {
    pub fn signal_fn<F>(mut self, signal_fn: F) -> Self
    where
        F: Fn(&[String]) -> SignalMap + Send + Sync + 'static,
    {
        self.signal_fn = Some(Arc::new(signal_fn));
        self
    }

    /// Uses an existing, possibly shared, generator.
    pub fn generator(mut self, generator: Arc<dyn SignalGenerator>) -> Self {
        self.signal_fn = Some(generator);
        self
    }

    pub fn universe(mut self, universe: Universe) -> Self {
        self.universe = Some(universe);
        self
    }

    pub fn maybe_universe(mut self, universe: Option<Universe>) -> Self {
        self.universe = universe;
        self
    }

    pub fn coverage(mut self, coverage: CoveragePolicy) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn build(self) -> Result<Alpha, StrategyError> {
        if self.name.trim().is_empty() {
            return Err(StrategyError::InvalidName);
        }
        let signal_fn = self
            .signal_fn
            .ok_or_else(|| StrategyError::MissingSignalFn(self.name.clone()))?;

        Ok(Alpha {
            name: self.name,
            signal_fn,
            universe: self.universe,
            coverage: self.coverage,
        })
    }
}
