use crate::SignalGenerator;
use crate::alpha::Alpha;
use crate::error::StrategyError;
use configuration::StrategySettings;
use std::sync::Arc;

/// Creates a new alpha whose default universe and coverage policy come from configuration.
pub fn create_alpha(
    settings: &StrategySettings,
    name: impl Into<String>,
    generator: Arc<dyn SignalGenerator>,
) -> Result<Alpha, StrategyError> {
    let alpha = Alpha::builder(name)
        .generator(generator)
        .maybe_universe(settings.default_universe.clone())
        .coverage(settings.coverage)
        .build()?;

    tracing::debug!(alpha = %alpha.name(), coverage = ?alpha.coverage(), "Alpha created from settings.");
    Ok(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoveragePolicy, SignalMap, Universe};

    /// Scores each asset by its position in the universe.
    struct RankGenerator;

    impl SignalGenerator for RankGenerator {
        fn generate(&self, universe: &[String]) -> SignalMap {
            universe
                .iter()
                .enumerate()
                .map(|(rank, asset)| (asset.clone(), rank as f64))
                .collect()
        }
    }

    #[test]
    fn test_applies_configured_defaults() {
        let settings = StrategySettings {
            default_universe: Some(Universe::new(["AAPL", "GOOGL"]).unwrap()),
            coverage: CoveragePolicy::FillMissing(0.0),
        };

        let alpha = create_alpha(&settings, "rank", Arc::new(RankGenerator)).unwrap();
        assert_eq!(alpha.coverage(), CoveragePolicy::FillMissing(0.0));
        assert_eq!(alpha.metadata().universe_size, 2);

        let table = alpha.run(None).unwrap();
        assert_eq!(table.signals(), [0.0, 1.0]);
    }

    #[test]
    fn test_shared_generator() {
        let generator: Arc<dyn SignalGenerator> = Arc::new(RankGenerator);
        let settings = StrategySettings::default();

        let first = create_alpha(&settings, "first", Arc::clone(&generator)).unwrap();
        let second = create_alpha(&settings, "second", generator).unwrap();

        let universe = Universe::new(["X", "Y", "Z"]).unwrap();
        assert_eq!(first.run(Some(&universe)).unwrap(), second.run(Some(&universe)).unwrap());
        assert!(matches!(first.run(None), Err(StrategyError::MissingUniverse)));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = create_alpha(&StrategySettings::default(), "", Arc::new(RankGenerator)).unwrap_err();
        assert!(matches!(err, StrategyError::InvalidName));
    }
}
