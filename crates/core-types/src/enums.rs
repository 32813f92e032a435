use serde::{Deserialize, Serialize};

/// How a strategy reconciles the keys returned by its signal generator with
/// the universe it was asked to score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveragePolicy {
    /// Every asset must receive a signal and no other key may be returned.
    #[default]
    Strict,
    /// Assets without a signal receive the given value; extra keys are dropped.
    FillMissing(f64),
}

