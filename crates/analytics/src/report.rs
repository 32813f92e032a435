use serde::{Deserialize, Serialize};

/// A summary of how well a signal cross-section predicted the returns that followed.
///
/// This struct is the output of the `AnalyticsEngine` and is what adapters and
/// reporting scripts pass around when they talk about signal quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    /// Number of (signal, return) pairs the coefficient was computed over.
    pub observations: usize,
    pub information_coefficient: f64,
    /// Share of pairs where signal and return have the same sign. Zeros count as misses.
    pub hit_rate: f64,
}
