use crate::error::AnalyticsError;
use std::collections::HashMap;

/// Pearson correlation between signals and the returns realized after them.
///
/// Inputs are aligned by position: `signals[i]` is paired with `returns[i]`.
///
/// # Errors
///
/// Fails with a validation error when the lengths differ, when either series
/// is empty, when any value is NaN or infinite, or when either series is
/// constant (the correlation is then undefined).
///
/// # Returns
///
/// A value in `[-1.0, 1.0]`.
pub fn information_coefficient(signals: &[f64], returns: &[f64]) -> Result<f64, AnalyticsError> {
    if signals.len() != returns.len() {
        return Err(AnalyticsError::LengthMismatch {
            signals: signals.len(),
            returns: returns.len(),
        });
    }
    validate_series("signals", signals)?;
    validate_series("returns", returns)?;

    // Correlation is invariant to positive scaling. Bringing both series into
    // [-1, 1] keeps the sums of squares clear of overflow and underflow.
    let signals = scaled(signals);
    let returns = scaled(returns);

    let n = signals.len() as f64;
    let signal_mean = signals.iter().sum::<f64>() / n;
    let return_mean = returns.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut signal_var = 0.0;
    let mut return_var = 0.0;

    for (s, r) in signals.iter().zip(&returns) {
        let ds = s - signal_mean;
        let dr = r - return_mean;
        covariance += ds * dr;
        signal_var += ds * ds;
        return_var += dr * dr;
    }

    let denom = signal_var.sqrt() * return_var.sqrt();
    if denom == 0.0 {
        // Only reachable through subnormal inputs; constant inputs are caught above.
        return Err(AnalyticsError::ZeroVariance("signals"));
    }

    Ok((covariance / denom).clamp(-1.0, 1.0))
}

/// Pairs each signal with the realized return of the same asset.
///
/// The output follows the order of `signals`. Returns for assets that carry no
/// signal are ignored; a signal whose asset has no return is an error.
pub fn align_by_asset(
    signals: &[(String, f64)],
    returns: &HashMap<String, f64>,
) -> Result<(Vec<f64>, Vec<f64>), AnalyticsError> {
    let mut aligned_signals = Vec::with_capacity(signals.len());
    let mut aligned_returns = Vec::with_capacity(signals.len());

    for (asset, signal) in signals {
        let realized = returns
            .get(asset)
            .ok_or_else(|| AnalyticsError::MissingReturn(asset.clone()))?;
        aligned_signals.push(*signal);
        aligned_returns.push(*realized);
    }

    Ok((aligned_signals, aligned_returns))
}

/// The information coefficient of keyed inputs, aligned with [`align_by_asset`].
pub fn information_coefficient_by_asset(
    signals: &[(String, f64)],
    returns: &HashMap<String, f64>,
) -> Result<f64, AnalyticsError> {
    let (signals, returns) = align_by_asset(signals, returns)?;
    information_coefficient(&signals, &returns)
}

/// Divides every value by the largest magnitude in the series.
fn scaled(values: &[f64]) -> Vec<f64> {
    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    values.iter().map(|v| v / scale).collect()
}

fn validate_series(name: &'static str, values: &[f64]) -> Result<(), AnalyticsError> {
    let Some(first) = values.first() else {
        return Err(AnalyticsError::EmptyInput(name));
    };
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(AnalyticsError::NonFiniteValue { series: name, index });
    }
    // Exact comparison: a rounding-noise variance would otherwise yield a
    // meaningless correlation.
    if values.iter().all(|v| v == first) {
        return Err(AnalyticsError::ZeroVariance(name));
    }
    Ok(())
}
