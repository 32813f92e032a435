use configuration::DEFAULT_PERIODS_PER_YEAR;

/// Annualised Sharpe ratio of a periodic return series.
///
/// The per-period risk-free rate is `risk_free_rate / periods_per_year`. Volatility
/// is the sample standard deviation. Non-finite observations are skipped.
///
/// Returns `0.0` when the ratio is undefined: fewer than two usable observations,
/// zero volatility, or `periods_per_year == 0`.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64, periods_per_year: u32) -> f64 {
    if periods_per_year == 0 || !risk_free_rate.is_finite() {
        return 0.0;
    }
    let periods = f64::from(periods_per_year);
    let per_period_rf = risk_free_rate / periods;

    let excess: Vec<f64> = returns
        .iter()
        .filter(|r| r.is_finite())
        .map(|r| r - per_period_rf)
        .collect();

    if excess.len() < 2 || excess.iter().all(|r| *r == excess[0]) {
        return 0.0;
    }

    let n = excess.len() as f64;
    let mean = excess.iter().sum::<f64>() / n;
    let variance = excess.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std_dev = variance.sqrt();

    if std_dev > 0.0 {
        mean / std_dev * periods.sqrt()
    } else {
        0.0
    }
}

/// [`sharpe_ratio`] for daily returns with no risk-free rate.
pub fn daily_sharpe_ratio(returns: &[f64]) -> f64 {
    sharpe_ratio(returns, 0.0, DEFAULT_PERIODS_PER_YEAR)
}
