//! Descriptive statistics over duration samples.
//!
//! Both functions refuse empty input with `StatsError::EmptyInput` rather
//! than inventing a value; callers decide how to present a missing statistic.

use crate::utils::error::StatsError;

/// Arithmetic mean of the samples
///
/// **Public** - used by the report renderers
///
/// # Errors
/// * `StatsError::EmptyInput` - no samples
pub fn mean(samples: &[f64]) -> Result<f64, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let total: f64 = samples.iter().sum();
    Ok(total / samples.len() as f64)
}

/// Median of the samples
///
/// **Public** - used by the report renderers
///
/// The samples are sorted on a copy; for an even count the two central
/// values are averaged.
///
/// # Errors
/// * `StatsError::EmptyInput` - no samples
pub fn median(samples: &[f64]) -> Result<f64, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}
