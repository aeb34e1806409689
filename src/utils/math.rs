//! Mathematical utility functions for statistical analysis
//!
//! This module provides standardised percentage calculation utilities
//! with proper zero-division handling for use across the analysis module.

/// Calculate percentage safely for usize values, returning 0.0 if total is zero.
///
/// # Arguments
/// * `part` - The numerator (portion of the total)
/// * `total` - The denominator (total count)
///
/// # Returns
/// Percentage as a float (0.0 to 100.0), or 0.0 if total is zero.
///
/// # Examples
/// ```
/// use market_feed_profiler::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(50, 100), 50.0);
/// assert_eq!(safe_percentage(1, 4), 25.0);
/// assert_eq!(safe_percentage(0, 100), 0.0);
/// assert_eq!(safe_percentage(50, 0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Round to two decimal places (half away from zero)
///
/// # Examples
/// ```
/// use market_feed_profiler::utils::math::round2;
///
/// assert_eq!(round2(66.666_666), 66.67);
/// assert_eq!(round2(50.0), 50.0);
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage rounded to two decimals, with the zero-division guard
///
/// `part == total` always yields exactly `100.0`.
#[inline]
pub fn presence_percentage(part: usize, total: usize) -> f64 {
    round2(safe_percentage(part, total))
}

/// Integer mean rounded to nearest, returning 0 if count is zero
#[inline]
pub fn safe_mean_rounded(sum: i64, count: usize) -> i64 {
    if count == 0 {
        0
    } else {
        (sum as f64 / count as f64).round() as i64
    }
}
