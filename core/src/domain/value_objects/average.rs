//! Rounded average star ratings.

use serde::{Serialize, Serializer};
use std::fmt;

/// Mean star value rounded to two decimals.
///
/// An empty set of ratings averages to `0.00`, never null or NaN, and the
/// value serializes as a two-decimal string such as `"4.50"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct AverageRating(f64);

impl AverageRating {
    /// Round a raw mean; `None` and non-finite values become `0.00`
    pub fn from_mean(mean: Option<f64>) -> Self {
        match mean {
            Some(value) if value.is_finite() => Self(round_to(value, 2)),
            _ => Self(0.0),
        }
    }

    /// Average of `sum` over `count` ratings
    pub fn from_sum(sum: u64, count: u64) -> Self {
        if count == 0 {
            return Self(0.0);
        }
        Self::from_mean(Some(sum as f64 / count as f64))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for AverageRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Format a mean with one decimal, `0.0` when there is nothing to average
pub fn one_decimal(mean: Option<f64>) -> String {
    match mean {
        Some(value) if value.is_finite() => format!("{:.1}", round_to(value, 1)),
        _ => String::from("0.0"),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
