//! Measure map with typed get-or-default accessors
//!
//! Measure presence is never assumed; every read goes through an accessor
//! that handles the absent case.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metric keys used by the worst-projects view
pub mod metric {
    pub const NCLOC: &str = "ncloc";
    pub const ALERT_STATUS: &str = "alert_status";
    pub const RELEASABILITY_RATING: &str = "releasability_rating";
    pub const RELIABILITY_RATING: &str = "reliability_rating";
    pub const SECURITY_RATING: &str = "security_rating";
    pub const SECURITY_REVIEW_RATING: &str = "security_review_rating";
    pub const SQALE_RATING: &str = "sqale_rating";
}

/// Declared type of a metric value, driving its display format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    /// Letter grade A-E serialized as "1.0".."5.0"
    Rating,
    /// Quality gate status: "OK" or "ERROR"
    Level,
    /// Plain integer with thousands grouping
    Int,
    /// Compact integer (12.4K style)
    ShortInt,
}

/// Metric key -> serialized value for one component
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measures(HashMap<String, String>);

impl Measures {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self(map)
    }

    /// Raw value for a metric, if computed
    pub fn get(&self, metric_key: &str) -> Option<&str> {
        self.0.get(metric_key).map(String::as_str)
    }

    /// Numeric value coerced to zero when absent or unparsable.
    ///
    /// Used strictly for scaling computations; display always goes through
    /// the formatter so absent values keep their placeholder.
    pub fn number_or_zero(&self, metric_key: &str) -> u64 {
        self.get(metric_key)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite() && *n > 0.0)
            .map(|n| n as u64)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Measures {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_or_zero_parses_numeric_strings() {
        let m = Measures::from([(metric::NCLOC, "12450")]);
        assert_eq!(m.number_or_zero(metric::NCLOC), 12450);
    }

    #[test]
    fn number_or_zero_defaults_absent_and_garbage() {
        let m = Measures::from([(metric::NCLOC, "not-a-number")]);
        assert_eq!(m.number_or_zero(metric::NCLOC), 0);
        assert_eq!(m.number_or_zero(metric::SQALE_RATING), 0);
    }

    #[test]
    fn number_or_zero_clamps_negatives() {
        let m = Measures::from([(metric::NCLOC, "-5")]);
        assert_eq!(m.number_or_zero(metric::NCLOC), 0);
    }

    #[test]
    fn get_preserves_raw_value() {
        let m = Measures::from([(metric::RELIABILITY_RATING, "3.0")]);
        assert_eq!(m.get(metric::RELIABILITY_RATING), Some("3.0"));
        assert_eq!(m.get(metric::SECURITY_RATING), None);
    }
}
