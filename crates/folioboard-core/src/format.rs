//! Measure formatting
//!
//! Turns raw serialized measure values into display strings: rating
//! letters, quality gate labels, plain and compact integers. Absent or
//! out-of-domain values render as a placeholder; callers never substitute
//! their own defaults.

use crate::l10n::translate;
use crate::models::MetricType;

/// Placeholder for measures that were not computed
pub const NO_VALUE: &str = "—";

/// Format a raw measure value according to its declared metric type
pub fn format_measure(metric_type: MetricType, raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return NO_VALUE.to_string();
    };

    match metric_type {
        MetricType::Rating => rating_letter(raw)
            .map(|letter| letter.to_string())
            .unwrap_or_else(|| NO_VALUE.to_string()),
        MetricType::Level => match raw {
            "OK" => translate("metric.level.OK"),
            "ERROR" => translate("metric.level.ERROR"),
            _ => NO_VALUE.to_string(),
        },
        MetricType::Int => parse_count(raw)
            .map(format_int)
            .unwrap_or_else(|| NO_VALUE.to_string()),
        MetricType::ShortInt => parse_count(raw)
            .map(format_short_int)
            .unwrap_or_else(|| NO_VALUE.to_string()),
    }
}

/// Rating letter for a serialized rating value ("1.0".."5.0" -> A..E)
pub fn rating_letter(raw: &str) -> Option<char> {
    let value = raw.trim().parse::<f64>().ok()?;
    match value.round() as i64 {
        1 => Some('A'),
        2 => Some('B'),
        3 => Some('C'),
        4 => Some('D'),
        5 => Some('E'),
        _ => None,
    }
}

/// Plain integer with thousands grouping
pub fn format_int(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Compact integer: 950 -> "950", 12400 -> "12.4K", 3200000 -> "3.2M"
pub fn format_short_int(n: u64) -> String {
    if n >= 1_000_000_000 {
        trim_decimal(n as f64 / 1_000_000_000.0, "B")
    } else if n >= 1_000_000 {
        trim_decimal(n as f64 / 1_000_000.0, "M")
    } else if n >= 1_000 {
        trim_decimal(n as f64 / 1_000.0, "K")
    } else {
        n.to_string()
    }
}

fn parse_count(raw: &str) -> Option<u64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.round() as u64)
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let formatted = format!("{:.1}", value);
    let formatted = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}{}", formatted, suffix)
}
