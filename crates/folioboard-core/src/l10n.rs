//! Localized string lookup over an embedded message bundle
//!
//! Unknown keys echo the key itself so a missing message degrades to
//! something readable instead of failing the render.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

static BUNDLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("metric_domain.Releasability", "Releasability"),
        ("metric_domain.Reliability", "Reliability"),
        ("portfolio.metric_domain.vulnerabilities", "Vulnerabilities"),
        (
            "portfolio.metric_domain.security_hotspots",
            "Security Hotspots",
        ),
        ("metric_domain.Maintainability", "Maintainability"),
        ("metric.ncloc.name", "Lines of Code"),
        ("metric.level.OK", "Passed"),
        ("metric.level.ERROR", "Failed"),
        ("branches.main_branch", "main branch"),
        ("x_of_y_shown", "{0} of {1} shown"),
        ("show_more", "Show More"),
        ("qualifier.TRK", "Project"),
        ("qualifier.APP", "Application"),
        ("qualifier.SVW", "Sub-Portfolio"),
        ("qualifier.VW", "Portfolio"),
    ])
});

/// Look up a message by key
pub fn translate(key: &str) -> String {
    match BUNDLE.get(key) {
        Some(message) => (*message).to_string(),
        None => {
            debug!(key, "No message for l10n key");
            key.to_string()
        }
    }
}

/// Look up a message and substitute `{0}`, `{1}`, ... placeholders
pub fn translate_with_parameters(key: &str, params: &[&str]) -> String {
    let mut message = translate(key);
    for (i, param) in params.iter().enumerate() {
        message = message.replace(&format!("{{{}}}", i), param);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves() {
        assert_eq!(translate("branches.main_branch"), "main branch");
    }

    #[test]
    fn unknown_key_echoes_key() {
        assert_eq!(translate("no.such.key"), "no.such.key");
    }

    #[test]
    fn parameters_substitute_in_order() {
        assert_eq!(
            translate_with_parameters("x_of_y_shown", &["50", "128"]),
            "50 of 128 shown"
        );
    }
}
