//! Navigation URL builders
//!
//! URLs are built, never followed; the footer and identity cells surface
//! them as link targets.

use crate::models::Qualifier;

/// Overview URL for a component: dashboard for projects and applications,
/// portfolio view for container qualifiers. Branch lands in the query when
/// present.
pub fn component_overview_url(key: &str, qualifier: Qualifier, branch: Option<&str>) -> String {
    let base = match qualifier {
        Qualifier::Project | Qualifier::Application => "/dashboard",
        Qualifier::SubPortfolio | Qualifier::Portfolio => "/portfolio",
    };
    let mut url = format!("{}?id={}", base, escape_query(key));
    if let Some(branch) = branch.filter(|b| !b.is_empty()) {
        url.push_str("&branch=");
        url.push_str(&escape_query(branch));
    }
    url
}

/// Full sub-component listing for a portfolio (the footer's "show more")
pub fn code_url(component: &str) -> String {
    format!("/code?id={}", escape_query(component))
}

/// Percent-escape a query value. Unreserved characters pass through
/// unchanged.
fn escape_query(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                escaped.push(byte as char)
            }
            _ => escaped.push_str(&format!("%{:02X}", byte)),
        }
    }
    escaped
}
