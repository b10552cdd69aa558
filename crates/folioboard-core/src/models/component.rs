//! Portfolio snapshot models matching the measures export format
//!
//! A snapshot is one portfolio plus a (possibly truncated) page of its
//! sub-components with pre-computed measures. Records are read-only once
//! loaded; ranking and rendering never mutate them.

use crate::models::measures::Measures;
use serde::{Deserialize, Serialize};

/// Structural kind of a component.
///
/// Declaration order is the ranking order (derived `Ord`); it mirrors the
/// lexicographic order of the qualifier codes in the export format
/// (APP < SVW < TRK < VW).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Qualifier {
    #[serde(rename = "APP")]
    Application,
    #[serde(rename = "SVW")]
    SubPortfolio,
    #[serde(rename = "TRK")]
    Project,
    #[serde(rename = "VW")]
    Portfolio,
}

impl Qualifier {
    /// Qualifier code as it appears in the export format
    pub fn code(self) -> &'static str {
        match self {
            Qualifier::Application => "APP",
            Qualifier::SubPortfolio => "SVW",
            Qualifier::Project => "TRK",
            Qualifier::Portfolio => "VW",
        }
    }

    /// Localization key for the qualifier's display name
    pub fn name_key(self) -> &'static str {
        match self {
            Qualifier::Application => "qualifier.APP",
            Qualifier::SubPortfolio => "qualifier.SVW",
            Qualifier::Project => "qualifier.TRK",
            Qualifier::Portfolio => "qualifier.VW",
        }
    }

    /// Projects and applications are the only branch-carrying kinds
    pub fn has_branches(self) -> bool {
        matches!(self, Qualifier::Project | Qualifier::Application)
    }
}

/// One sub-component of a portfolio with its pre-computed measures
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubComponent {
    /// Unique identifier within the snapshot
    pub key: String,

    /// Alternate identifier used for navigation when the record is a
    /// reference to another entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_key: Option<String>,

    /// Display name
    pub name: String,

    /// Structural kind
    pub qualifier: Qualifier,

    /// Branch name; absent means the main branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Metric key -> serialized value; absent key means "not computed"
    #[serde(default)]
    pub measures: Measures,
}

impl SubComponent {
    /// Branch name, with the empty string normalized to absent
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref().filter(|b| !b.is_empty())
    }

    /// Identifier to navigate to: `ref_key` when present, else `key`
    pub fn nav_key(&self) -> &str {
        self.ref_key.as_deref().unwrap_or(&self.key)
    }
}

/// A portfolio plus one page of its sub-components
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Key of the owning portfolio
    pub component: String,

    /// Display name of the portfolio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Total sub-component count; the list may be a truncated page of it.
    /// Absent means the list is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,

    #[serde(default)]
    pub sub_components: Vec<SubComponent>,
}

impl PortfolioSnapshot {
    /// Effective total, defaulting to the list length when absent
    pub fn total(&self) -> usize {
        self.total.unwrap_or(self.sub_components.len())
    }

    /// True when more sub-components exist than the snapshot carries
    pub fn is_truncated(&self) -> bool {
        self.total() > self.sub_components.len()
    }
}
