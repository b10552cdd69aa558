//! folioboard-core - Core library for folioboard
//!
//! Provides the portfolio data model, snapshot loader, ranking/scaling
//! logic, measure formatting, localization, and URL building.

pub mod error;
pub mod format;
pub mod l10n;
pub mod models;
pub mod parsers;
pub mod ranking;
pub mod urls;

pub use error::CoreError;
pub use models::{Measures, PortfolioSnapshot, Qualifier, SubComponent};
pub use parsers::SnapshotParser;
pub use ranking::{bar_width, max_loc, rank, MAX_BAR_WIDTH};
