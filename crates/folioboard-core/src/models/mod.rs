//! Data models for folioboard

pub mod component;
pub mod measures;

pub use component::{PortfolioSnapshot, Qualifier, SubComponent};
pub use measures::{metric, Measures, MetricType};
