//! Ranking and bar scaling for the worst-projects view
//!
//! Both are pure, per-render computations: the input list is never mutated
//! and nothing is cached between calls.

use crate::models::{metric, SubComponent};

/// Maximum bar width in display units
pub const MAX_BAR_WIDTH: u16 = 50;

/// Rank sub-components for display.
///
/// Ascending by qualifier (declared enum order), then name
/// (case-insensitive), then branch (case-insensitive, absent first).
/// Ties preserve input order.
pub fn rank(components: &[SubComponent]) -> Vec<&SubComponent> {
    let mut ordered: Vec<&SubComponent> = components.iter().collect();
    ordered.sort_by(|a, b| {
        (a.qualifier, a.name.to_lowercase())
            .cmp(&(b.qualifier, b.name.to_lowercase()))
            .then_with(|| {
                let ab = a.branch().map(str::to_lowercase);
                let bb = b.branch().map(str::to_lowercase);
                ab.cmp(&bb)
            })
    });
    ordered
}

/// Maximum `ncloc` over the list, absent/unparsable values counting as zero
pub fn max_loc(components: &[SubComponent]) -> u64 {
    components
        .iter()
        .map(|c| c.measures.number_or_zero(metric::NCLOC))
        .max()
        .unwrap_or(0)
}

/// Bar width in units for one component's `ncloc`.
///
/// Zero when `max == 0` (no bars at all) or `ncloc == 0` (zero stays
/// visually distinct from the smallest nonzero value); otherwise
/// `max(1, round(ncloc / max * MAX_BAR_WIDTH))`.
pub fn bar_width(ncloc: u64, max: u64) -> u16 {
    if max == 0 || ncloc == 0 {
        return 0;
    }
    let scaled = (ncloc as f64 / max as f64 * f64::from(MAX_BAR_WIDTH)).round() as u16;
    scaled.clamp(1, MAX_BAR_WIDTH)
}
