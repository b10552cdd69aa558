//! Non-interactive output modes: static table and JSON
//!
//! Shares ranking, scaling, and formatting with the TUI; only the output
//! surface differs.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use folioboard_core::format::{format_int, format_measure, rating_letter};
use folioboard_core::l10n::{translate, translate_with_parameters};
use folioboard_core::models::{metric, MetricType, SubComponent};
use folioboard_core::urls::code_url;
use folioboard_core::{bar_width, max_loc, rank, PortfolioSnapshot, Qualifier};

/// Print the ranked table to stdout. An empty sub-component list prints
/// nothing, matching the view's degenerate case.
pub fn print_table(snapshot: &PortfolioSnapshot, no_color: bool) -> Result<()> {
    let Some(table) = build_table(snapshot, no_color) else {
        return Ok(());
    };
    println!("{table}");
    if snapshot.is_truncated() {
        println!("{}", footer_line(snapshot));
    }
    Ok(())
}

/// Emit the snapshot with sub-components in ranking order
pub fn print_json(snapshot: &PortfolioSnapshot) -> Result<()> {
    let mut ordered = snapshot.clone();
    ordered.sub_components = rank(&snapshot.sub_components)
        .into_iter()
        .cloned()
        .collect();
    println!("{}", serde_json::to_string_pretty(&ordered)?);
    Ok(())
}

fn build_table(snapshot: &PortfolioSnapshot, no_color: bool) -> Option<Table> {
    if snapshot.sub_components.is_empty() {
        return None;
    }

    let ranked = rank(&snapshot.sub_components);
    let max = max_loc(&snapshot.sub_components);

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec![
            String::new(),
            translate("metric_domain.Releasability"),
            translate("metric_domain.Reliability"),
            translate("portfolio.metric_domain.vulnerabilities"),
            translate("portfolio.metric_domain.security_hotspots"),
            translate("metric_domain.Maintainability"),
            translate("metric.ncloc.name"),
        ]);

    for comp in ranked {
        table.add_row(build_row(comp, max, no_color));
    }

    Some(table)
}

fn build_row(comp: &SubComponent, max: u64, no_color: bool) -> Row {
    let mut row = Row::new();
    row.add_cell(Cell::new(identity_text(comp)));

    let (text, color) = if comp.qualifier == Qualifier::Project {
        let raw = comp.measures.get(metric::ALERT_STATUS);
        (format_measure(MetricType::Level, raw), level_color(raw))
    } else {
        rating_text(comp, metric::RELEASABILITY_RATING)
    };
    row.add_cell(colored(text, color, no_color));

    for metric_key in [
        metric::RELIABILITY_RATING,
        metric::SECURITY_RATING,
        metric::SECURITY_REVIEW_RATING,
        metric::SQALE_RATING,
    ] {
        let (text, color) = rating_text(comp, metric_key);
        row.add_cell(colored(text, color, no_color));
    }

    let ncloc = comp.measures.number_or_zero(metric::NCLOC);
    let value = format_measure(MetricType::ShortInt, comp.measures.get(metric::NCLOC));
    let width = bar_width(ncloc, max);
    let cell_text = if width > 0 {
        format!("{:>8} {}", value, "█".repeat(usize::from(width)))
    } else {
        format!("{:>8}", value)
    };
    row.add_cell(colored(cell_text, Some(Color::Blue), no_color));

    row
}

fn identity_text(comp: &SubComponent) -> String {
    let mut text = comp.name.clone();
    if comp.qualifier.has_branches() {
        match comp.branch() {
            Some(branch) => {
                text.push_str("  ⎇ ");
                text.push_str(branch);
            }
            None => {
                text.push_str(&format!("  [{}]", translate("branches.main_branch")));
            }
        }
    }
    text
}

fn rating_text(comp: &SubComponent, metric_key: &str) -> (String, Option<Color>) {
    let raw = comp.measures.get(metric_key);
    let color = raw.and_then(rating_letter).map(|letter| match letter {
        'A' => Color::Green,
        'B' => Color::DarkGreen,
        'C' => Color::Yellow,
        'D' => Color::DarkRed,
        _ => Color::Red,
    });
    (format_measure(MetricType::Rating, raw), color)
}

fn level_color(raw: Option<&str>) -> Option<Color> {
    match raw {
        Some("OK") => Some(Color::Green),
        Some("ERROR") => Some(Color::Red),
        _ => None,
    }
}

fn colored(text: String, color: Option<Color>, no_color: bool) -> Cell {
    let cell = Cell::new(text);
    match color {
        Some(color) if !no_color => cell.fg(color),
        _ => cell,
    }
}

fn footer_line(snapshot: &PortfolioSnapshot) -> String {
    format!(
        "{}  {}: {}",
        translate_with_parameters(
            "x_of_y_shown",
            &[
                &format_int(snapshot.sub_components.len() as u64),
                &format_int(snapshot.total() as u64),
            ],
        ),
        translate("show_more"),
        code_url(&snapshot.component)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folioboard_core::models::Measures;

    fn snapshot(total: Option<usize>, comps: Vec<SubComponent>) -> PortfolioSnapshot {
        PortfolioSnapshot {
            component: "org:folio".into(),
            name: None,
            total,
            sub_components: comps,
        }
    }

    fn project(name: &str, ncloc: &str) -> SubComponent {
        SubComponent {
            key: format!("org:{}", name.to_lowercase()),
            ref_key: None,
            name: name.into(),
            qualifier: Qualifier::Project,
            branch: None,
            measures: Measures::from([(metric::NCLOC, ncloc)]),
        }
    }

    #[test]
    fn empty_snapshot_builds_no_table() {
        assert!(build_table(&snapshot(None, Vec::new()), true).is_none());
    }

    #[test]
    fn table_ranks_rows_by_name() {
        let table = build_table(
            &snapshot(None, vec![project("Zeta", "100"), project("Alpha", "50")]),
            true,
        )
        .unwrap();
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        let alpha = rendered.find("Alpha").unwrap();
        let zeta = rendered.find("Zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn max_row_gets_a_full_bar() {
        let table = build_table(&snapshot(None, vec![project("P", "100")]), true).unwrap();
        let rendered = table.to_string();
        assert!(rendered.contains(&"█".repeat(50)));
    }

    #[test]
    fn footer_reports_shown_and_total() {
        let snap = snapshot(Some(200), vec![project("P", "1")]);
        let footer = footer_line(&snap);
        assert!(footer.contains("1 of 200 shown"));
        assert!(footer.contains("/code?id=org%3Afolio"));
    }
}
