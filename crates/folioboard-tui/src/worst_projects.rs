//! Worst projects view - ranked sub-component table with rating cells and
//! a proportional lines-of-code bar
//!
//! Pure presentation: ranking order, cell text, and bar widths are derived
//! from the snapshot on every render and discarded afterwards. An empty
//! sub-component list draws nothing at all.

use crate::theme::{level_color, qualifier_glyph, RatingColor, Theme};
use folioboard_core::format::{format_int, format_measure, rating_letter};
use folioboard_core::l10n::{translate, translate_with_parameters};
use folioboard_core::models::{metric, MetricType, SubComponent};
use folioboard_core::urls::{code_url, component_overview_url};
use folioboard_core::{bar_width, max_loc, rank, PortfolioSnapshot, Qualifier, MAX_BAR_WIDTH};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Metric columns between the identity cell and the size cell, in display
/// order. The first column's metric depends on the row's qualifier.
const RATING_COLUMNS: [&str; 4] = [
    metric::RELIABILITY_RATING,
    metric::SECURITY_RATING,
    metric::SECURITY_REVIEW_RATING,
    metric::SQALE_RATING,
];

/// Worst projects view state (scroll position only)
pub struct WorstProjects {
    table_state: TableState,
}

impl Default for WorstProjects {
    fn default() -> Self {
        Self::new()
    }
}

impl WorstProjects {
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self { table_state }
    }

    /// Handle key input for row selection
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode, row_count: usize) {
        use crossterm::event::KeyCode;

        if row_count == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.table_state.select(Some(current.saturating_sub(1)));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.table_state
                    .select(Some((current + 1).min(row_count - 1)));
            }
            KeyCode::Home => self.table_state.select(Some(0)),
            KeyCode::End => self.table_state.select(Some(row_count - 1)),
            _ => {}
        }
    }

    /// Render the ranked table. An empty list renders nothing.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        snapshot: &PortfolioSnapshot,
        theme: &Theme,
    ) {
        if snapshot.sub_components.is_empty() {
            return;
        }

        let ranked = rank(&snapshot.sub_components);
        let max = max_loc(&snapshot.sub_components);
        let count = ranked.len();

        // Clamp selection to the current row count
        if let Some(selected) = self.table_state.selected() {
            if selected >= count {
                self.table_state.select(Some(count - 1));
            }
        }

        let truncated = snapshot.is_truncated();
        let mut constraints = vec![
            Constraint::Min(3),    // table
            Constraint::Length(1), // selected row link target
        ];
        if truncated {
            constraints.push(Constraint::Length(1)); // "x of y shown" footer
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_table(frame, chunks[0], &ranked, max, theme);
        self.render_link_line(frame, chunks[1], &ranked, theme);
        if truncated {
            self.render_footer(frame, chunks[2], snapshot, theme);
        }
    }

    fn render_table(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ranked: &[&SubComponent],
        max: u64,
        theme: &Theme,
    ) {
        let header = Row::new(vec![
            Cell::from(""),
            Cell::from(translate("metric_domain.Releasability")),
            Cell::from(translate("metric_domain.Reliability")),
            Cell::from(translate("portfolio.metric_domain.vulnerabilities")),
            Cell::from(translate("portfolio.metric_domain.security_hotspots")),
            Cell::from(translate("metric_domain.Maintainability")),
            Cell::from(translate("metric.ncloc.name")),
        ])
        .style(
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = ranked
            .iter()
            .map(|comp| self.build_row(comp, max, theme))
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(28),
                Constraint::Length(14),
                Constraint::Length(12),
                Constraint::Length(16),
                Constraint::Length(18),
                Constraint::Length(16),
                Constraint::Length(MAX_BAR_WIDTH + 9),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().bg(theme.selection_bg));

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn build_row<'a>(&self, comp: &'a SubComponent, max: u64, theme: &Theme) -> Row<'a> {
        let mut cells = vec![Cell::from(identity_line(comp, theme))];

        let (text, color) = release_cell(comp);
        cells.push(Cell::from(
            Line::from(Span::styled(text, Style::default().fg(color))).centered(),
        ));

        for metric_key in RATING_COLUMNS {
            let (text, color) = rating_cell(comp, metric_key);
            cells.push(Cell::from(
                Line::from(Span::styled(text, Style::default().fg(color))).centered(),
            ));
        }

        let (value, width) = ncloc_cell(comp, max);
        let mut spans = vec![Span::styled(value, Style::default().fg(theme.note))];
        if width > 0 {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                "█".repeat(usize::from(width)),
                Style::default().fg(theme.bar),
            ));
        }
        cells.push(Cell::from(Line::from(spans)));

        Row::new(cells)
    }

    fn render_link_line(
        &self,
        frame: &mut Frame,
        area: Rect,
        ranked: &[&SubComponent],
        theme: &Theme,
    ) {
        let Some(comp) = self.table_state.selected().and_then(|i| ranked.get(i)) else {
            return;
        };
        let url = component_overview_url(comp.nav_key(), comp.qualifier, comp.branch());
        let line = Line::from(vec![
            Span::styled("→ ", Style::default().fg(theme.note)),
            Span::styled(url, Style::default().fg(theme.header)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_footer(
        &self,
        frame: &mut Frame,
        area: Rect,
        snapshot: &PortfolioSnapshot,
        theme: &Theme,
    ) {
        let line = Line::from(vec![
            Span::styled(footer_text(snapshot), Style::default().fg(theme.note)),
            Span::raw("  "),
            Span::styled(
                format!("{}: {}", translate("show_more"), code_url(&snapshot.component)),
                Style::default().fg(theme.header),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).centered(), area);
    }
}

/// Identity cell: qualifier glyph, name, and for branch-carrying kinds the
/// branch name or a main-branch badge
fn identity_line<'a>(comp: &'a SubComponent, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(qualifier_glyph(comp.qualifier), Style::default().fg(theme.note)),
        Span::raw(" "),
        Span::styled(comp.name.as_str(), Style::default().fg(theme.text)),
    ];

    if comp.qualifier.has_branches() {
        match comp.branch() {
            Some(branch) => {
                spans.push(Span::styled("  ⎇ ", Style::default().fg(theme.note)));
                spans.push(Span::styled(branch, Style::default().fg(theme.note)));
            }
            None => {
                spans.push(Span::styled(
                    format!("  [{}]", translate("branches.main_branch")),
                    Style::default().fg(theme.note),
                ));
            }
        }
    }

    Line::from(spans)
}

/// Release-readiness cell: projects show the quality gate status, all other
/// qualifiers the releasability rating
fn release_cell(comp: &SubComponent) -> (String, Color) {
    if comp.qualifier == Qualifier::Project {
        let raw = comp.measures.get(metric::ALERT_STATUS);
        let text = format_measure(MetricType::Level, raw);
        let color = raw.map(level_color).unwrap_or(Color::DarkGray);
        (text, color)
    } else {
        rating_cell(comp, metric::RELEASABILITY_RATING)
    }
}

/// A rating cell: letter grade colored by the rating palette, placeholder
/// in gray when the measure is absent
fn rating_cell(comp: &SubComponent, metric_key: &str) -> (String, Color) {
    let raw = comp.measures.get(metric_key);
    let text = format_measure(MetricType::Rating, raw);
    let color = raw
        .and_then(rating_letter)
        .and_then(RatingColor::from_letter)
        .map(RatingColor::to_color)
        .unwrap_or(Color::DarkGray);
    (text, color)
}

/// Size cell: compact ncloc value (right-aligned into a fixed column) and
/// the bar width in units
fn ncloc_cell(comp: &SubComponent, max: u64) -> (String, u16) {
    let value = format!(
        "{:>8}",
        format_measure(MetricType::ShortInt, comp.measures.get(metric::NCLOC))
    );
    let ncloc = comp.measures.number_or_zero(metric::NCLOC);
    (value, bar_width(ncloc, max))
}

/// Footer text: localized "x of y shown" with exact counts
fn footer_text(snapshot: &PortfolioSnapshot) -> String {
    translate_with_parameters(
        "x_of_y_shown",
        &[
            &format_int(snapshot.sub_components.len() as u64),
            &format_int(snapshot.total() as u64),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folioboard_core::format::NO_VALUE;
    use folioboard_core::models::Measures;

    fn project(name: &str, branch: Option<&str>, measures: Measures) -> SubComponent {
        SubComponent {
            key: format!("org:{}", name.to_lowercase()),
            ref_key: None,
            name: name.into(),
            qualifier: Qualifier::Project,
            branch: branch.map(String::from),
            measures,
        }
    }

    #[test]
    fn identity_shows_branch_name_when_present() {
        let comp = project("Gamma", Some("feature/login"), Measures::default());
        let line = identity_line(&comp, &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Gamma"));
        assert!(text.contains("feature/login"));
        assert!(!text.contains("main branch"));
    }

    #[test]
    fn identity_shows_main_branch_badge_when_absent() {
        let comp = project("Gamma", None, Measures::default());
        let line = identity_line(&comp, &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[main branch]"));
    }

    #[test]
    fn container_qualifiers_get_no_branch_badge() {
        let comp = SubComponent {
            key: "org:sub".into(),
            ref_key: None,
            name: "Sub".into(),
            qualifier: Qualifier::SubPortfolio,
            branch: None,
            measures: Measures::default(),
        };
        let line = identity_line(&comp, &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!text.contains("main branch"));
    }

    #[test]
    fn projects_release_cell_is_gate_status() {
        let comp = project(
            "P",
            None,
            Measures::from([(metric::ALERT_STATUS, "ERROR")]),
        );
        let (text, color) = release_cell(&comp);
        assert_eq!(text, "Failed");
        assert_eq!(color, Color::Red);
    }

    #[test]
    fn containers_release_cell_is_releasability_rating() {
        let comp = SubComponent {
            key: "org:app".into(),
            ref_key: None,
            name: "App".into(),
            qualifier: Qualifier::Application,
            branch: None,
            measures: Measures::from([(metric::RELEASABILITY_RATING, "2.0")]),
        };
        let (text, color) = release_cell(&comp);
        assert_eq!(text, "B");
        assert_eq!(color, Color::LightGreen);
    }

    #[test]
    fn missing_rating_renders_gray_placeholder() {
        let comp = project("P", None, Measures::default());
        let (text, color) = rating_cell(&comp, metric::SECURITY_RATING);
        assert_eq!(text, NO_VALUE);
        assert_eq!(color, Color::DarkGray);
    }

    #[test]
    fn ncloc_cell_scales_against_max() {
        let comp = project("P", None, Measures::from([(metric::NCLOC, "50")]));
        let (value, width) = ncloc_cell(&comp, 100);
        assert_eq!(value.trim(), "50");
        assert_eq!(width, 25);
    }

    #[test]
    fn zero_ncloc_draws_no_bar() {
        let comp = project("P", None, Measures::from([(metric::NCLOC, "0")]));
        let (_, width) = ncloc_cell(&comp, 100);
        assert_eq!(width, 0);

        // absent ncloc behaves the same, but keeps the placeholder text
        let comp = project("P", None, Measures::default());
        let (value, width) = ncloc_cell(&comp, 100);
        assert_eq!(value.trim(), NO_VALUE);
        assert_eq!(width, 0);
    }

    #[test]
    fn footer_text_carries_exact_counts() {
        let snapshot = PortfolioSnapshot {
            component: "org:folio".into(),
            name: None,
            total: Some(1280),
            sub_components: vec![project("P", None, Measures::default())],
        };
        assert_eq!(footer_text(&snapshot), "1 of 1,280 shown");
    }

    #[test]
    fn selection_clamps_to_row_count() {
        use crossterm::event::KeyCode;

        let mut view = WorstProjects::new();
        view.handle_key(KeyCode::Down, 3);
        view.handle_key(KeyCode::Down, 3);
        view.handle_key(KeyCode::Down, 3);
        assert_eq!(view.table_state.selected(), Some(2));
        view.handle_key(KeyCode::Up, 3);
        assert_eq!(view.table_state.selected(), Some(1));
        view.handle_key(KeyCode::Home, 3);
        assert_eq!(view.table_state.selected(), Some(0));
    }
}
