//! Application state and top-level frame layout

use crate::theme::Theme;
use crate::worst_projects::WorstProjects;
use folioboard_core::l10n::translate;
use folioboard_core::PortfolioSnapshot;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// TUI application state: one loaded snapshot plus view state
pub struct App {
    snapshot: PortfolioSnapshot,
    theme: Theme,
    worst_projects: WorstProjects,
    pub should_quit: bool,
}

impl App {
    pub fn new(snapshot: PortfolioSnapshot) -> Self {
        Self {
            snapshot,
            theme: Theme::default(),
            worst_projects: WorstProjects::new(),
            should_quit: false,
        }
    }

    /// Handle key input; quit keys are global, the rest goes to the view
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) {
        use crossterm::event::KeyCode;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            other => self
                .worst_projects
                .handle_key(other, self.snapshot.sub_components.len()),
        }
    }

    /// Draw one frame: title bar, ranked table, key hints
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Min(0),    // table
                Constraint::Length(1), // key hints
            ])
            .split(frame.area());

        self.render_title(frame, chunks[0]);
        self.worst_projects
            .render(frame, chunks[1], &self.snapshot, &self.theme);
        self.render_hints(frame, chunks[2]);
    }

    fn render_title(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let name = self
            .snapshot
            .name
            .as_deref()
            .unwrap_or(&self.snapshot.component);
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", name),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({})", translate("qualifier.VW")),
                Style::default().fg(self.theme.note),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }

    fn render_hints(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let hints = Line::from(Span::styled(
            " ↑/↓ select   q quit",
            Style::default().fg(self.theme.note),
        ));
        frame.render_widget(Paragraph::new(hints), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            component: "org:folio".into(),
            name: Some("Folio".into()),
            total: None,
            sub_components: Vec::new(),
        }
    }

    #[test]
    fn quit_keys_set_the_flag() {
        let mut app = App::new(snapshot());
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(snapshot());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn other_keys_do_not_quit() {
        let mut app = App::new(snapshot());
        app.handle_key(KeyCode::Down);
        assert!(!app.should_quit);
    }
}
