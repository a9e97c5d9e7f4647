//! Title, status line and navigation bar rendering

use crate::app::{AppMode, AppState, Focus, MSG_EMPTY_QUERY, MSG_FAILED};
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the boxed page title shared by both pages
pub struct HeaderRenderer {
    app_name: &'static str,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            app_name: "mealsteps",
        }
    }

    /// Render a centered title inside a bordered box
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(false))
            .title(Span::styled(format!(" {} ", self.app_name), Styles::text_muted()));

        let paragraph = Paragraph::new(Line::from(Span::styled(title.to_string(), Styles::title())))
            .alignment(Alignment::Center)
            .block(block);

        f.render_widget(paragraph, area);
    }
}

/// Key hints for the current page and focus, as `(key, action)` pairs.
pub fn nav_hints(mode: AppMode, focus: Focus) -> Vec<(&'static str, &'static str)> {
    match (mode, focus) {
        (AppMode::Search, Focus::Input) => vec![
            ("Enter", "search"),
            ("Tab/↓", "results"),
            ("Esc", "quit"),
        ],
        (AppMode::Search, Focus::Results) => vec![
            ("↑/↓", "select"),
            ("Enter", "open"),
            ("Tab", "edit query"),
            ("Esc", "quit"),
        ],
        (AppMode::Recipe, _) => vec![
            ("←/p", "previous"),
            ("→/n", "next"),
            ("a", "all steps"),
            ("Esc/b", "back"),
        ],
    }
}

/// Render the status message line
pub fn render_status_line(f: &mut Frame, state: &AppState, area: Rect) {
    let style = match state.status_message.as_str() {
        MSG_FAILED => Styles::error(),
        MSG_EMPTY_QUERY => Styles::warning(),
        _ => Styles::text_secondary(),
    };
    let line = Line::from(Span::styled(format!(" {}", state.status_message), style));
    f.render_widget(Paragraph::new(line), area);
}

/// Render the navigation bar with key hints for the current mode
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in nav_hints(state.mode, state.focus).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(key, Styles::nav_key()));
        spans.push(Span::styled(format!(" {}", action), Styles::nav_hint()));
    }
    spans.push(Span::styled("  │  ", Styles::nav_hint()));
    spans.push(Span::styled("Ctrl+C", Styles::nav_key()));
    spans.push(Span::styled(" quit", Styles::nav_hint()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_hints_ignore_focus() {
        assert_eq!(
            nav_hints(AppMode::Recipe, Focus::Input),
            nav_hints(AppMode::Recipe, Focus::Results)
        );
    }

    #[test]
    fn test_search_hints_depend_on_focus() {
        let input = nav_hints(AppMode::Search, Focus::Input);
        let results = nav_hints(AppMode::Search, Focus::Results);
        assert!(input.iter().any(|(_, action)| *action == "search"));
        assert!(results.iter().any(|(_, action)| *action == "open"));
    }
}
