//! Search page rendering: ingredient input and result cards

use super::header::HeaderRenderer;
use crate::app::{AppState, Focus};
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Render the search page in the specified area
pub fn render_search_page(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Ingredient input
            Constraint::Min(3),    // Results
        ])
        .split(area);

    header.render_title(f, chunks[0], "Find a recipe by ingredient");
    render_input(f, state, chunks[1]);
    render_results(f, state, chunks[2]);
}

fn render_input(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
        .title(" Ingredient ");

    let input = if state.query.is_empty() && !focused {
        Paragraph::new(Span::styled("e.g. chicken", Styles::text_muted()))
    } else {
        Paragraph::new(Span::styled(state.query.as_str(), Styles::text()))
    };
    f.render_widget(input.block(block), area);

    if focused {
        let typed = u16::try_from(state.query.chars().count()).unwrap_or(u16::MAX);
        let cursor_x = area.x.saturating_add(1).saturating_add(typed);
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        f.set_cursor_position((cursor_x.min(max_x), area.y.saturating_add(1)));
    }
}

fn render_results(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Results;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
        .title(format!(" Recipes ({}) ", state.results.len()));

    if let Some(placeholder) = state.search_status.placeholder() {
        let paragraph = Paragraph::new(Line::from(Span::styled(placeholder, Styles::text_secondary())))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .results
        .iter()
        .map(|meal| {
            let mut lines = vec![Line::from(Span::styled(meal.name.as_str(), Styles::text()))];
            if let Some(thumb) = meal.thumbnail.as_deref().filter(|t| !t.is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("  #{}  {}", meal.id, thumb),
                    Styles::text_muted(),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let highlight = if focused {
        Styles::selected()
    } else {
        Styles::unselected()
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(
        (!state.results.is_empty()).then_some(state.selected_result),
    );
    f.render_stateful_widget(list, area, &mut list_state);
}
