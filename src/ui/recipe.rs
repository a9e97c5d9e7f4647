//! Recipe page rendering: ingredients, step viewer, progress and step list

use super::header::HeaderRenderer;
use crate::app::AppState;
use crate::navigator::RenderState;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Render the recipe page in the specified area
pub fn render_recipe_page(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let Some(recipe) = state.recipe.as_ref() else {
        header.render_title(f, area, "Recipe");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Thumbnail reference
            Constraint::Min(8),    // Body
        ])
        .split(area);

    header.render_title(f, chunks[0], &recipe.title);
    let thumb = Paragraph::new(Span::styled(
        format!(" {}", recipe.thumbnail),
        Styles::text_muted(),
    ));
    f.render_widget(thumb, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[2]);

    render_ingredients(f, &recipe.ingredients, body[0]);
    render_step_viewer(f, state, body[1]);
}

fn render_ingredients(f: &mut Frame, ingredients: &[String], area: Rect) {
    let items: Vec<ListItem> = ingredients
        .iter()
        .map(|line| ListItem::new(Line::from(vec![
            Span::styled("• ", Styles::text_muted()),
            Span::styled(line.as_str(), Styles::text()),
        ])))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(false))
            .title(" Ingredients "),
    );
    f.render_widget(list, area);
}

fn render_step_viewer(f: &mut Frame, state: &AppState, area: Rect) {
    let render = state.render_state();

    let mut constraints = vec![
        Constraint::Length(3), // Progress
        Constraint::Min(4),    // Current step
        Constraint::Length(1), // Buttons
    ];
    if state.show_all_steps {
        constraints.push(Constraint::Percentage(45));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_progress(f, &render, chunks[0]);

    let step = Paragraph::new(render.text.as_str())
        .style(Styles::text())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(true))
                .title(format!(" {} ", render.position)),
        );
    f.render_widget(step, chunks[1]);

    render_buttons(f, &render, chunks[2]);

    if state.show_all_steps {
        render_all_steps(f, state, chunks[3]);
    }
}

fn render_progress(f: &mut Frame, render: &RenderState, area: Rect) {
    let percent = render.progress_percent.round().clamp(0.0, 100.0) as u16;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Styles::gauge())
        .percent(percent)
        .label(render.position.as_str());
    f.render_widget(gauge, area);
}

fn render_buttons(f: &mut Frame, render: &RenderState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" ◀ Previous ", Styles::button(!render.is_first)),
        Span::raw("   "),
        Span::styled(" Next ▶ ", Styles::button(!render.is_last)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_all_steps(f: &mut Frame, state: &AppState, area: Rect) {
    let current = state.navigator.current_index();
    let items: Vec<ListItem> = state
        .navigator
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            ListItem::new(Line::from(Span::styled(
                format!("{:>2}. {}", i + 1, step),
                Styles::step(i, current),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(false))
            .title(" All steps "),
    );
    f.render_widget(list, area);
}
