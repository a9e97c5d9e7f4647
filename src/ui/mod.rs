//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title bar and navigation bar rendering
//! - `search` - Ingredient input and result list
//! - `recipe` - Recipe detail page with the step viewer
//!
//! Rendering only reads [`AppState`]; it never mutates it.

mod header;
mod recipe;
mod search;

use crate::app::{AppMode, AppState};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub use header::{HeaderRenderer, nav_hints};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for each page.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        match state.mode {
            AppMode::Search => {
                search::render_search_page(f, state, main_chunks[0], &self.header);
            }
            AppMode::Recipe => {
                recipe::render_recipe_page(f, state, main_chunks[0], &self.header);
            }
        }

        header::render_status_line(f, state, main_chunks[1]);
        header::render_nav_bar(f, state, main_chunks[2]);
    }
}
