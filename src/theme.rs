//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used throughout the application.
//!
//! # Usage
//! ```rust
//! use mealsteps::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! // Use color constants
//! let style = Style::default().fg(Colors::PRIMARY);
//!
//! // Use pre-built styles
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
/// All colors should be defined here rather than hardcoded in components
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Gauge/progress bar background
    pub const BG_GAUGE: Color = Color::Rgb(40, 40, 50);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders, titles, highlights
    pub const PRIMARY: Color = Color::LightRed;

    /// Selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::LightRed;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Unselected list item
    pub const UNSELECTED: Color = Color::Gray;

    /// Progress bar fill
    pub const PROGRESS: Color = Color::Green;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Current step in the full step list
    pub const STEP_ACTIVE: Color = Color::Yellow;

    /// Steps already done
    pub const STEP_COMPLETE: Color = Color::Green;

    /// Steps still ahead
    pub const STEP_PENDING: Color = Color::Gray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
/// Use these instead of constructing styles inline for consistency
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a widget, depending on focus
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected list item
    pub fn unselected() -> Style {
        Style::default().fg(Colors::UNSELECTED)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Enabled/disabled button
    pub fn button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::FG_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::FG_MUTED)
        }
    }

    /// Progress gauge fill
    pub fn gauge() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_GAUGE)
    }

    /// Key hint in the navigation bar
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Key name in the navigation bar
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Entry in the full step list, relative to the current step
    pub fn step(index: usize, current: usize) -> Style {
        if index == current {
            Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else if index < current {
            Style::default().fg(Colors::STEP_COMPLETE)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        }
    }
}
