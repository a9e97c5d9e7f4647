//! Step-by-step instruction navigator
//!
//! Holds the extracted steps for the recipe on screen and the index of the
//! step being shown. All operations are total: moving past either end is a
//! no-op, and an empty step list still renders as "Step 1 of 1".
//!
//! # State Transitions
//!
//! ```text
//! reset(steps) -> index 0
//! next()       -> index + 1   (unless on the last step)
//! previous()   -> index - 1   (unless on the first step)
//! ```
//!
//! A single-step navigator is first and last at the same time, so both
//! directions are disabled.

use serde::Serialize;

/// Navigator state: the current step list and the index being shown.
///
/// # Invariants
///
/// - `current_index < max(1, steps.len())`
/// - `current_index` is 0 right after construction or `reset`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepNavigator {
    steps: Vec<String>,
    current_index: usize,
}

/// Display-ready snapshot derived from a [`StepNavigator`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    /// Text of the current step (empty when there are no steps)
    pub text: String,
    /// "Step {n} of {total}"
    pub position: String,
    /// Progress through the recipe, in `[0, 100]`
    pub progress_percent: f64,
    /// True when "previous" should be disabled
    pub is_first: bool,
    /// True when "next" should be disabled
    pub is_last: bool,
}

impl StepNavigator {
    /// Create a navigator positioned on the first step.
    pub fn new(steps: Vec<String>) -> Self {
        Self {
            steps,
            current_index: 0,
        }
    }

    /// Install a new step list, replacing the old one, and go back to step 1.
    pub fn reset(&mut self, steps: Vec<String>) {
        self.steps = steps;
        self.current_index = 0;
    }

    /// Advance one step. Returns `false` (and does nothing) on the last step.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.steps.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns `false` (and does nothing) on the first step.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Number of steps used for display; never less than 1.
    pub fn total(&self) -> usize {
        self.steps.len().max(1)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Text of the current step, or `""` when there are no steps.
    pub fn current_text(&self) -> &str {
        self.steps
            .get(self.current_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Compute the render state for the current position.
    pub fn render_state(&self) -> RenderState {
        let total = self.total();
        let index = self.current_index.min(total - 1);

        RenderState {
            text: self.current_text().to_string(),
            position: format!("Step {} of {}", index + 1, total),
            progress_percent: (index + 1) as f64 / total as f64 * 100.0,
            is_first: index == 0,
            is_last: index == total - 1,
        }
    }
}
