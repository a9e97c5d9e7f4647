//! mealsteps library
//!
//! Recipe lookup by ingredient with a step-by-step instruction viewer. The
//! core is pure: [`steps::extract_steps`] turns an instructions paragraph into
//! discrete steps and [`navigator::StepNavigator`] pages through them. The
//! rest is the shell around it (API client, TUI, CLI).

pub mod api;
pub mod app;
pub mod cli;
pub mod config_file;
pub mod error;
pub mod meal;
pub mod navigator;
pub mod steps;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use api::{MealDbClient, MealSource};
pub use app::{App, AppMode, AppState};
pub use config_file::AppConfig;
pub use error::{MealStepsError, Result};
pub use meal::{Ingredient, MealDetail, MealSummary};
pub use navigator::{RenderState, StepNavigator};
pub use steps::{extract_steps, normalize};
pub use types::OutputFormat;
