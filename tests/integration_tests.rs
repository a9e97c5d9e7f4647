//! Integration Tests for mealsteps
//!
//! These tests verify:
//! - Config file save/load/validate round-trips through the filesystem
//! - Full-frame rendering of the search and recipe pages
//! - The CLI surface parses every subcommand

use mealsteps::app::{AppState, SearchStatus};
use mealsteps::cli::{Cli, Commands};
use mealsteps::config_file::{AppConfig, DEFAULT_API_BASE_URL};
use mealsteps::error::MealStepsError;
use mealsteps::meal::{MealDetail, MealSummary};
use mealsteps::ui::UiRenderer;
use ratatui::{Terminal, backend::TestBackend};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Config File Tests
// =============================================================================

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mealsteps.json");

    let config = AppConfig {
        api_base_url: "http://localhost:8080/api/json/v1/1".to_string(),
        timeout_secs: 5,
    };
    config.save_to_file(&path).unwrap();

    let loaded = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_config_out_of_range_timeout_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slow.json");
    fs::write(&path, r#"{"timeout_secs": 600}"#).unwrap();

    let config = AppConfig::load_from_file(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, MealStepsError::Config(_)));
    assert!(err.to_string().contains("between 1 and 120"));
}

#[test]
fn test_config_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let err = AppConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.json"));
}

#[test]
fn test_config_invalid_json_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(AppConfig::load_from_file(&path).is_err());
}

#[test]
fn test_config_empty_object_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();

    let config = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert!(config.validate().is_ok());
}

// =============================================================================
// Rendering Tests
// =============================================================================

fn render_to_string(state: &AppState) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let renderer = UiRenderer::new();
    terminal.draw(|f| renderer.render(f, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_search_page_shows_loading_placeholder() {
    let mut state = AppState::default();
    state.query = "chicken".to_string();
    state.begin_search();

    let screen = render_to_string(&state);
    assert!(screen.contains("chicken"));
    assert!(screen.contains("Loading recipes..."));
}

#[test]
fn test_search_page_handles_oversized_query() {
    let mut state = AppState::default();
    state.query = "a".repeat(usize::from(u16::MAX) + 10);

    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let renderer = UiRenderer::new();
    terminal.draw(|f| renderer.render(f, &state)).unwrap();

    // Cursor is clamped to the last column inside the input box
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!(cursor.x, 98);
    assert_eq!(cursor.y, 4);
}

#[test]
fn test_search_page_lists_results() {
    let mut state = AppState::default();
    state.apply_search_results(
        "chicken",
        Ok(vec![MealSummary {
            id: "52940".to_string(),
            name: "Brown Stew Chicken".to_string(),
            thumbnail: None,
        }]),
    );
    assert_eq!(state.search_status, SearchStatus::Loaded);

    let screen = render_to_string(&state);
    assert!(screen.contains("Brown Stew Chicken"));
    assert!(screen.contains("Recipes (1)"));
}

#[test]
fn test_recipe_page_shows_step_position_and_ingredients() {
    let meal: MealDetail = serde_json::from_value(json!({
        "idMeal": "52772",
        "strMeal": "Teriyaki Chicken",
        "strInstructions": "Preheat the oven. Mix the sauce. Bake it.",
        "strIngredient1": "Soy sauce",
        "strMeasure1": "3/4 cup"
    }))
    .unwrap();

    let mut state = AppState::default();
    state.show_recipe(&meal);
    state.next_step();

    let screen = render_to_string(&state);
    assert!(screen.contains("Teriyaki Chicken"));
    assert!(screen.contains("Step 2 of 3"));
    assert!(screen.contains("Mix the sauce."));
    assert!(screen.contains("3/4 cup Soy sauce"));
    assert!(screen.contains("All steps"));
}

#[test]
fn test_recipe_page_hides_step_list_when_toggled() {
    let meal: MealDetail = serde_json::from_value(json!({
        "idMeal": "1",
        "strMeal": "Toast",
        "strInstructions": "Toast the bread."
    }))
    .unwrap();

    let mut state = AppState::default();
    state.show_recipe(&meal);
    state.toggle_all_steps();

    let screen = render_to_string(&state);
    assert!(screen.contains("Step 1 of 1"));
    assert!(!screen.contains("All steps"));
}

// =============================================================================
// CLI Tests
// =============================================================================

#[test]
fn test_cli_parses_every_subcommand() {
    use clap::Parser;

    let cases: &[&[&str]] = &[
        &["mealsteps", "browse", "--ingredient", "beef"],
        &["mealsteps", "search", "beef"],
        &["mealsteps", "show", "52772", "--format", "json"],
        &["mealsteps", "steps", "instructions.txt"],
        &["mealsteps", "validate", "config.json"],
    ];

    for args in cases {
        let cli = Cli::try_parse_from(*args).unwrap();
        assert!(cli.command.is_some(), "no command parsed for {:?}", args);
    }

    let cli = Cli::try_parse_from(["mealsteps", "steps"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Steps { file: None })));
}
