//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - Search validation and result handling
//! - Recipe page lifecycle (open, navigate, back)
//! - Key handling in App with an in-memory meal source

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mealsteps::app::{
    App, AppMode, AppState, Focus, MSG_EMPTY_QUERY, MSG_FAILED, MSG_NO_RESULTS, SearchStatus,
};
use mealsteps::error::{MealStepsError, Result};
use mealsteps::meal::{MealDetail, MealSummary};
use mealsteps::MealSource;
use serde_json::json;

// =============================================================================
// Fixtures
// =============================================================================

fn summary(id: &str, name: &str) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: Some(format!("https://img.example/{id}.jpg")),
    }
}

fn detail() -> MealDetail {
    serde_json::from_value(json!({
        "idMeal": "52940",
        "strMeal": "Brown Stew Chicken",
        "strMealThumb": "https://img.example/52940.jpg",
        "strInstructions": "Squeeze lime over chicken. Add the onions. Simmer for 30 minutes.",
        "strIngredient1": "Chicken",
        "strMeasure1": "1 whole",
        "strIngredient2": "Lime",
        "strMeasure2": "1"
    }))
    .unwrap()
}

/// In-memory meal source
struct FakeSource {
    meals: Vec<MealSummary>,
    detail: Option<MealDetail>,
    fail: bool,
}

impl FakeSource {
    fn with_meals() -> Self {
        Self {
            meals: vec![summary("52940", "Brown Stew Chicken"), summary("52850", "Chicken Couscous")],
            detail: Some(detail()),
            fail: false,
        }
    }
}

impl MealSource for FakeSource {
    fn search_by_ingredient(&self, _ingredient: &str) -> Result<Vec<MealSummary>> {
        if self.fail {
            return Err(MealStepsError::http("connection refused"));
        }
        Ok(self.meals.clone())
    }

    fn lookup(&self, _id: &str) -> Result<Option<MealDetail>> {
        if self.fail {
            return Err(MealStepsError::http("connection refused"));
        }
        Ok(self.detail.clone())
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

const WAIT: Duration = Duration::from_secs(2);

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_is_search_page() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Search);
    assert_eq!(state.focus, Focus::Input);
    assert_eq!(state.search_status, SearchStatus::Idle);
    assert!(state.recipe.is_none());
    assert!(state.navigator.is_empty());
}

// =============================================================================
// Search Transitions
// =============================================================================

#[test]
fn test_blank_query_is_rejected() {
    let mut state = AppState::default();
    state.query = "   ".to_string();
    assert_eq!(state.begin_search(), None);
    assert_eq!(state.status_message, MSG_EMPTY_QUERY);
    assert_eq!(state.search_status, SearchStatus::Idle);
}

#[test]
fn test_begin_search_trims_and_shows_loading() {
    let mut state = AppState::default();
    state.query = "  chicken ".to_string();
    assert_eq!(state.begin_search().as_deref(), Some("chicken"));
    assert_eq!(state.search_status, SearchStatus::Loading);
    assert_eq!(state.search_status.placeholder(), Some("Loading recipes..."));
}

#[test]
fn test_empty_results_show_no_recipes_placeholder() {
    let mut state = AppState::default();
    state.apply_search_results("unobtainium", Ok(Vec::new()));
    assert_eq!(state.search_status, SearchStatus::NoResults);
    assert_eq!(state.status_message, MSG_NO_RESULTS);
    assert_eq!(state.focus, Focus::Input);
}

#[test]
fn test_failed_search_shows_error_placeholder() {
    let mut state = AppState::default();
    state.apply_search_results("chicken", Err(MealStepsError::http("timeout")));
    assert_eq!(state.search_status, SearchStatus::Failed);
    assert_eq!(state.status_message, MSG_FAILED);
    assert!(state.results.is_empty());
}

#[test]
fn test_loaded_results_focus_the_list() {
    let mut state = AppState::default();
    state.apply_search_results("chicken", Ok(vec![summary("1", "A"), summary("2", "B")]));
    assert_eq!(state.search_status, SearchStatus::Loaded);
    assert_eq!(state.focus, Focus::Results);

    state.select_next_result();
    state.select_next_result();
    assert_eq!(state.selected_result, 1);
    state.select_previous_result();
    state.select_previous_result();
    assert_eq!(state.selected_result, 0);
}

#[test]
fn test_toggle_focus_needs_results() {
    let mut state = AppState::default();
    state.toggle_focus();
    assert_eq!(state.focus, Focus::Input);
}

// =============================================================================
// Recipe Lifecycle
// =============================================================================

#[test]
fn test_show_recipe_resets_navigator() {
    let mut state = AppState::default();
    state.show_recipe(&detail());

    assert_eq!(state.mode, AppMode::Recipe);
    assert_eq!(state.navigator.len(), 3);
    let render = state.render_state();
    assert_eq!(render.position, "Step 1 of 3");
    assert!(render.is_first);

    let recipe = state.recipe.as_ref().unwrap();
    assert_eq!(recipe.title, "Brown Stew Chicken");
    assert_eq!(recipe.ingredients, vec!["1 whole Chicken", "1 Lime"]);
}

#[test]
fn test_unknown_meal_keeps_current_page() {
    let mut state = AppState::default();
    state.apply_recipe("0", Ok(None));
    assert_eq!(state.mode, AppMode::Search);
    assert!(state.recipe.is_none());
}

#[test]
fn test_lookup_error_keeps_current_page() {
    let mut state = AppState::default();
    state.apply_recipe("52940", Err(MealStepsError::http("boom")));
    assert_eq!(state.mode, AppMode::Search);
    assert!(state.status_message.contains("boom"));
}

#[test]
fn test_back_to_search_discards_steps() {
    let mut state = AppState::default();
    state.show_recipe(&detail());
    state.next_step();
    state.back_to_search();

    assert_eq!(state.mode, AppMode::Search);
    assert!(state.recipe.is_none());
    assert!(state.navigator.is_empty());
    assert_eq!(state.navigator.current_index(), 0);
}

// =============================================================================
// App Key Handling
// =============================================================================

#[test]
fn test_full_search_and_cook_flow() {
    let mut app = App::new(Arc::new(FakeSource::with_meals()));

    type_text(&mut app, "chicken");
    assert_eq!(app.state().query, "chicken");
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.state().search_status, SearchStatus::Loading);

    assert!(app.wait_for_fetch(WAIT));
    assert_eq!(app.state().search_status, SearchStatus::Loaded);
    assert_eq!(app.state().results.len(), 2);
    assert_eq!(app.state().focus, Focus::Results);

    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.wait_for_fetch(WAIT));
    assert_eq!(app.state().mode, AppMode::Recipe);

    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Char('n')));
    app.handle_key_event(key(KeyCode::Right));
    let render = app.state().render_state();
    assert_eq!(render.position, "Step 3 of 3");
    assert!(render.is_last);

    app.handle_key_event(key(KeyCode::Left));
    assert_eq!(app.state().navigator.current_index(), 1);

    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.state().mode, AppMode::Search);
}

#[test]
fn test_enter_on_blank_query_does_not_fetch() {
    let mut app = App::new(Arc::new(FakeSource::with_meals()));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.state().status_message, MSG_EMPTY_QUERY);
    assert!(!app.wait_for_fetch(Duration::from_millis(50)));
}

#[test]
fn test_failed_fetch_surfaces_placeholder() {
    let source = FakeSource {
        fail: true,
        ..FakeSource::with_meals()
    };
    let mut app = App::new(Arc::new(source));
    app.search("chicken");

    assert!(app.wait_for_fetch(WAIT));
    assert_eq!(app.state().search_status, SearchStatus::Failed);
}

#[test]
fn test_escape_and_ctrl_c_exit() {
    let mut app = App::new(Arc::new(FakeSource::with_meals()));
    assert!(app.handle_key_event(key(KeyCode::Esc)));
    assert!(app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

#[test]
fn test_typing_from_results_returns_to_input() {
    let mut app = App::new(Arc::new(FakeSource::with_meals()));
    app.search("beef");
    assert!(app.wait_for_fetch(WAIT));
    assert_eq!(app.state().focus, Focus::Results);

    app.handle_key_event(key(KeyCode::Backspace));
    assert_eq!(app.state().focus, Focus::Input);
    assert_eq!(app.state().query, "bee");
}
