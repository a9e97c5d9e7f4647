//! Application state definitions
//!
//! Contains the state types for the application (AppState, AppMode, Focus,
//! SearchStatus, RecipeView) and the pure transitions the event loop drives.
//! Nothing in here touches the terminal or the network.

use tracing::{debug, warn};

use crate::error::Result;
use crate::meal::{MealDetail, MealSummary};
use crate::navigator::{RenderState, StepNavigator};

pub const MSG_WELCOME: &str = "Type an ingredient and press Enter to search";
pub const MSG_EMPTY_QUERY: &str = "Please enter an ingredient.";
pub const MSG_LOADING: &str = "Loading recipes...";
pub const MSG_NO_RESULTS: &str = "No recipes found.";
pub const MSG_FAILED: &str = "Something went wrong.";

/// Which page is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Ingredient input and result cards
    Search,
    /// Recipe detail with the step viewer
    Recipe,
}

/// Which search-page widget receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Input,
    Results,
}

/// Outcome of the most recent search, shown in place of the result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    Idle,
    Loading,
    NoResults,
    Loaded,
    Failed,
}

impl SearchStatus {
    /// Placeholder text for statuses that have no results to show.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Loaded => None,
            Self::Loading => Some(MSG_LOADING),
            Self::NoResults => Some(MSG_NO_RESULTS),
            Self::Failed => Some(MSG_FAILED),
        }
    }
}

/// Display data for the recipe page, built once per selected meal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeView {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    /// Ingredient lines, e.g. "2 cups Flour"
    pub ingredients: Vec<String>,
}

impl RecipeView {
    pub fn from_meal(meal: &MealDetail) -> Self {
        Self {
            id: meal.id.clone(),
            title: meal.display_name().to_string(),
            thumbnail: meal.thumbnail_url().to_string(),
            ingredients: meal.ingredients().iter().map(|i| i.display()).collect(),
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current page
    pub mode: AppMode,
    /// Focused widget on the search page
    pub focus: Focus,
    /// Ingredient being typed
    pub query: String,
    /// Cards from the last search
    pub results: Vec<MealSummary>,
    /// Highlighted card
    pub selected_result: usize,
    /// Outcome of the last search
    pub search_status: SearchStatus,
    /// Recipe page contents, present only in `AppMode::Recipe`
    pub recipe: Option<RecipeView>,
    /// Step viewer state for the open recipe
    pub navigator: StepNavigator,
    /// Whether the full step list is shown under the viewer
    pub show_all_steps: bool,
    /// Status message for user feedback
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Search,
            focus: Focus::Input,
            query: String::new(),
            results: Vec::new(),
            selected_result: 0,
            search_status: SearchStatus::Idle,
            recipe: None,
            navigator: StepNavigator::default(),
            show_all_steps: true,
            status_message: MSG_WELCOME.to_string(),
        }
    }
}

impl AppState {
    /// Validate the query and switch to the loading placeholder.
    ///
    /// Returns the trimmed ingredient to fetch, or `None` (with a status
    /// message) when the query is blank.
    pub fn begin_search(&mut self) -> Option<String> {
        let ingredient = self.query.trim().to_string();
        if ingredient.is_empty() {
            self.status_message = MSG_EMPTY_QUERY.to_string();
            return None;
        }

        self.results.clear();
        self.selected_result = 0;
        self.search_status = SearchStatus::Loading;
        self.status_message = format!("Searching for {}...", ingredient);
        Some(ingredient)
    }

    /// Install the outcome of a search.
    pub fn apply_search_results(&mut self, ingredient: &str, result: Result<Vec<MealSummary>>) {
        match result {
            Ok(meals) if meals.is_empty() => {
                self.results.clear();
                self.search_status = SearchStatus::NoResults;
                self.status_message = MSG_NO_RESULTS.to_string();
            }
            Ok(meals) => {
                self.status_message = format!("{} recipes with {}", meals.len(), ingredient);
                self.results = meals;
                self.selected_result = 0;
                self.search_status = SearchStatus::Loaded;
                self.focus = Focus::Results;
            }
            Err(e) => {
                warn!("Search for {:?} failed: {}", ingredient, e);
                self.results.clear();
                self.search_status = SearchStatus::Failed;
                self.status_message = MSG_FAILED.to_string();
            }
        }
    }

    /// The highlighted search result, if any.
    pub fn selected_meal(&self) -> Option<&MealSummary> {
        self.results.get(self.selected_result)
    }

    /// Id of the highlighted meal, announcing the lookup in the status line.
    pub fn begin_lookup(&mut self) -> Option<String> {
        let (id, name) = self
            .selected_meal()
            .map(|meal| (meal.id.clone(), meal.name.clone()))?;
        self.status_message = format!("Loading {}...", name);
        Some(id)
    }

    /// Install the outcome of a meal lookup.
    ///
    /// Unknown ids and failures leave the current page as it is.
    pub fn apply_recipe(&mut self, id: &str, result: Result<Option<MealDetail>>) {
        match result {
            Ok(Some(meal)) => self.show_recipe(&meal),
            Ok(None) => {
                debug!("Meal {} not found, staying on current page", id);
                self.status_message = format!("Meal {} not found", id);
            }
            Err(e) => {
                warn!("Error fetching details for meal {}: {}", id, e);
                self.status_message = format!("Error fetching details: {}", e);
            }
        }
    }

    /// Open the recipe page for a meal, replacing any previous recipe.
    pub fn show_recipe(&mut self, meal: &MealDetail) {
        let view = RecipeView::from_meal(meal);
        self.navigator.reset(meal.steps());
        self.status_message = format!("{} ({} steps)", view.title, self.navigator.len());
        self.recipe = Some(view);
        self.mode = AppMode::Recipe;
    }

    /// Leave the recipe page; its steps are discarded.
    pub fn back_to_search(&mut self) {
        self.recipe = None;
        self.navigator.reset(Vec::new());
        self.mode = AppMode::Search;
        self.status_message = MSG_WELCOME.to_string();
    }

    pub fn next_step(&mut self) -> bool {
        self.navigator.next()
    }

    pub fn previous_step(&mut self) -> bool {
        self.navigator.previous()
    }

    /// Render state of the step viewer.
    pub fn render_state(&self) -> RenderState {
        self.navigator.render_state()
    }

    pub fn select_next_result(&mut self) {
        if self.selected_result + 1 < self.results.len() {
            self.selected_result += 1;
        }
    }

    pub fn select_previous_result(&mut self) {
        self.selected_result = self.selected_result.saturating_sub(1);
    }

    /// Switch focus between the input and the result list.
    ///
    /// The list can only take focus when it has something in it.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.results.is_empty() => Focus::Results,
            _ => Focus::Input,
        };
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    pub fn toggle_all_steps(&mut self) {
        self.show_all_steps = !self.show_all_steps;
    }
}
