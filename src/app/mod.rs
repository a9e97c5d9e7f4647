//! Application module
//!
//! Contains the event loop that turns terminal events into state transitions.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, Focus, etc.)
//! - Main module - App struct, key handling and background fetches
//!
//! Network calls run on short-lived threads and report back over an mpsc
//! channel that the loop drains every frame. There is no cancellation: if an
//! older request resolves after a newer one, its result is what ends up on
//! screen.

mod state;

pub use state::{
    AppMode, AppState, Focus, MSG_EMPTY_QUERY, MSG_FAILED, MSG_LOADING, MSG_NO_RESULTS,
    MSG_WELCOME, RecipeView, SearchStatus,
};

use crate::api::MealSource;
use crate::error::Result;
use crate::meal::{MealDetail, MealSummary};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Messages sent from fetch threads to the main UI thread
#[derive(Debug)]
pub enum FetchMessage {
    /// A search finished (successfully or not)
    SearchResults {
        ingredient: String,
        result: Result<Vec<MealSummary>>,
    },
    /// A meal lookup finished
    Recipe {
        id: String,
        result: Result<Option<MealDetail>>,
    },
}

/// Main application struct
pub struct App {
    state: AppState,
    source: Arc<dyn MealSource>,
    ui_renderer: UiRenderer,
    /// Channel sender for fetch results (cloned to threads)
    fetch_tx: Sender<FetchMessage>,
    /// Channel receiver for fetch results (polled in main loop)
    fetch_rx: Receiver<FetchMessage>,
}

impl App {
    /// Create a new application instance
    pub fn new(source: Arc<dyn MealSource>) -> Self {
        info!("Creating new App instance");
        let (fetch_tx, fetch_rx) = mpsc::channel();

        Self {
            state: AppState::default(),
            source,
            ui_renderer: UiRenderer::new(),
            fetch_tx,
            fetch_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Fill in the query and start a search, as if typed and submitted.
    pub fn search(&mut self, ingredient: &str) {
        self.state.query = ingredient.to_string();
        self.submit_search();
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.poll_fetch_messages();

            terminal.draw(|f| self.ui_renderer.render(f, &self.state))?;

            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        break; // Exit requested
                    }
                }
            }
        }

        info!("Main application loop finished");
        Ok(())
    }

    /// Apply every fetch result that has arrived, without blocking.
    pub fn poll_fetch_messages(&mut self) {
        while let Ok(msg) = self.fetch_rx.try_recv() {
            self.apply_fetch_message(msg);
        }
    }

    /// Block until one fetch result arrives or `timeout` passes.
    ///
    /// Returns whether a message was applied.
    pub fn wait_for_fetch(&mut self, timeout: Duration) -> bool {
        match self.fetch_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.apply_fetch_message(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn apply_fetch_message(&mut self, msg: FetchMessage) {
        match msg {
            FetchMessage::SearchResults { ingredient, result } => {
                self.state.apply_search_results(&ingredient, result);
            }
            FetchMessage::Recipe { id, result } => {
                self.state.apply_recipe(&id, result);
            }
        }
    }

    /// Handle one key press. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            info!("Ctrl+C pressed, exiting");
            return true;
        }

        match self.state.mode {
            AppMode::Search => self.handle_search_key(key_event),
            AppMode::Recipe => {
                self.handle_recipe_key(key_event);
                false
            }
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) -> bool {
        match (self.state.focus, key_event.code) {
            (_, KeyCode::Esc) => return true,
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) => self.state.toggle_focus(),

            (Focus::Input, KeyCode::Enter) => self.submit_search(),
            (Focus::Input, KeyCode::Down) => self.state.toggle_focus(),

            (Focus::Results, KeyCode::Enter) => self.open_selected(),
            (Focus::Results, KeyCode::Down) => self.state.select_next_result(),
            (Focus::Results, KeyCode::Up) => self.state.select_previous_result(),

            (_, KeyCode::Backspace) => {
                self.state.focus = Focus::Input;
                self.state.pop_query_char();
            }
            (_, KeyCode::Char(c)) => {
                self.state.focus = Focus::Input;
                self.state.push_query_char(c);
            }
            _ => {}
        }
        false
    }

    fn handle_recipe_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                if !self.state.next_step() {
                    debug!("Already on the last step");
                }
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                if !self.state.previous_step() {
                    debug!("Already on the first step");
                }
            }
            KeyCode::Char('a') => self.state.toggle_all_steps(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.state.back_to_search();
            }
            _ => {}
        }
    }

    fn submit_search(&mut self) {
        let Some(ingredient) = self.state.begin_search() else {
            return;
        };
        info!("Searching recipes for {:?}", ingredient);

        let tx = self.fetch_tx.clone();
        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            let result = source.search_by_ingredient(&ingredient);
            // Receiver dropped means the app is shutting down
            let _ = tx.send(FetchMessage::SearchResults { ingredient, result });
        });
    }

    fn open_selected(&mut self) {
        let Some(id) = self.state.begin_lookup() else {
            return;
        };
        info!("Fetching details for meal {}", id);

        let tx = self.fetch_tx.clone();
        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            let result = source.lookup(&id);
            let _ = tx.send(FetchMessage::Recipe { id, result });
        });
    }
}
