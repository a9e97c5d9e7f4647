//! mealsteps - Main entry point
//!
//! Launches the interactive recipe browser, or runs one of the headless
//! subcommands (search, show, steps, validate).

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{Read, stdout};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use mealsteps::cli::{Cli, Commands};
use mealsteps::meal::Ingredient;
use mealsteps::{
    App, AppConfig, MealDbClient, MealSource, MealStepsError, OutputFormat, extract_steps,
};

/// Initialize tracing.
///
/// Logs go to `log_file` when given. Without one, headless commands log to
/// stderr and the TUI logs nowhere, since stderr output would tear the
/// alternate screen.
fn init_tracing(log_file: Option<&Path>, tui_mode: bool) -> Result<()> {
    let default_level = if log_file.is_some() { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false) // Disable ANSI colors in log file
                .init();
        }
        None if tui_mode => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let Cli {
        config,
        api_url,
        timeout,
        log_file,
        command,
    } = Cli::parse_args();

    let tui_mode = matches!(command, None | Some(Commands::Browse { .. }));
    init_tracing(log_file.as_deref(), tui_mode)?;
    info!("mealsteps starting up");
    debug!("CLI arguments parsed");

    match command {
        Some(Commands::Validate { config }) => validate_config_file(&config),
        Some(Commands::Steps { file }) => print_steps(file.as_deref()),
        command => {
            let config = load_config(config.as_deref())?.with_overrides(api_url, timeout);
            config.validate()?;
            let client = MealDbClient::new(&config);
            info!("Using recipe API at {}", client.base_url());

            match command {
                Some(Commands::Search { ingredient, format }) => {
                    run_search(&client, &ingredient, format)
                }
                Some(Commands::Show { id, format }) => run_show(&client, &id, format),
                Some(Commands::Browse { ingredient }) => run_tui(Arc::new(client), ingredient),
                _ => {
                    info!("No command specified, launching recipe browser");
                    run_tui(Arc::new(client), None)
                }
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            AppConfig::load_from_file(path)
        }
        None => Ok(AppConfig::default()),
    }
}

fn validate_config_file(path: &Path) -> Result<()> {
    info!("Validating configuration file: {:?}", path);
    let config = AppConfig::load_from_file(path).inspect_err(|e| {
        error!("Failed to load configuration file: {}", e);
    })?;
    match config.validate() {
        Ok(()) => {
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {}", e);
            eprintln!("✗ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the extractor over a file (or stdin) and print numbered steps
fn print_steps(file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read instructions from {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read instructions from stdin")?;
            buf
        }
    };

    let steps = extract_steps(&text);
    info!("Extracted {} steps", steps.len());
    for (i, step) in steps.iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }
    Ok(())
}

fn run_search(source: &dyn MealSource, ingredient: &str, format: OutputFormat) -> Result<()> {
    let ingredient = ingredient.trim();
    if ingredient.is_empty() {
        return Err(MealStepsError::validation("Please enter an ingredient.").into());
    }

    let meals = source.search_by_ingredient(ingredient)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&meals)?),
        OutputFormat::Text if meals.is_empty() => println!("No recipes found."),
        OutputFormat::Text => {
            for meal in &meals {
                println!("{:>6}  {}", meal.id, meal.name);
            }
        }
    }
    Ok(())
}

/// JSON shape printed by `show --format json`
#[derive(Serialize)]
struct RecipeOutput<'a> {
    id: &'a str,
    title: &'a str,
    thumbnail: &'a str,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
}

fn run_show(source: &dyn MealSource, id: &str, format: OutputFormat) -> Result<()> {
    let Some(meal) = source.lookup(id)? else {
        eprintln!("✗ Meal {} not found", id);
        std::process::exit(1);
    };

    let output = RecipeOutput {
        id: &meal.id,
        title: meal.display_name(),
        thumbnail: meal.thumbnail_url(),
        ingredients: meal.ingredients(),
        steps: meal.steps(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => {
            println!("{}", output.title);
            if !output.thumbnail.is_empty() {
                println!("{}", output.thumbnail);
            }
            println!("\nIngredients:");
            for ingredient in &output.ingredients {
                println!("  - {}", ingredient.display());
            }
            println!("\nSteps:");
            for (i, step) in output.steps.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
        }
    }
    Ok(())
}

/// Run the interactive recipe browser
fn run_tui(source: Arc<dyn MealSource>, ingredient: Option<String>) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| MealStepsError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        MealStepsError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let result = (|| -> mealsteps::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)
            .map_err(|e| MealStepsError::terminal(format!("Failed to create terminal: {}", e)))?;

        let mut app = App::new(source);
        if let Some(ingredient) = ingredient.as_deref() {
            app.search(ingredient);
        }
        app.run(&mut terminal)
    })();

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
