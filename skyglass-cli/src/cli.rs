use std::fmt;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use skyglass_core::{
    Config, PlaceSuggestion, SearchPhase, SearchSession, WeatherReport,
    autocomplete::AutocompletePhase, provider_from_config, search::WeatherSearchController,
};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyglass", version, about = "Current weather for any city")]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London" or "Paris,FR".
        city: String,

        /// Display temperatures in Fahrenheit.
        #[arg(long)]
        fahrenheit: bool,
    },

    /// List place suggestions for a partial name.
    Suggest {
        /// At least three characters of a place name.
        query: String,
    },

    /// Search interactively with suggestions.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, fahrenheit } => show(&city, fahrenheit).await,
            Command::Suggest { query } => suggest(&query).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    // Read the file directly so an env override is never written back.
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;

    let key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(key.to_string());
    config.save_to(&path)?;
    println!("Saved API key to {}", path.display());
    Ok(())
}

async fn show(city: &str, fahrenheit: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let mut search = WeatherSearchController::new(provider);
    if fahrenheit {
        search.toggle_unit();
    }

    if let Err(err) = search.search_by_name(city).await {
        tracing::debug!(error = %err, "show failed");
        anyhow::bail!("{}", err.user_message());
    }

    if let Some(weather) = search.weather() {
        let report = WeatherReport::new(weather, search.query(), search.unit(), Local::now());
        view::print_report(&report, search.unit());
    }
    Ok(())
}

async fn suggest(query: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let mut session = SearchSession::new(provider, &config);

    session.type_query(query);
    if session.state().autocomplete == AutocompletePhase::Idle {
        println!("Type at least 3 characters to get suggestions.");
        return Ok(());
    }

    session.settle_suggestions().await;
    view::print_suggestions(session.state().suggestions);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

enum FormChoice {
    Place(PlaceSuggestion),
    ByName(String),
}

impl fmt::Display for FormChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormChoice::Place(place) => write!(f, "{place}"),
            FormChoice::ByName(name) => write!(f, "Search \"{name}\""),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultAction {
    ToggleUnit,
    NewSearch,
    Quit,
}

impl fmt::Display for ResultAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResultAction::ToggleUnit => "Switch °C / °F",
            ResultAction::NewSearch => "New search",
            ResultAction::Quit => "Quit",
        })
    }
}

async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let mut session = SearchSession::new(provider, &config);

    loop {
        let step = match session.state().phase {
            SearchPhase::NoSearch | SearchPhase::Error => search_form(&mut session).await?,
            SearchPhase::Success => result_screen(&mut session)?,
        };
        if step == Step::Quit {
            break;
        }
    }
    Ok(())
}

async fn search_form(session: &mut SearchSession) -> anyhow::Result<Step> {
    let state = session.state();
    if let Some(message) = state.error_message {
        println!("! {message}");
    }
    let initial = state.query.to_string();

    let text = match Text::new("City:")
        .with_initial_value(&initial)
        .with_help_message("Esc to quit")
        .prompt()
    {
        Ok(text) => text,
        Err(err) if is_cancel(&err) => return Ok(Step::Quit),
        Err(err) => return Err(err).context("Failed to read city name"),
    };

    session.type_query(&text);
    session.settle_suggestions().await;

    let suggestions = session.state().suggestions.to_vec();
    let result = if suggestions.is_empty() {
        session.submit().await
    } else {
        let mut options: Vec<FormChoice> =
            suggestions.into_iter().map(FormChoice::Place).collect();
        options.push(FormChoice::ByName(text.trim().to_string()));

        match Select::new("Pick a place:", options).prompt() {
            Ok(FormChoice::Place(place)) => session.search_place(&place).await,
            Ok(FormChoice::ByName(_)) => session.submit().await,
            Err(err) if is_cancel(&err) => return Ok(Step::Continue),
            Err(err) => return Err(err).context("Failed to read selection"),
        }
    };

    // The message is kept in session state and shown on the next form.
    if let Err(err) = result {
        tracing::debug!(error = %err, "search failed");
    }
    Ok(Step::Continue)
}

fn result_screen(session: &mut SearchSession) -> anyhow::Result<Step> {
    let state = session.state();
    let Some(weather) = state.weather else {
        return Ok(Step::Continue);
    };
    let unit = state.display_unit;
    let report = WeatherReport::new(weather, state.query, unit, Local::now());
    view::print_report(&report, unit);

    let actions = vec![ResultAction::ToggleUnit, ResultAction::NewSearch, ResultAction::Quit];
    let action = match Select::new("Next:", actions).prompt() {
        Ok(action) => action,
        Err(err) if is_cancel(&err) => ResultAction::Quit,
        Err(err) => return Err(err).context("Failed to read action"),
    };

    match action {
        ResultAction::ToggleUnit => session.toggle_unit(),
        ResultAction::NewSearch => session.reset(),
        ResultAction::Quit => return Ok(Step::Quit),
    }
    Ok(Step::Continue)
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}
