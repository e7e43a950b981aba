use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use forecast_core::{Config, ForecastScreen, Location, view::CandidateView};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use std::time::Duration;

use crate::output;

/// How long to wait for search results once the debounce window has passed.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Current weather and daily forecast for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show the forecast for the last selected city (Dubai on first run).
    Show,

    /// Search for a city, pick one and show its forecast.
    Search {
        /// Search text; prompted for when absent.
        query: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show => show().await,
            Command::Search { query } => search(query).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show() -> anyhow::Result<()> {
    let config = Config::load()?;
    let screen = ForecastScreen::from_config(&config)?;

    output::print_screen(&screen.screen().snapshot());
    screen.mount().await.context("Could not load the forecast")?;
    output::print_screen(&screen.screen().snapshot());

    Ok(())
}

async fn search(query: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut screen = ForecastScreen::from_config(&config)?;

    let query = match query {
        Some(query) => query,
        None => Text::new("Search for a city:").prompt().context("Failed to read search text")?,
    };

    if !screen.search().accepts_query(&query) {
        bail!(
            "Search text must be longer than {} characters.",
            config.screen.min_query_len
        );
    }

    let mut settled = screen.search().lookups_settled();
    screen.search().activate();
    screen.search_mut().on_text_changed(query.clone());

    let wait = config.screen.debounce() + LOOKUP_TIMEOUT;
    let answered = matches!(tokio::time::timeout(wait, settled.changed()).await, Ok(Ok(())));

    let state = screen.screen().snapshot();
    if !answered || state.visible_candidates().is_empty() {
        screen.unmount();
        bail!("No cities found for '{query}'.");
    }

    let choice = Select::new("Pick a city:", CandidateView::list(&state))
        .raw_prompt()
        .context("Failed to read selection")?;
    let location: Location = state.visible_candidates()[choice.index].clone();

    output::print_loading();
    let selected = screen.search().select_candidate(location).await;
    screen.unmount();
    selected.context("Could not load the forecast")?;

    output::print_screen(&screen.screen().snapshot());
    Ok(())
}
