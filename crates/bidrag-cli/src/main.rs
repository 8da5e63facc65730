//! Bidrag CLI Application
//!
//! Command-line interface for the barnebidrag agreement wizard.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use bidrag_core::{Locale, WizardBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        session,
        lang,
        no_color,
        command,
    } = Args::parse();

    let locale = lang.parse::<Locale>().map_err(anyhow::Error::msg)?;

    let wizard = WizardBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize wizard")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Bidrag started");

    let cli = Cli::new(wizard, renderer, session, locale);

    match command {
        Some(Step { command }) => cli.handle_step_command(command).await,
        Some(Nav { command }) => cli.handle_nav_command(command).await,
        Some(Session { command }) => cli.handle_session_command(command).await,
        Some(Estimate(args)) => cli.estimate(args).await,
        None => cli.status().await,
    }
}
