use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{EstimateArgs, NavCommands, SessionCommands, StepCommands};

/// Command-line wizard for private child-support agreements
///
/// Bidrag drives a multi-step agreement session: fill in the parties, the
/// children, the agreement period and the confirmation, see which steps
/// still need input, estimate a monthly amount, and submit to render the
/// final agreement document.
#[derive(Parser)]
#[command(version, about, name = "bidrag")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/bidrag/bidrag.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Wizard session to operate on
    #[arg(long, global = true, default_value = "default")]
    pub session: String,

    /// Display language for step titles and validation messages (nb, nn, en)
    #[arg(long, global = true, default_value = "nb")]
    pub lang: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the bidrag CLI
///
/// The CLI is organized into four command categories:
/// - `step`: inspect and edit the data of individual wizard steps
/// - `nav`: move between steps
/// - `session`: session-level operations (status, submit, reset)
/// - `estimate`: compute an advisory monthly support amount
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect and edit wizard steps
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Move between steps
    #[command(alias = "n")]
    Nav {
        #[command(subcommand)]
        command: NavCommands,
    },
    /// Manage the wizard session
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Estimate a monthly support amount
    Estimate(EstimateArgs),
}
