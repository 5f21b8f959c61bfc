//! CLI definitions for LiveForge.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// LiveForge CLI.
#[derive(Parser)]
#[command(name = "liveforge")]
#[command(about = "Live page patching driven by natural-language instructions")]
#[command(version)]
pub(crate) struct Cli {
    /// Settings file path (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run an interactive patching session against an in-memory page
    /// (default)
    Session,

    /// Settings management commands
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Print the persisted settings
    Show,

    /// Update one or more settings fields
    Set {
        /// Provider kind: "open_ai_compatible" or "ollama"
        #[arg(long)]
        provider: Option<String>,

        /// Endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Model identifier
        #[arg(long)]
        model: Option<String>,

        /// API key for key-authenticated providers
        #[arg(long)]
        api_key: Option<String>,
    },
}
