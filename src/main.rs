//! LiveForge - live page patching driven by natural-language instructions.
//!
//! Main entry point for the LiveForge CLI.

use anyhow::{bail, Context};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use liveforge_broker::Broker;
use liveforge_protocols::patch::PatchRequest;
use liveforge_protocols::provider::ProviderKind;
use liveforge_store::{DisabledScriptEngine, InMemoryPage, PatchStore, StoreHandle};
use liveforge_surface::{SettingsStore, Surface};

mod cli;

use cli::{Cli, Commands, SettingsAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings_store = match cli.settings {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::new(SettingsStore::default_path()),
    };

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => run_session(&settings_store).await,
        Commands::Settings { action } => run_settings(&settings_store, action),
    }
}

async fn run_session(settings_store: &SettingsStore) -> anyhow::Result<()> {
    let settings = settings_store
        .load()
        .context("failed to load settings")?;

    let mut surface = Surface::new(Broker::new(), settings);
    let store = PatchStore::new(InMemoryPage::new(), DisabledScriptEngine);
    surface.register_target("session-page", StoreHandle::spawn(store));

    info!("Session started against an in-memory page");
    println!("Type an instruction to generate and apply a patch.");
    println!("Commands: :markup <html>, :style <css>, :state, :reset, :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            break;
        }
        if let Err(e) = handle_line(&surface, line).await {
            eprintln!("error: {e}");
        }
    }
    Ok(())
}

async fn handle_line(surface: &Surface, line: &str) -> anyhow::Result<()> {
    if line == ":state" {
        let state = surface.get_state().await?;
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else if line == ":reset" {
        surface.reset().await?;
        println!("Page reset to its clean state.");
    } else if let Some(markup) = line.strip_prefix(":markup ") {
        let state = surface
            .apply(PatchRequest::new().with_markup(markup))
            .await?;
        println!("Applied. Markup is now {} bytes.", state.markup.len());
    } else if let Some(style) = line.strip_prefix(":style ") {
        let state = surface.apply(PatchRequest::new().with_style(style)).await?;
        println!("Applied. Style is now {} bytes.", state.style.len());
    } else {
        let (state, explanation) = surface.generate_and_apply(line).await?;
        println!("{explanation}");
        println!("{}", serde_json::to_string_pretty(&state)?);
    }
    Ok(())
}

fn run_settings(settings_store: &SettingsStore, action: SettingsAction) -> anyhow::Result<()> {
    match action {
        SettingsAction::Show => {
            let settings = settings_store.load()?;
            println!("provider: {:?}", settings.provider);
            println!("endpoint: {}", settings.endpoint);
            println!("model:    {}", settings.model);
            println!(
                "api_key:  {}",
                if settings.api_key.is_empty() {
                    "(unset)"
                } else {
                    "(set)"
                }
            );
        }
        SettingsAction::Set {
            provider,
            endpoint,
            model,
            api_key,
        } => {
            let mut settings = settings_store.load()?;
            if let Some(provider) = provider {
                settings.provider = parse_provider(&provider)?;
            }
            if let Some(endpoint) = endpoint {
                settings.endpoint = endpoint;
            }
            if let Some(model) = model {
                settings.model = model;
            }
            if let Some(api_key) = api_key {
                settings.api_key = api_key;
            }
            settings_store.save(&settings)?;
            println!("Settings saved to {}", settings_store.path().display());
        }
    }
    Ok(())
}

fn parse_provider(raw: &str) -> anyhow::Result<ProviderKind> {
    match raw {
        "open_ai_compatible" | "openai" => Ok(ProviderKind::OpenAiCompatible),
        "ollama" => Ok(ProviderKind::Ollama),
        other => bail!("unknown provider '{other}'"),
    }
}
