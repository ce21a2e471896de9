use super::print::{
    print_config, print_full_notes, print_messages, print_notes, print_paths, print_remote_notes,
    print_suggestions,
};
use super::setup::{Cli, Commands, RemoteCommands};
use clap::Parser;
use directories::ProjectDirs;
use notez::api::{ConfigAction, NotezApi};
use notez::config::NotezConfig;
use notez::error::{NotezError, Result};
use notez::store::fs::FileStore;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "NOTEZ_HOME";
const LOG_ENV: &str = "NOTEZ_LOG";

struct AppContext {
    api: NotezApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { content }) => handle_create(&mut ctx, content),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { indexes }) => handle_view(&ctx, indexes),
        Some(Commands::Edit { index, content }) => handle_edit(&mut ctx, index, content),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Suggest { index }) => handle_suggest(&mut ctx, index),
        Some(Commands::Remote { action }) => handle_remote(&mut ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "notez", "notez")
        .ok_or_else(|| NotezError::Config("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let config = match NotezConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "config unreadable, using defaults");
            NotezConfig::default()
        }
    };

    let store = FileStore::new(data_dir.clone());
    let api = NotezApi::new(store, data_dir, config);
    Ok(AppContext { api })
}

/// Content from the words on the command line, or from piped stdin if there are none.
fn content_from_args_or_stdin(words: Vec<String>) -> Result<Option<String>> {
    if !words.is_empty() {
        return Ok(Some(words.join(" ")));
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf).map_err(NotezError::Io)?;
    Ok(Some(buf))
}

fn handle_create(ctx: &mut AppContext, words: Vec<String>) -> Result<()> {
    let content = content_from_args_or_stdin(words)?.unwrap_or_default();
    let result = ctx.api.create_note(&content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_messages(&result.messages);
    print_notes(&result.listed_notes);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_notes(&indexes)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: String, words: Vec<String>) -> Result<()> {
    let content = content_from_args_or_stdin(words)?.unwrap_or_default();
    let result = ctx.api.update_note(&index, &content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_suggest(ctx: &mut AppContext, index: String) -> Result<()> {
    let result = ctx.api.fetch_suggestions(&index)?;
    print_suggestions(&result.suggestions);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remote(ctx: &mut AppContext, action: RemoteCommands) -> Result<()> {
    let result = match action {
        RemoteCommands::List => {
            let result = ctx.api.remote_list()?;
            print_remote_notes(&result.remote_notes);
            result
        }
        RemoteCommands::Create { content } => ctx.api.remote_create(&content.join(" "))?,
        RemoteCommands::Pull => ctx.api.remote_pull()?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_path()?;
    print_paths(&result.paths);
    Ok(())
}
