use clap::Parser;
use directories::ProjectDirs;
use qboard::api::{self, BoardApi, ConfigAction};
use qboard::commands::{CmdResult, QboardPaths};
use qboard::config::QboardConfig;
use qboard::error::{QboardError, Result};
use qboard::loader::DataSource;
use qboard::model::{FilterConfig, SortConfig, SortDirection, SortKey};
use qboard::store::fs::FileStore;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::Level;

mod args;
mod render;
use args::{Cli, Commands};
use render::{print_messages, render_config, render_progress, render_question_list, render_sort};

/// Overrides the per-user data directory.
const HOME_ENV: &str = "QBOARD_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: BoardApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let paths = QboardPaths::new(data_dir()?);

    // Config does not need the question data
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&paths, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, paths)?;
    print_messages(ctx.api.startup_messages());

    match cli.command {
        Some(Commands::List {
            search,
            difficulty,
            sort,
            asc,
            desc,
            links,
        }) => {
            let filter = FilterConfig {
                search_term: search.unwrap_or_default(),
                difficulty,
            };
            let sort = build_sort(&sort, asc, desc);
            handle_list(&mut ctx, &filter, &sort, links)
        }
        Some(Commands::Toggle { selectors }) => handle_toggle(&mut ctx, selectors),
        Some(Commands::Status) => handle_status(&mut ctx),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Export { path }) => handle_export(&mut ctx, path),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        // Handled before the board was loaded
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(
            &mut ctx,
            &FilterConfig::default(),
            &SortConfig::default(),
            false,
        ),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "qboard", "qboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QboardError::Api("Could not determine a data directory".into()))
}

fn init_context(cli: &Cli, paths: QboardPaths) -> Result<AppContext> {
    let config = QboardConfig::load(&paths.data_dir)?;
    let source = DataSource::from_path(cli.source.clone().or(config.source));

    let store = FileStore::new(paths.data_dir.clone()).with_slot(&config.slot);
    let api = BoardApi::new(store, paths, &source);
    Ok(AppContext { api })
}

/// Start from the default order; each `--sort KEY` is a click on that column.
fn build_sort(keys: &[SortKey], asc: bool, desc: bool) -> SortConfig {
    let mut sort = SortConfig::default();
    for key in keys {
        sort.toggle(*key);
    }
    if asc {
        sort.direction = SortDirection::Ascending;
    } else if desc {
        sort.direction = SortDirection::Descending;
    }
    sort
}

fn print_progress(result: &CmdResult) {
    if let Some(progress) = &result.progress {
        println!("{}", render_progress(progress));
    }
}

fn handle_list(
    ctx: &mut AppContext,
    filter: &FilterConfig,
    sort: &SortConfig,
    links: bool,
) -> Result<()> {
    let result = ctx.api.list(filter, sort)?;
    print_progress(&result);
    println!("{}", render_sort(sort));
    println!();
    print!("{}", render_question_list(&result.listed_questions, links));
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle(&selectors)?;
    print_messages(&result.messages);
    print_progress(&result);
    Ok(())
}

fn handle_status(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    print_progress(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes && !confirm("Reset all progress? This cannot be undone. [y/N] ")? {
        println!("Reset cancelled.");
        return Ok(());
    }
    let result = ctx.api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.export(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import(&path)?;
    print_messages(&result.messages);
    print_progress(&result);
    Ok(())
}

fn handle_config(paths: &QboardPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config(paths, action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}

/// Asks on the terminal; anything but an explicit yes (or no terminal at all) declines.
fn confirm(prompt: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Ok(false);
    }
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
