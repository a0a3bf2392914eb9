mod handlers;
mod print;
mod setup;

use carlot::api::InventoryApi;
use carlot::config::InventoryConfig;
use carlot::error::{InventoryError, Result};
use carlot::store::fs::CsvStore;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use handlers::*;
use setup::{Cli, Commands};
use std::path::PathBuf;
use tracing::{debug, Level};

const DATA_DIR_ENV: &str = "CARLOT_DATA_DIR";

pub(crate) struct AppContext {
    api: InventoryApi<CsvStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = data_dir()?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    // Config does not need the inventory file, so it works even when that
    // file is unreadable.
    let command = match cli.command {
        Some(Commands::Config { key, value }) => return handle_config(&data_dir, key, value),
        other => other,
    };

    let mut ctx = init_context(cli.file, &data_dir)?;

    match command {
        Some(Commands::List { sort, desc, json }) => handle_list(&mut ctx, sort, desc, json),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Add { car }) => handle_add(&mut ctx, car),
        Some(Commands::Edit { original_id, car }) => handle_edit(&mut ctx, original_id, car),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&mut ctx, None, false, false),
    }
}

pub fn report_error(err: &InventoryError) {
    match err {
        InventoryError::IncompleteRecord(_) => {
            eprintln!("{} {}", "Warning:".yellow().bold(), err)
        }
        _ => eprintln!("{} {}", "Error:".red().bold(), err),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "carlot", "carlot")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            InventoryError::Api(format!(
                "Could not determine a data directory; set {}",
                DATA_DIR_ENV
            ))
        })
}

fn init_context(file: Option<PathBuf>, data_dir: &std::path::Path) -> Result<AppContext> {
    let data_path = match file {
        Some(path) => path,
        // A broken config must not silently redirect writes to the default file.
        None => InventoryConfig::load(data_dir)?.data_path(data_dir),
    };

    let api = InventoryApi::open(CsvStore::new(data_path))?;
    Ok(AppContext { api })
}
