//! jnr-store CLI
//!
//! Command-line front end for a JNR game store catalog: list, search, and
//! inspect games the way the storefront pages do.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use jnr_store_catalog::RELATED_GAMES_COUNT;

use cli_types::{Cli, Commands, ConfigAction};
use commands::list::ListOptions;
pub(crate) use error::CliError;
use settings::Settings;

/// Print an empty output line.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load();
    let source = settings.catalog_source(cli.catalog.as_deref());

    match cli.command {
        Commands::List {
            filter,
            sort,
            page,
            page_size,
        } => {
            let engine = commands::open_engine(&source);
            commands::list::run_list(
                &engine,
                ListOptions {
                    filter,
                    sort,
                    page,
                    page_size: page_size.or(settings.page_size),
                },
            );
        }
        Commands::Search { query, limit } => {
            let engine = commands::open_engine(&source);
            commands::search::run_search(&engine, &query, limit);
        }
        Commands::Show { id, related, seed } => {
            let engine = commands::open_engine(&source);
            let count = related
                .or(settings.related_count)
                .unwrap_or(RELATED_GAMES_COUNT);
            commands::show::run_show(&engine, &id, count, seed)?;
        }
        Commands::Home => {
            let engine = commands::open_engine(&source);
            commands::home::run_home(&engine);
        }
        Commands::Stats => commands::stats::run_stats(&source)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(cli.catalog.as_deref()),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetCatalog { source } => {
                commands::config::run_config_set_catalog(source.as_deref())?
            }
        },
    }

    Ok(())
}
