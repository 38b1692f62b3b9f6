use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use jnr_store_catalog::CatalogSource;

use crate::CliError;
use crate::settings::{self, Settings};

/// Show the settings file and the values in effect.
pub(crate) fn run_config_show(cli_catalog: Option<&str>) {
    let path = settings::settings_path();
    let settings = Settings::load();

    log::info!(
        "{}",
        "JNR Store Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let catalog_origin = if cli_catalog.is_some() {
        "--catalog"
    } else if settings.catalog_source.is_some() {
        "settings"
    } else {
        "default"
    };
    log::info!(
        "  Catalog:      {} {}",
        settings.catalog_source(cli_catalog),
        format!("({catalog_origin})").if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  Page size:    {} {}",
        settings.page_size.unwrap_or(jnr_store_catalog::DEFAULT_PAGE_SIZE),
        origin(settings.page_size.is_some()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  Related:      {} {}",
        settings.related_count.unwrap_or(jnr_store_catalog::RELATED_GAMES_COUNT),
        origin(settings.related_count.is_some()).if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("    {line}");
        }
    }
}

fn origin(from_settings: bool) -> &'static str {
    if from_settings { "(settings)" } else { "(default)" }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save or clear the default catalog source.
pub(crate) fn run_config_set_catalog(source: Option<&str>) -> Result<(), CliError> {
    let source = source.map(str::trim).filter(|s| !s.is_empty());

    if let Some(CatalogSource::File(path)) = source.map(CatalogSource::from_arg) {
        if !path.exists() {
            log::warn!("{} does not exist yet", path.display());
        }
    }

    settings::save_catalog_source(source).map_err(|e| {
        CliError::config(format!(
            "Could not update {}: {e}",
            settings::settings_path().display()
        ))
    })?;

    match source {
        Some(s) => log::info!(
            "Default catalog set to {}",
            s.if_supports_color(Stdout, |t| t.cyan())
        ),
        None => log::info!("Default catalog cleared (using ./{})", settings::DEFAULT_CATALOG),
    }
    Ok(())
}
