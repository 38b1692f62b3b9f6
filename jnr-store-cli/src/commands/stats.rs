use std::collections::HashMap;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use jnr_store_catalog::{CatalogSource, load_records};
use jnr_store_core::{GameRecord, format_megabytes};

use crate::CliError;

const TOP_GENRES: usize = 5;

/// Catalog-wide numbers, computed once.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CatalogStats {
    pub games: usize,
    pub views: u64,
    pub downloads: u64,
    /// Sum of all known download sizes, in MB.
    pub known_size_mb: f64,
    pub unknown_size: usize,
    pub undated: usize,
    pub oldest: Option<String>,
    pub newest: Option<String>,
    /// Most common genre tokens, most frequent first, ties alphabetical.
    pub top_genres: Vec<(String, usize)>,
}

impl CatalogStats {
    pub(crate) fn from_records(records: &[GameRecord]) -> Self {
        let mut stats = Self {
            games: records.len(),
            ..Self::default()
        };
        let mut genres: HashMap<String, usize> = HashMap::new();
        let mut days = Vec::new();

        for game in records {
            stats.views = stats.views.saturating_add(game.views);
            stats.downloads = stats.downloads.saturating_add(game.downloads);

            let size = game.size_mb();
            if size.is_finite() {
                stats.known_size_mb += size;
            } else {
                stats.unknown_size += 1;
            }

            match game.release_day() {
                Some(day) => days.push(day),
                None => stats.undated += 1,
            }

            for token in game.genre_tokens() {
                *genres.entry(token).or_default() += 1;
            }
        }

        stats.oldest = days.iter().min().map(|d| d.to_string());
        stats.newest = days.iter().max().map(|d| d.to_string());

        let mut top: Vec<(String, usize)> = genres.into_iter().collect();
        top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top.truncate(TOP_GENRES);
        stats.top_genres = top;
        stats
    }
}

/// Print catalog statistics. Unlike the browsing commands, a catalog that
/// fails to load is an error here.
pub(crate) fn run_stats(source: &CatalogSource) -> Result<(), CliError> {
    let records = load_records(source)?;
    let stats = CatalogStats::from_records(&records);

    log::info!("{}", "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Source: {source}");
    crate::log_blank();
    log::info!("  Games:          {:>10}", stats.games);
    log::info!("  Views:          {:>10}", stats.views);
    log::info!("  Downloads:      {:>10}", stats.downloads);
    log::info!("  Total size:     {:>10}", format_megabytes(stats.known_size_mb));
    log::info!("  Unknown size:   {:>10}", stats.unknown_size);
    log::info!(
        "  Released:       {} to {}",
        stats.oldest.as_deref().unwrap_or("?"),
        stats.newest.as_deref().unwrap_or("?"),
    );
    log::info!("  Undated:        {:>10}", stats.undated);

    if !stats.top_genres.is_empty() {
        crate::log_blank();
        log::info!("{}", "Top genres".if_supports_color(Stdout, |t| t.bold()));
        for (genre, count) in &stats.top_genres {
            log::info!("  {genre:<20} {count:>5}");
        }
    }

    Ok(())
}
