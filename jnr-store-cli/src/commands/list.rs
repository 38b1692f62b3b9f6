use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use jnr_store_catalog::{CatalogQueryEngine, DEFAULT_PAGE_SIZE, QueryState};

use super::{game_line, page_bar};

/// Options for `jnr-store list`, already merged with saved settings.
pub(crate) struct ListOptions {
    pub filter: Option<String>,
    pub sort: String,
    pub page: usize,
    pub page_size: Option<usize>,
}

pub(crate) fn run_list(engine: &CatalogQueryEngine, options: ListOptions) {
    let state = QueryState::new()
        .with_filter(options.filter.unwrap_or_default())
        .with_sort(options.sort)
        .with_page(options.page)
        .with_page_size(options.page_size.unwrap_or(DEFAULT_PAGE_SIZE));

    let page = engine.query(&state);

    if page.misconfiguration.is_some() {
        let keys: Vec<&str> = jnr_store_catalog::SortKey::all()
            .iter()
            .map(|k| k.as_str())
            .collect();
        log::info!("Valid sort options: {}", keys.join(", "));
    }

    if page.total_matches == 0 {
        if state.filter_text.is_empty() {
            log::info!("The catalog is empty.");
        } else {
            log::info!("No games match '{}'.", state.filter_text);
        }
        return;
    }

    log::info!(
        "{} {}",
        format!("{} games", page.total_matches).if_supports_color(Stdout, |t| t.bold()),
        format!(
            "(sorted by {}, page {} of {})",
            page.sort_key.map(|k| k.as_str()).unwrap_or("catalog order"),
            page.page_number,
            page.total_pages
        )
        .if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();

    if page.is_empty() {
        log::warn!(
            "Page {} is past the end; there are {} pages",
            page.page_number,
            page.total_pages
        );
        return;
    }

    let first_index = (page.page_number - 1) * state.page_size;
    for (i, game) in page.items.iter().enumerate() {
        log::info!(
            "  {:>4}. {} {}",
            first_index + i + 1,
            game_line(game),
            game.id.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if let Some(controls) = &page.controls {
        crate::log_blank();
        log::info!("  {}", page_bar(controls));
    }
}
