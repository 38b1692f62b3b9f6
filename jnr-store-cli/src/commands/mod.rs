pub(crate) mod config;
pub(crate) mod home;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod show;
pub(crate) mod stats;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use jnr_store_catalog::{CatalogQueryEngine, CatalogSource, PageControls, PageDescriptor, load_or_empty};
use jnr_store_core::{GameRecord, Rating, Star};

/// Load the catalog for a browsing command. A catalog that fails to load is
/// reported and treated as empty, so pages still render.
pub(crate) fn open_engine(source: &CatalogSource) -> CatalogQueryEngine {
    log::debug!("Catalog source: {source}");
    CatalogQueryEngine::new(load_or_empty(source))
}

/// One-line summary of a game: title, meta, size, and popularity.
pub(crate) fn game_line(game: &GameRecord) -> String {
    format!(
        "{} {} {}",
        game.display_title().if_supports_color(Stdout, |t| t.bold()),
        format!("({})", game.card_meta()).if_supports_color(Stdout, |t| t.dimmed()),
        format!(
            "[{}, {} views + downloads]",
            game.size_text().unwrap_or("size unknown"),
            game.popularity()
        )
        .if_supports_color(Stdout, |t| t.cyan()),
    )
}

/// Print a numbered block of games under a heading.
pub(crate) fn print_rows(heading: &str, games: &[&GameRecord]) {
    log::info!("{}", heading.if_supports_color(Stdout, |t| t.bold()));
    if games.is_empty() {
        log::info!("  {}", "(none)".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for (i, game) in games.iter().enumerate() {
        log::info!("  {:>2}. {} {}", i + 1, game_line(game), game.id.if_supports_color(Stdout, |t| t.dimmed()));
    }
}

/// Render the pagination bar as text: `< Prev  1 [2] 3 … 10  Next >`.
/// Disabled buttons are left out.
pub(crate) fn page_bar(controls: &PageControls) -> String {
    let pages: Vec<String> = controls
        .pages
        .iter()
        .map(|slot| match slot {
            PageDescriptor::Page { number, current: true } => format!("[{number}]"),
            PageDescriptor::Page { number, .. } => number.to_string(),
            PageDescriptor::Ellipsis => "…".to_string(),
        })
        .collect();

    let mut bar = String::new();
    if !controls.previous.disabled {
        bar.push_str("< Prev  ");
    }
    bar.push_str(&pages.join(" "));
    if !controls.next.disabled {
        bar.push_str("  Next >");
    }
    bar
}

/// Star bar for a rating, e.g. `★★★½☆`.
pub(crate) fn star_bar(rating: &Rating) -> String {
    rating
        .stars()
        .into_iter()
        .map(|star| match star {
            Star::Full => '★',
            Star::Half => '½',
            Star::Empty => '☆',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jnr_store_catalog::page_controls;

    #[test]
    fn first_page_bar_has_no_prev() {
        let controls = page_controls(10, 1, 5).unwrap();
        assert_eq!(page_bar(&controls), "[1] 2 3 … 10  Next >");
    }

    #[test]
    fn middle_page_bar() {
        let controls = page_controls(10, 5, 5).unwrap();
        assert_eq!(page_bar(&controls), "< Prev  1 … [5] 6 … 10  Next >");
    }

    #[test]
    fn last_page_bar_has_no_next() {
        let controls = page_controls(3, 3, 5).unwrap();
        assert_eq!(page_bar(&controls), "< Prev  1 2 [3]");
    }

    #[test]
    fn stars() {
        let rating = Rating::parse("3.5/5").unwrap();
        assert_eq!(star_bar(&rating), "★★★½☆");
    }
}
