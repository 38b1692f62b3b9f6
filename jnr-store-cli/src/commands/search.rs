use jnr_store_catalog::{CatalogQueryEngine, LIVE_SEARCH_MIN_QUERY_LEN, should_search};

use super::print_rows;

pub(crate) fn run_search(engine: &CatalogQueryEngine, query: &str, limit: usize) {
    if !should_search(query) {
        log::warn!("Search needs at least {LIVE_SEARCH_MIN_QUERY_LEN} characters");
        return;
    }

    let results = engine.live_search(query, limit);
    if results.is_empty() {
        log::info!("No results found for '{}'", query.trim());
        return;
    }
    print_rows(&format!("Results for '{}':", query.trim()), &results);
}
