//! Catalog loading and the storefront query engine.
//!
//! The loader turns `games.json` (from disk, a string, or a URL) into
//! [`GameRecord`]s. Everything else is pure: filtering, sorting,
//! pagination, the pagination bar, live search, related games, and the
//! home-page rows all take records in and hand borrowed views back.

pub mod engine;
pub mod error;
pub mod filter;
pub mod loader;
pub mod paginate;
pub mod related;
pub mod search;
pub mod sections;
pub mod sort;

pub use engine::{CatalogQueryEngine, QueryPage, QueryState};
pub use error::{LoadError, QueryError};
pub use filter::{filter_records, matches_filter};
pub use jnr_store_core::GameRecord;
pub use loader::{
    CatalogSource, load_or_empty, load_records, load_records_from_path, load_records_from_str,
    load_records_from_url, load_records_from_yaml_str,
};
pub use paginate::{
    DEFAULT_MAX_VISIBLE, DEFAULT_PAGE_SIZE, PageControls, PageDescriptor, PageLink, page_controls,
    page_window, paginate, total_pages,
};
pub use related::{RELATED_GAMES_COUNT, is_related, related_items};
pub use search::{LIVE_SEARCH_LIMIT, LIVE_SEARCH_MIN_QUERY_LEN, live_search, should_search};
pub use sections::HomeSections;
pub use sort::{SortKey, compare_titles, sort_records, sort_records_by_name};
