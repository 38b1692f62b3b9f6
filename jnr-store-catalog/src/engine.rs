//! The listing-page query engine.
//!
//! [`CatalogQueryEngine`] owns the loaded catalog and never changes it.
//! The filter text, sort option, and page live in a caller-owned
//! [`QueryState`]; every query is a pure function of the two.

use jnr_store_core::GameRecord;
use rand::Rng;

use crate::error::QueryError;
use crate::filter::filter_records;
use crate::paginate::{DEFAULT_MAX_VISIBLE, DEFAULT_PAGE_SIZE, PageControls, page_controls, paginate};
use crate::related::related_items;
use crate::search::live_search;
use crate::sections::HomeSections;
use crate::sort::{SortKey, sort_records_by_name};

/// What the listing page is showing: filter text, sort option, and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub filter_text: String,
    /// Sort dropdown value, e.g. `"title-asc"`. Parsed at query time so an
    /// unknown value can be reported instead of rejected up front.
    pub sort_key: String,
    /// 1-based.
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            sort_key: SortKey::default().as_str().to_string(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// New filter text. Goes back to page 1, like typing in the filter box.
    pub fn with_filter(mut self, text: impl Into<String>) -> Self {
        self.filter_text = text.into();
        self.page_number = 1;
        self
    }

    /// New sort option. Goes back to page 1, like picking from the dropdown.
    pub fn with_sort(mut self, key: impl Into<String>) -> Self {
        self.sort_key = key.into();
        self.page_number = 1;
        self
    }

    pub fn with_page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a GameRecord>,
    /// Matches across all pages.
    pub total_matches: usize,
    pub total_pages: usize,
    pub page_number: usize,
    /// The ordering applied, or `None` when the sort option was not recognized.
    pub sort_key: Option<SortKey>,
    /// Pagination bar, absent when everything fits on one page.
    pub controls: Option<PageControls>,
    /// Set when the query asked for something the engine could not do.
    /// The results are still usable: an unknown sort keeps catalog order.
    pub misconfiguration: Option<QueryError>,
}

impl QueryPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// In-memory catalog plus the operations the storefront pages need.
#[derive(Debug, Clone, Default)]
pub struct CatalogQueryEngine {
    records: Vec<GameRecord>,
}

impl CatalogQueryEngine {
    pub fn new(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a game by id.
    pub fn find(&self, id: &str) -> Option<&GameRecord> {
        self.records.iter().find(|g| g.id == id)
    }

    /// Records matching `filter_text` in title, tags, or genre, in catalog order.
    pub fn filter(&self, filter_text: &str) -> Vec<&GameRecord> {
        filter_records(&self.records, filter_text)
    }

    /// Filter, sort, and slice out one page.
    pub fn query(&self, state: &QueryState) -> QueryPage<'_> {
        let mut matches = filter_records(&self.records, &state.filter_text);

        let (sort_key, misconfiguration) = match sort_records_by_name(&mut matches, &state.sort_key) {
            Ok(key) => (Some(key), None),
            Err(e) => {
                log::warn!("{e}; keeping catalog order");
                (None, Some(e))
            }
        };

        let (items, total_pages) = paginate(&matches, state.page_number, state.page_size);
        log::debug!(
            "Query filter='{}' sort={} page={}/{}: {} of {} matches",
            state.filter_text,
            state.sort_key,
            state.page_number,
            total_pages,
            items.len(),
            matches.len()
        );

        QueryPage {
            items: items.to_vec(),
            total_matches: matches.len(),
            total_pages,
            page_number: state.page_number,
            sort_key,
            controls: page_controls(total_pages, state.page_number, DEFAULT_MAX_VISIBLE),
            misconfiguration,
        }
    }

    /// Search-box suggestions: title and tag matches only, at most `limit`.
    pub fn live_search(&self, query: &str, limit: usize) -> Vec<&GameRecord> {
        live_search(&self.records, query, limit)
    }

    /// Up to `count` games to suggest alongside `current`.
    pub fn related<R: Rng + ?Sized>(
        &self,
        current: &GameRecord,
        count: usize,
        rng: &mut R,
    ) -> Vec<&GameRecord> {
        related_items(current, &self.records, count, rng)
    }

    pub fn home_sections(&self) -> HomeSections<'_> {
        HomeSections::from_records(&self.records)
    }
}
