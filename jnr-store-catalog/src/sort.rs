//! Listing-page orderings.
//!
//! Every ordering is stable: ties keep their input order. Records missing
//! the sort field (no parsable release date, no title) go after all records
//! that have it, in both directions. Unknown sizes are `+∞` MB, so they come
//! last ascending and first descending.

use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

use jnr_store_core::GameRecord;

use crate::error::QueryError;

/// A listing sort option, as named by the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Most views + downloads first.
    #[default]
    Popular,
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
    SizeAsc,
    SizeDesc,
}

const ALL_SORT_KEYS: &[SortKey] = &[
    SortKey::Popular,
    SortKey::Newest,
    SortKey::Oldest,
    SortKey::TitleAsc,
    SortKey::TitleDesc,
    SortKey::SizeAsc,
    SortKey::SizeDesc,
];

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::SizeAsc => "size-asc",
            Self::SizeDesc => "size-desc",
        }
    }

    pub fn all() -> &'static [SortKey] {
        ALL_SORT_KEYS
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    /// Exact, case-insensitive match on the dropdown value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_SORT_KEYS
            .iter()
            .copied()
            .find(|key| key.as_str() == lower)
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}

/// Order titles the way a reader expects: case-insensitively first, then by
/// exact text so that "abc" and "ABC" still have a fixed order.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort records in place. Stable.
pub fn sort_records(records: &mut [&GameRecord], key: SortKey) {
    match key {
        SortKey::Popular => records.sort_by_key(|g| Reverse(g.popularity())),
        SortKey::Newest => records.sort_by_cached_key(|g| {
            let day = g.release_day();
            (day.is_none(), Reverse(day))
        }),
        SortKey::Oldest => records.sort_by_cached_key(|g| {
            let day = g.release_day();
            (day.is_none(), day)
        }),
        SortKey::TitleAsc => records.sort_by(|a, b| by_title(a, b, false)),
        SortKey::TitleDesc => records.sort_by(|a, b| by_title(a, b, true)),
        SortKey::SizeAsc => records.sort_by_cached_key(|g| SizeKey(g.size_mb())),
        SortKey::SizeDesc => records.sort_by_cached_key(|g| Reverse(SizeKey(g.size_mb()))),
    }
}

/// Sort by a dropdown value. An unknown name leaves the order untouched and
/// comes back as [`QueryError::UnknownSortKey`].
pub fn sort_records_by_name(
    records: &mut [&GameRecord],
    name: &str,
) -> Result<SortKey, QueryError> {
    let key: SortKey = name.parse()?;
    sort_records(records, key);
    Ok(key)
}

fn by_title(a: &GameRecord, b: &GameRecord, descending: bool) -> Ordering {
    match (a.title.as_deref(), b.title.as_deref()) {
        (Some(x), Some(y)) if descending => compare_titles(y, x),
        (Some(x), Some(y)) => compare_titles(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Megabytes with a total order (`f64::total_cmp`), so `+∞` sorts like any other value.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SizeKey(f64);

impl Eq for SizeKey {}

impl PartialOrd for SizeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SizeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jnr_store_core::DownloadLink;

    fn titled(id: &str, title: &str) -> GameRecord {
        GameRecord::new(id, title)
    }

    fn titles(records: &[&GameRecord]) -> Vec<String> {
        records.iter().map(|g| g.display_title().to_string()).collect()
    }

    fn ids(records: &[&GameRecord]) -> Vec<String> {
        records.iter().map(|g| g.id.clone()).collect()
    }

    #[test]
    fn parse_keys() {
        for &key in SortKey::all() {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("Title-Desc".parse::<SortKey>().unwrap(), SortKey::TitleDesc);
        assert_eq!(
            "cheapest".parse::<SortKey>(),
            Err(QueryError::UnknownSortKey("cheapest".into()))
        );
    }

    #[test]
    fn title_desc() {
        let games = [
            titled("a", "Alpha"),
            titled("z", "Zeta"),
            titled("m", "Mu"),
        ];
        let mut view: Vec<_> = games.iter().collect();
        sort_records(&mut view, SortKey::TitleDesc);
        assert_eq!(titles(&view), vec!["Zeta", "Mu", "Alpha"]);
    }

    #[test]
    fn title_ignores_case_and_puts_untitled_last() {
        let mut untitled = GameRecord::default();
        untitled.id = "none".into();
        let games = [
            untitled,
            titled("b", "beta"),
            titled("a", "Alpha"),
            titled("c", "Charlie"),
        ];
        let mut view: Vec<_> = games.iter().collect();
        sort_records(&mut view, SortKey::TitleAsc);
        assert_eq!(ids(&view), vec!["a", "b", "c", "none"]);
        sort_records(&mut view, SortKey::TitleDesc);
        assert_eq!(ids(&view), vec!["c", "b", "a", "none"]);
    }

    #[test]
    fn popular_is_stable() {
        let mut games = vec![
            titled("a", "A"),
            titled("b", "B"),
            titled("c", "C"),
            titled("d", "D"),
        ];
        games[0].views = 5;
        games[1].downloads = 10;
        games[2].views = 3;
        games[2].downloads = 2;
        games[3].views = 10;
        let mut view: Vec<_> = games.iter().collect();
        sort_records(&mut view, SortKey::Popular);
        // b and d tie at 10, a and c tie at 5
        assert_eq!(ids(&view), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn dates_with_missing_last() {
        let mut games = vec![
            titled("old", "Old"),
            titled("none", "None"),
            titled("new", "New"),
            titled("bad", "Bad"),
        ];
        games[0].release_date = Some("2001-03-04".into());
        games[2].release_date = Some("2023-11-20".into());
        games[3].release_date = Some("someday".into());
        let mut view: Vec<_> = games.iter().collect();

        sort_records(&mut view, SortKey::Newest);
        assert_eq!(ids(&view), vec!["new", "old", "none", "bad"]);

        sort_records(&mut view, SortKey::Oldest);
        assert_eq!(ids(&view), vec!["old", "new", "none", "bad"]);
    }

    #[test]
    fn size_orders_with_unknown_as_infinite() {
        let mut games = vec![
            titled("big", "Big"),
            titled("unknown", "Unknown"),
            titled("small", "Small"),
            titled("mid", "Mid"),
        ];
        games[0].download_links.direct = Some(DownloadLink::new("u", "50 GB"));
        games[2].download_links.torrent = Some(DownloadLink::new("u", "800 MB"));
        games[3].download_links.parts = vec![DownloadLink::new("u", "1.5 GB")];
        let mut view: Vec<_> = games.iter().collect();

        sort_records(&mut view, SortKey::SizeAsc);
        assert_eq!(ids(&view), vec!["small", "mid", "big", "unknown"]);

        sort_records(&mut view, SortKey::SizeDesc);
        assert_eq!(ids(&view), vec!["unknown", "big", "mid", "small"]);
    }

    #[test]
    fn unknown_name_keeps_order() {
        let games = [titled("z", "Zeta"), titled("a", "Alpha")];
        let mut view: Vec<_> = games.iter().collect();
        let err = sort_records_by_name(&mut view, "random").unwrap_err();
        assert_eq!(err, QueryError::UnknownSortKey("random".into()));
        assert_eq!(ids(&view), vec!["z", "a"]);

        assert_eq!(
            sort_records_by_name(&mut view, "title-asc"),
            Ok(SortKey::TitleAsc)
        );
        assert_eq!(ids(&view), vec!["a", "z"]);
    }
}
