//! The header's live search box.

use jnr_store_core::GameRecord;

use crate::filter::matches_filter;

/// Suggestions shown under the search box.
pub const LIVE_SEARCH_LIMIT: usize = 5;

/// Shorter queries do not trigger a search.
pub const LIVE_SEARCH_MIN_QUERY_LEN: usize = 2;

/// Whether `query` is long enough to search for, counting characters after trimming.
pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= LIVE_SEARCH_MIN_QUERY_LEN
}

/// Up to `limit` records whose title or a tag contains `query`, ignoring case
/// and surrounding whitespace. Genre text is not searched.
///
/// This does not apply the minimum query length; see [`should_search`].
pub fn live_search<'a>(records: &'a [GameRecord], query: &str, limit: usize) -> Vec<&'a GameRecord> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|game| matches_filter(game, &needle, false))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, title: &str, tags: &[&str], genre: &str) -> GameRecord {
        GameRecord {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            genre_text: Some(genre.into()),
            ..GameRecord::new(id, title)
        }
    }

    #[test]
    fn minimum_length() {
        assert!(!should_search(""));
        assert!(!should_search(" a "));
        assert!(should_search("ab"));
        assert!(should_search("é1"));
    }

    #[test]
    fn ignores_genre_text() {
        let records = vec![
            game("1", "Doom", &["Shooter"], "Horror"),
            game("2", "Limbo", &["Horror"], "Puzzle"),
        ];
        let ids: Vec<_> = live_search(&records, "  HORROR ", LIVE_SEARCH_LIMIT)
            .iter()
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn stops_at_limit() {
        let records: Vec<_> = (0..8)
            .map(|i| game(&i.to_string(), &format!("Space Game {i}"), &[], "Sim"))
            .collect();
        let found = live_search(&records, "space", LIVE_SEARCH_LIMIT);
        assert_eq!(found.len(), 5);
        assert_eq!(found[0].id, "0");
        assert_eq!(found[4].id, "4");
    }
}
