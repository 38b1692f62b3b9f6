//! Text filtering for the listing page.

use jnr_store_core::GameRecord;

/// Does `game` match an already-lowercased needle?
///
/// Checks the title, then each tag, then (when `include_genre` is set) the
/// genre text, all as case-insensitive substrings. Absent fields never match.
pub fn matches_filter(game: &GameRecord, needle: &str, include_genre: bool) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    game.title.as_deref().is_some_and(contains)
        || game.tags.iter().any(|tag| contains(tag))
        || (include_genre && game.genre_text.as_deref().is_some_and(contains))
}

/// Keep the records whose title, tags, or genre text contain `filter_text`,
/// ignoring case. An empty filter keeps everything, in order.
pub fn filter_records<'a>(records: &'a [GameRecord], filter_text: &str) -> Vec<&'a GameRecord> {
    if filter_text.is_empty() {
        return records.iter().collect();
    }
    let needle = filter_text.to_lowercase();
    records
        .iter()
        .filter(|game| matches_filter(game, &needle, true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, title: Option<&str>, tags: &[&str], genre: Option<&str>) -> GameRecord {
        GameRecord {
            id: id.into(),
            title: title.map(Into::into),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            genre_text: genre.map(Into::into),
            ..GameRecord::default()
        }
    }

    fn sample() -> Vec<GameRecord> {
        vec![
            game("1", Some("Hollow Knight"), &["Metroidvania"], Some("Action, Indie")),
            game("2", Some("Forza Horizon"), &["Racing", "Open World"], Some("Racing")),
            game("3", None, &["Co-op"], Some("Survival")),
            game("4", Some("Stardew Valley"), &[], None),
        ]
    }

    fn ids(found: &[&GameRecord]) -> Vec<String> {
        found.iter().map(|g| g.id.clone()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let records = sample();
        assert_eq!(ids(&filter_records(&records, "")), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn title_match_is_case_insensitive() {
        let records = sample();
        assert_eq!(ids(&filter_records(&records, "HOLLOW")), vec!["1"]);
        assert_eq!(ids(&filter_records(&records, "valley")), vec!["4"]);
    }

    #[test]
    fn tag_and_genre_match() {
        let records = sample();
        assert_eq!(ids(&filter_records(&records, "open w")), vec!["2"]);
        assert_eq!(ids(&filter_records(&records, "surviv")), vec!["3"]);
        assert_eq!(ids(&filter_records(&records, "co-op")), vec!["3"]);
    }

    #[test]
    fn genre_can_be_excluded() {
        let records = sample();
        assert!(!matches_filter(&records[2], "surviv", false));
        assert!(matches_filter(&records[2], "surviv", true));
    }

    #[test]
    fn no_match_is_empty() {
        let records = sample();
        assert!(filter_records(&records, "zelda").is_empty());
        assert!(filter_records(&[], "zelda").is_empty());
    }
}
