//! Rows of the home page.

use jnr_store_core::GameRecord;

use crate::sort::{SortKey, sort_records};

const HERO_SLIDES: usize = 5;
const FEATURED_GAMES: usize = 4;
const MULTIPLAYER_GAMES: usize = 4;
const TRENDING_GAMES: usize = 8;

/// Borrowed views for each home page row.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSections<'a> {
    /// `isHero` games for the slider, in catalog order.
    pub hero: Vec<&'a GameRecord>,
    /// `isFeatured` games, in catalog order.
    pub featured: Vec<&'a GameRecord>,
    /// Multiplayer or co-op games, newest first.
    pub recent_multiplayer: Vec<&'a GameRecord>,
    /// Most popular games.
    pub trending: Vec<&'a GameRecord>,
    pub total_games: usize,
}

impl<'a> HomeSections<'a> {
    pub fn from_records(records: &'a [GameRecord]) -> Self {
        let hero = first_where(records, HERO_SLIDES, |g| g.is_hero);
        let featured = first_where(records, FEATURED_GAMES, |g| g.is_featured);

        let mut recent_multiplayer: Vec<_> =
            records.iter().filter(|g| g.is_multiplayer_like()).collect();
        sort_records(&mut recent_multiplayer, SortKey::Newest);
        recent_multiplayer.truncate(MULTIPLAYER_GAMES);

        let mut trending: Vec<_> = records.iter().collect();
        sort_records(&mut trending, SortKey::Popular);
        trending.truncate(TRENDING_GAMES);

        Self {
            hero,
            featured,
            recent_multiplayer,
            trending,
            total_games: records.len(),
        }
    }
}

fn first_where(
    records: &[GameRecord],
    limit: usize,
    keep: impl Fn(&GameRecord) -> bool,
) -> Vec<&GameRecord> {
    records.iter().filter(|g| keep(*g)).take(limit).collect()
}
