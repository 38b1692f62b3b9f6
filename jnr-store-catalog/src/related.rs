//! "You may also like" picks for the detail page.

use std::collections::HashSet;

use jnr_store_core::GameRecord;
use rand::Rng;
use rand::seq::SliceRandom;

/// Related games shown under a detail page.
pub const RELATED_GAMES_COUNT: usize = 4;

/// Is `candidate` related to `current`?
///
/// Related means sharing a tag (exact, case-sensitive) or a genre token
/// (trimmed, lowercase). A record is never related to itself.
/// `current_genres` is `current.genre_tokens()`, passed in so callers
/// comparing against many candidates split it once.
pub fn is_related(current: &GameRecord, candidate: &GameRecord, current_genres: &[String]) -> bool {
    if candidate.id == current.id {
        return false;
    }
    let shares_tag = !current.tags.is_empty()
        && candidate.tags.iter().any(|tag| current.tags.contains(tag));
    shares_tag
        || (!current_genres.is_empty()
            && candidate
                .genre_tokens()
                .iter()
                .any(|token| current_genres.contains(token)))
}

/// Pick up to `count` games related to `current`.
///
/// Matches are shuffled and truncated to `count`. If that leaves free slots,
/// they are filled with a random sample of the remaining games (never
/// `current` itself). Small catalogs simply return fewer games.
pub fn related_items<'a, R: Rng + ?Sized>(
    current: &GameRecord,
    all: &'a [GameRecord],
    count: usize,
    rng: &mut R,
) -> Vec<&'a GameRecord> {
    let genres = current.genre_tokens();
    let mut picked: Vec<&'a GameRecord> = all
        .iter()
        .filter(|candidate| is_related(current, candidate, &genres))
        .collect();
    picked.shuffle(rng);
    picked.truncate(count);

    let missing = count - picked.len();
    if missing > 0 {
        let taken: HashSet<&str> = picked.iter().map(|g| g.id.as_str()).collect();
        let rest: Vec<&'a GameRecord> = all
            .iter()
            .filter(|g| g.id != current.id && !taken.contains(g.id.as_str()))
            .collect();
        log::debug!(
            "Only {} related games for '{}', filling {} from {} others",
            picked.len(),
            current.id,
            missing,
            rest.len()
        );
        picked.extend(rest.choose_multiple(rng, missing).copied());
    }

    picked
}
