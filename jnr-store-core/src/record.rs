//! Catalog data model.
//!
//! One [`GameRecord`] per entry of `games.json`. Field names follow the
//! catalog's camelCase wire format; every field except `id` is optional.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::util::{parse_release_date, parse_size_mb};

/// Title shown when a record has none.
pub const UNKNOWN_TITLE: &str = "Unknown Game";

/// Placeholder for missing meta and size text.
pub const NOT_AVAILABLE: &str = "N/A";

/// Tags that mark a game as multiplayer on the home page (compared case-insensitively).
pub const MULTIPLAYER_TAGS: &[&str] = &["multiplayer", "co-op"];

// ── Game ────────────────────────────────────────────────────────────────────

/// A single catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub genre_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub views: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub downloads: u64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub download_links: DownloadLinks,

    // Card and hero presentation
    #[serde(default, deserialize_with = "lenient::text")]
    pub card_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub card_badge: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub card_meta: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hero_background_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hero_badge: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hero_cover_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub about_game: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub year: Option<String>,
    /// Rating as written in the catalog, e.g. `"4.5/5"`. See [`crate::Rating`].
    #[serde(default, deserialize_with = "lenient::text")]
    pub rating: Option<String>,

    // Home page placement
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_hero: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_multiplayer: bool,

    // Detail page
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub screenshots: Vec<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub system_requirements: SystemRequirements,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rar_password: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub online_fix_rar_password: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub installation_video_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub installation_steps: Vec<String>,
}

impl GameRecord {
    /// Minimal record with just an id and title. Mostly useful for tests and fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Title, or [`UNKNOWN_TITLE`].
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }

    /// Card subtitle: `cardMeta`, then `genreText`, then "N/A".
    pub fn card_meta(&self) -> &str {
        self.card_meta
            .as_deref()
            .or(self.genre_text.as_deref())
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Popularity score used for the `popular` ordering and the trending row.
    pub fn popularity(&self) -> u64 {
        self.views.saturating_add(self.downloads)
    }

    /// Download size string, by precedence: direct → first part → torrent.
    ///
    /// Blank strings are skipped over.
    pub fn size_text(&self) -> Option<&str> {
        let links = &self.download_links;
        [
            links.direct.as_ref().and_then(|l| l.size.as_deref()),
            links.parts.first().and_then(|l| l.size.as_deref()),
            links.torrent.as_ref().and_then(|l| l.size.as_deref()),
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
    }

    /// Download size in megabytes; `f64::INFINITY` when unknown or unparsable.
    pub fn size_mb(&self) -> f64 {
        self.size_text().map_or(f64::INFINITY, parse_size_mb)
    }

    /// Parsed release date, if present and recognizable.
    pub fn release_day(&self) -> Option<NaiveDate> {
        self.release_date.as_deref().and_then(parse_release_date)
    }

    /// Genre labels from `genreText`: split on commas, trimmed, lowercased, blanks dropped.
    pub fn genre_tokens(&self) -> Vec<String> {
        self.genre_text
            .as_deref()
            .map(|text| {
                text.split(',')
                    .map(|g| g.trim().to_lowercase())
                    .filter(|g| !g.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Case-insensitive exact tag check.
    pub fn has_tag_ignore_case(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Flagged multiplayer, or tagged with one of [`MULTIPLAYER_TAGS`].
    pub fn is_multiplayer_like(&self) -> bool {
        self.is_multiplayer || MULTIPLAYER_TAGS.iter().any(|t| self.has_tag_ignore_case(t))
    }

    /// Chips shown under the detail-page title: up to four tags, otherwise
    /// the first genre label as written.
    pub fn hero_chips(&self) -> Vec<&str> {
        if !self.tags.is_empty() {
            return self.tags.iter().take(4).map(String::as_str).collect();
        }
        self.genre_text
            .as_deref()
            .and_then(|g| g.split(',').next())
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .into_iter()
            .collect()
    }
}

// ── Downloads ───────────────────────────────────────────────────────────────

/// All the ways a game can be downloaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLinks {
    #[serde(default, deserialize_with = "lenient::object")]
    pub direct: Option<DownloadLink>,
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub additional_direct_links: Vec<DownloadLink>,
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub parts: Vec<DownloadLink>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub torrent: Option<DownloadLink>,
}

/// One downloadable file or mirror.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadLink {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub size: Option<String>,
}

impl DownloadLink {
    /// A link that points somewhere and carries a size.
    pub fn new(url: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            name: None,
            url: Some(url.into()),
            size: Some(size.into()),
        }
    }
}

// ── Requirements ────────────────────────────────────────────────────────────

/// Minimum and recommended specs, each an ordered list of (field, value).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemRequirements {
    #[serde(
        default,
        deserialize_with = "lenient::ordered_text_map",
        serialize_with = "lenient::pairs_as_map"
    )]
    pub minimum: Vec<(String, String)>,
    #[serde(
        default,
        deserialize_with = "lenient::ordered_text_map",
        serialize_with = "lenient::pairs_as_map"
    )]
    pub recommended: Vec<(String, String)>,
}

/// Turn a camelCase requirement key into a label: `"directX"` → `"Direct X"`.
pub fn requirement_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_ascii_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}
