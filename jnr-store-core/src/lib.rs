//! Core data model for the JNR game store catalog.
//!
//! Defines [`GameRecord`] and its nested download and requirement types,
//! plus the small parsers the storefront leans on: download sizes, release
//! dates, and "4.5/5" style ratings. Nothing here does I/O; loading lives in
//! `jnr-store-catalog`.

pub mod downloads;
pub mod lenient;
pub mod rating;
pub mod record;
pub mod util;

pub use downloads::{DownloadKind, DownloadOption, DownloadSummary, PartEntry};
pub use rating::{Rating, Star};
pub use record::{
    DownloadLink, DownloadLinks, GameRecord, MULTIPLAYER_TAGS, NOT_AVAILABLE, SystemRequirements,
    UNKNOWN_TITLE, requirement_label,
};
pub use util::{format_megabytes, parse_release_date, parse_size_mb};

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod record_tests;
