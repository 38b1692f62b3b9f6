//! Catalog loading from disk, inline text, or HTTP.
//!
//! The catalog is a JSON (or YAML) array of game objects. Loading is
//! strict about the document shape and forgiving about individual records:
//! a payload that is not an array is an error, but a single broken entry is
//! logged and skipped so one typo does not take the storefront down.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use jnr_store_core::GameRecord;
use serde_json::Value;

use crate::error::LoadError;

/// Where a catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a command-line or settings value: `http(s)://` is a URL,
    /// anything else a file path.
    pub fn from_arg(arg: &str) -> Self {
        let trimmed = arg.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from a file name or URL path. JSON unless it ends in `.yaml`/`.yml`.
    fn from_name(name: &str) -> Self {
        let name = name.split(['?', '#']).next().unwrap_or(name).to_lowercase();
        if name.ends_with(".yaml") || name.ends_with(".yml") {
            Self::Yaml
        } else {
            Self::Json
        }
    }
}

/// Load a catalog from any source.
pub fn load_records(source: &CatalogSource) -> Result<Vec<GameRecord>, LoadError> {
    match source {
        CatalogSource::File(path) => load_records_from_path(path),
        CatalogSource::Url(url) => load_records_from_url(url),
    }
}

/// Load a catalog, logging the failure and returning an empty list instead
/// of an error. Callers get something to render either way.
pub fn load_or_empty(source: &CatalogSource) -> Vec<GameRecord> {
    match load_records(source) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Could not load catalog from {source}: {e}");
            Vec::new()
        }
    }
}

/// Load a catalog file. `.yaml`/`.yml` files are read as YAML, everything else as JSON.
pub fn load_records_from_path(path: &Path) -> Result<Vec<GameRecord>, LoadError> {
    let origin = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: origin.clone(),
        source: e,
    })?;
    let format = Format::from_name(&path.to_string_lossy());
    parse_document(&contents, format, &origin)
}

/// Fetch a catalog over HTTP(S) with a blocking GET.
pub fn load_records_from_url(url: &str) -> Result<Vec<GameRecord>, LoadError> {
    log::debug!("Fetching catalog from {url}");
    let response = reqwest::blocking::get(url).map_err(|e| LoadError::Http {
        url: url.to_string(),
        source: e,
    })?;

    if !response.status().is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text().map_err(|e| LoadError::Http {
        url: url.to_string(),
        source: e,
    })?;
    parse_document(&body, Format::from_name(url), url)
}

/// Parse a JSON catalog held in memory.
pub fn load_records_from_str(json: &str) -> Result<Vec<GameRecord>, LoadError> {
    parse_document(json, Format::Json, "<inline>")
}

/// Parse a YAML catalog held in memory.
pub fn load_records_from_yaml_str(yaml: &str) -> Result<Vec<GameRecord>, LoadError> {
    parse_document(yaml, Format::Yaml, "<inline>")
}

fn parse_document(text: &str, format: Format, origin: &str) -> Result<Vec<GameRecord>, LoadError> {
    let document: Value = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| LoadError::Json {
            origin: origin.to_string(),
            source: e,
        })?,
        Format::Yaml => serde_yml::from_str(text).map_err(|e| LoadError::Yaml {
            origin: origin.to_string(),
            source: e,
        })?,
    };
    records_from_value(document, origin)
}

/// Validate the document shape and convert each entry, skipping broken,
/// id-less, and duplicate-id records.
fn records_from_value(document: Value, origin: &str) -> Result<Vec<GameRecord>, LoadError> {
    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(LoadError::NotAnArray {
                origin: origin.to_string(),
                found: json_kind(&other),
            });
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut seen = HashSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let record: GameRecord = match serde_json::from_value(entry) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed catalog entry #{index} in {origin}: {e}");
                continue;
            }
        };
        if record.id.is_empty() {
            log::warn!("Skipping catalog entry #{index} in {origin}: missing id");
            continue;
        }
        if !seen.insert(record.id.clone()) {
            log::warn!(
                "Skipping catalog entry #{index} in {origin}: duplicate id '{}'",
                record.id
            );
            continue;
        }
        records.push(record);
    }

    log::debug!("Loaded {} games from {origin}", records.len());
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
