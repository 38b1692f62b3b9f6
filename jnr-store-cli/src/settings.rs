//! Saved settings (default catalog, page size, related count).
//!
//! The settings file is `~/.config/jnr-store/settings.toml`:
//!
//! ```toml
//! [catalog]
//! source = "https://example.com/games.json"
//!
//! [listing]
//! page_size = 24
//!
//! [related]
//! count = 6
//! ```
//!
//! Every key is optional. A missing or unreadable file means defaults.

use std::io;
use std::path::{Path, PathBuf};

use jnr_store_catalog::CatalogSource;

/// Catalog used when neither `--catalog` nor the settings file names one.
pub(crate) const DEFAULT_CATALOG: &str = "games.json";

/// Canonical path to the settings file: `~/.config/jnr-store/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("jnr-store").join("settings.toml")
}

/// Values read from `settings.toml`. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Settings {
    pub catalog_source: Option<String>,
    pub page_size: Option<usize>,
    pub related_count: Option<usize>,
}

impl Settings {
    /// Load from the canonical path.
    pub(crate) fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load from `path`, ignoring anything missing or malformed.
    pub(crate) fn load_from(path: &Path) -> Self {
        let Some(doc) = read_document(path) else {
            return Self::default();
        };
        Self {
            catalog_source: doc
                .get("catalog")
                .and_then(|t| t.get("source"))
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            page_size: positive(&doc, "listing", "page_size"),
            related_count: positive(&doc, "related", "count"),
        }
    }

    /// Resolve the catalog using a priority chain:
    ///
    /// 1. `--catalog` (if `Some`)
    /// 2. Saved `catalog.source`
    /// 3. `./games.json`
    pub(crate) fn catalog_source(&self, cli_override: Option<&str>) -> CatalogSource {
        let arg = cli_override
            .or(self.catalog_source.as_deref())
            .unwrap_or(DEFAULT_CATALOG);
        CatalogSource::from_arg(arg)
    }
}

fn read_document(path: &Path) -> Option<toml::Value> {
    let contents = std::fs::read_to_string(path).ok()?;
    match contents.parse::<toml::Value>() {
        Ok(doc) => Some(doc),
        Err(e) => {
            log::warn!("Ignoring unreadable settings file {}: {e}", path.display());
            None
        }
    }
}

fn positive(doc: &toml::Value, table: &str, key: &str) -> Option<usize> {
    let value = doc.get(table)?.get(key)?.as_integer()?;
    usize::try_from(value).ok().filter(|&n| n > 0)
}

/// Save (or clear) `catalog.source` in the settings file.
pub(crate) fn save_catalog_source(source: Option<&str>) -> io::Result<()> {
    save_catalog_source_to(&settings_path(), source)
}

/// Update `catalog.source` in the file at `path`, keeping every other key.
///
/// A missing file starts out empty. A file that exists but does not parse is
/// left alone and reported as [`io::ErrorKind::InvalidData`].
pub(crate) fn save_catalog_source_to(path: &Path, source: Option<&str>) -> io::Result<()> {
    let mut doc = document_for_update(path)?;
    let value = source.map(|s| toml::Value::String(s.to_string()));
    set_key(&mut doc, "catalog", "source", value)?;
    write_document(path, &doc)
}

fn document_for_update(path: &Path) -> io::Result<toml::Value> {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse::<toml::Value>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} is not valid TOML: {e}", path.display()),
            )
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(toml::Value::Table(Default::default())),
        Err(e) => Err(e),
    }
}

/// Set or remove `[table].key`, creating the table when needed.
fn set_key(doc: &mut toml::Value, table: &str, key: &str, value: Option<toml::Value>) -> io::Result<()> {
    let root = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings root is not a table"))?;
    let section = root
        .entry(table)
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| io::Error::other(format!("[{table}] is not a table")))?;
    match value {
        Some(value) => {
            section.insert(key.to_string(), value);
        }
        None => {
            section.remove(key);
        }
    }
    Ok(())
}

/// Write through a sibling temp file, then rename it into place.
fn write_document(path: &Path, doc: &toml::Value) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(doc).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, serialized)?;
    std::fs::rename(&tmp, path)
}

/// The whole settings file, pretty-printed, for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let doc = read_document(&settings_path())?;
    toml::to_string_pretty(&doc).ok()
}
