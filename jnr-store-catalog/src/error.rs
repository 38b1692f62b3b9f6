use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("JSON parse error in {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },

    #[error("YAML parse error in {origin}: {source}")]
    Yaml {
        origin: String,
        source: serde_yml::Error,
    },

    #[error("Catalog in {origin} is not an array (found {found})")]
    NotAnArray { origin: String, found: &'static str },
}

/// Query misconfiguration. Reported alongside results, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Unknown sort key '{0}' (expected one of: popular, newest, oldest, title-asc, title-desc, size-asc, size-desc)")]
    UnknownSortKey(String),
}
