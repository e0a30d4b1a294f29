// crates/geoseek-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeoSeekError>;

/// All failure modes reported by the engine and its loader.
///
/// Well-formed input never panics; malformed dataset entries are skipped
/// during the index build rather than surfaced here (see
/// [`crate::model::SearchIndex::from_raw`]).
#[derive(Debug, Error)]
pub enum GeoSeekError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `INIT` arrived without a dataset payload.
    #[error("no dataset provided")]
    MissingData,

    /// A `SEARCH` was handled before a successful `INIT`.
    #[error("search index not initialized")]
    NotInitialized,

    /// The worker thread hung up its channel.
    #[error("search worker disconnected")]
    WorkerDisconnected,
}
