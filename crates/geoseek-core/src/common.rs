// crates/geoseek-core/src/common.rs
use crate::model::SearchIndex;
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

/// Default backend: plain `String` + `f64`.
///
/// This backend provides the best ergonomics and is suitable for most
/// applications; a compact backend (interned or small-string storage) can be
/// swapped in later behind the same [`GeoBackend`] surface.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_string()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// Convenient alias used in examples and the CLI.
pub type StandardBackend = DefaultBackend;
/// The index most callers want.
pub type DefaultIndex = SearchIndex<DefaultBackend>;

/// Simple aggregate statistics for the search index.
///
/// Returned by [`SearchIndex::stats`]; counts reflect the records that
/// survived the build (malformed entries are skipped, so these can be lower
/// than the raw dataset's totals).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}
