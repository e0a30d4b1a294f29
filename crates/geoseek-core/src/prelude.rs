// crates/geoseek-core/src/prelude.rs

//! One-stop imports for typical users of the crate.

pub use crate::api::{CityView, CountryCodeView, CountryView, StateView};
pub use crate::common::{DbStats, DefaultBackend, DefaultIndex, StandardBackend};
pub use crate::engine::{Request, Response, SearchEngine, SearchWorker};
pub use crate::error::{GeoSeekError, Result};
pub use crate::model::{Ancestry, CountryMeta, LocationRecord, PlaceKind, SearchIndex};
pub use crate::search::{
    fuzzy_score, rank, search, FilterKey, Query, ScoredMatch, DEFAULT_MAX_RESULTS,
};
pub use crate::text::{equals_folded, fold_key, tokenize};
pub use crate::traits::{GeoBackend, NameMatch};
