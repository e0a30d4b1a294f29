// crates/geoseek-core/src/lib.rs

pub mod api; // JSON views of matched records
pub mod common;
pub mod engine;
pub mod error;
#[cfg(feature = "json")]
pub mod loader; // The public dataset loader
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;
// Shared Raw Input (consumed by the builder and the INIT protocol message)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{GeoSeekError, Result};
pub use crate::model::{Ancestry, CountryMeta, LocationRecord, PlaceKind, SearchIndex};
pub use crate::api::{CityView, CountryCodeView, CountryView, StateView};
pub use crate::common::{DbStats, DefaultBackend, DefaultIndex, StandardBackend};
pub use crate::engine::{Request, Response, SearchEngine, SearchWorker};
pub use crate::search::{FilterKey, Query, ScoredMatch};
pub use crate::text::{equals_folded, fold_key, tokenize};
pub use crate::traits::{GeoBackend, NameMatch};
