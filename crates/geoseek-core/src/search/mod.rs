// crates/geoseek-core/src/search/mod.rs

//! The query pipeline: parse → score → rank → format.

pub mod fuzzy;
pub mod query;
pub mod rank;

pub use fuzzy::fuzzy_score;
pub use query::{FilterKey, Query};
pub use rank::{rank, search, ScoredMatch, DEFAULT_MAX_RESULTS, MIN_QUERY_CHARS, MIN_SCORE};
