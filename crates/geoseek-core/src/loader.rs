// crates/geoseek-core/src/loader.rs

//! # Dataset Loader
//!
//! Handles the physical layer (I/O, decompression) for the source dataset
//! and hands the parsed countries to the index builder. The dataset is the
//! usual `countries+states+cities.json` export, optionally gzipped.

use crate::common::DefaultBackend;
use crate::error::{GeoSeekError, Result};
use crate::model::SearchIndex;
use crate::raw::CountriesRaw;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension says so. Returns a generic reader so the caller doesn't care
/// about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoSeekError::NotFound(format!("{}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

impl SearchIndex<DefaultBackend> {
    /// Load a `.json` (or, with the `compact` feature, `.json.gz`) dataset
    /// and build the index from it.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = open_stream(path.as_ref())?;
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }
}
