// crates/geoseek-core/src/engine.rs

//! The message-passing boundary around the search core.
//!
//! [`SearchEngine`] owns the index and answers one [`Request`] with one
//! [`Response`], synchronously — it is a plain function of its inputs and
//! can be driven directly. [`SearchWorker`] moves an engine onto a
//! dedicated thread behind a pair of channels so index construction and
//! query scanning never block the caller's thread. Until `INIT` succeeds,
//! every search answers an error; queueing or retrying is the caller's
//! concern, as is discarding stale responses (the echoed `query` field
//! exists for exactly that).

use crate::api::CountryView;
use crate::common::DefaultBackend;
use crate::error::{GeoSeekError, Result};
use crate::model::SearchIndex;
use crate::raw::CountriesRaw;
use crate::search::query::FilterKey;
use crate::search::rank;
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::JoinHandle;

/// A request to the engine, mirroring the wire protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    /// Build the index. Absent data is answered with an error and leaves
    /// the index unbuilt.
    Init { data: Option<CountriesRaw> },
    Search {
        query: String,
        #[serde(default)]
        max_results: Option<usize>,
    },
    /// List the recognized filter keys with usage hints.
    GetFilters,
}

/// The engine's answer to a single [`Request`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Response {
    Ready,
    Error {
        message: String,
    },
    Results {
        /// Echo of the request's query so callers can drop stale answers.
        query: String,
        results: Vec<CountryView>,
    },
    Filters {
        filters: BTreeMap<String, String>,
    },
}

/// The engine: an explicitly owned index plus the request dispatcher.
///
/// No ambient global — construct one, feed it an `INIT`, then hand it
/// searches.
#[derive(Debug)]
pub struct SearchEngine<B: GeoBackend> {
    index: Option<SearchIndex<B>>,
}

impl<B: GeoBackend> Default for SearchEngine<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GeoBackend> SearchEngine<B> {
    pub fn new() -> Self {
        SearchEngine { index: None }
    }

    /// True once an `INIT` has built the index.
    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<&SearchIndex<B>> {
        self.index.as_ref()
    }

    /// Handle one request, synchronously, to completion.
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::Init { data: None } => Response::Error {
                message: GeoSeekError::MissingData.to_string(),
            },
            Request::Init { data: Some(data) } => {
                self.index = Some(SearchIndex::from_raw(data));
                Response::Ready
            }
            Request::Search { query, max_results } => match &self.index {
                None => Response::Error {
                    message: GeoSeekError::NotInitialized.to_string(),
                },
                Some(index) => {
                    let max = max_results.unwrap_or(rank::DEFAULT_MAX_RESULTS);
                    let results = rank::search(index, &query, max);
                    Response::Results { query, results }
                }
            },
            Request::GetFilters => Response::Filters {
                filters: FilterKey::ALL
                    .iter()
                    .map(|k| (k.as_str().to_string(), k.help().to_string()))
                    .collect(),
            },
        }
    }
}

/// A [`SearchEngine`] running on its own thread behind request/response
/// channels.
///
/// Requests are processed strictly one at a time in arrival order; there is
/// no intra-query parallelism and no cancellation — early termination in
/// the ranker bounds per-query work instead. Dropping the worker closes the
/// request channel and joins the thread.
#[derive(Debug)]
pub struct SearchWorker {
    tx: Option<Sender<Request>>,
    rx: Receiver<Response>,
    thread: Option<JoinHandle<()>>,
}

impl SearchWorker {
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = channel::<Request>();
        let (resp_tx, resp_rx) = channel::<Response>();

        let thread = std::thread::spawn(move || {
            let mut engine = SearchEngine::<DefaultBackend>::new();
            while let Ok(request) = req_rx.recv() {
                if resp_tx.send(engine.handle(request)).is_err() {
                    break;
                }
            }
        });

        SearchWorker {
            tx: Some(req_tx),
            rx: resp_rx,
            thread: Some(thread),
        }
    }

    /// Send one request and block for its response.
    pub fn request(&self, request: Request) -> Result<Response> {
        self.tx
            .as_ref()
            .ok_or(GeoSeekError::WorkerDisconnected)?
            .send(request)
            .map_err(|_| GeoSeekError::WorkerDisconnected)?;
        self.rx.recv().map_err(|_| GeoSeekError::WorkerDisconnected)
    }

    pub fn init(&self, data: CountriesRaw) -> Result<Response> {
        self.request(Request::Init { data: Some(data) })
    }

    pub fn search(&self, query: &str, max_results: Option<usize>) -> Result<Response> {
        self.request(Request::Search {
            query: query.to_string(),
            max_results,
        })
    }

    pub fn filters(&self) -> Result<Response> {
        self.request(Request::GetFilters)
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        drop(self.tx.take());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
