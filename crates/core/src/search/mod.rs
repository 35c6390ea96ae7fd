//! Remote search session orchestration.
//!
//! The controller owns the ephemeral candidate set for the current query
//! together with its loading and error flags. A query issued while another
//! is in flight supersedes it: only the most recently submitted query may
//! commit its outcome, stale results are dropped on arrival. The in-flight
//! call itself is not cancelled; there is no "cancelled" state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use crate::remote::{RemoteCatalog, SearchCandidate};

/// Minimum query length before a remote call is made.
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

/// Default wait between a submitted query and the remote call.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Search session tuning.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Trimmed queries shorter than this never reach the remote provider.
    pub min_query_len: usize,
    /// Wait this long before issuing the remote call; a newer query
    /// submitted in the meantime wins without any network traffic.
    pub debounce: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Phase of the current query session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Observable state of a search session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchState {
    /// Current phase.
    pub phase: SearchPhase,
    /// The most recently submitted query.
    pub query: String,
    /// Candidates of the most recent completed query. Kept on screen while
    /// the next query loads and replaced when its results arrive; cleared
    /// on failure so an error never sits beside another query's results.
    pub results: Vec<SearchCandidate>,
    /// Human-readable message of the most recent failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }
}

/// Drives remote search sessions and publishes their state to observers.
pub struct SearchController {
    remote: Arc<dyn RemoteCatalog>,
    options: SearchOptions,
    state_tx: Arc<watch::Sender<SearchState>>,
    /// Bumped on every accepted submission; a background task may only
    /// commit if its generation is still the current one.
    generation: Arc<AtomicU64>,
}

impl SearchController {
    /// Create a controller with default options.
    pub fn new(remote: Arc<dyn RemoteCatalog>) -> Self {
        Self::with_options(remote, SearchOptions::default())
    }

    /// Create a controller with explicit options.
    pub fn with_options(remote: Arc<dyn RemoteCatalog>, options: SearchOptions) -> Self {
        let (state_tx, _) = watch::channel(SearchState::default());
        Self {
            remote,
            options,
            state_tx: Arc::new(state_tx),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Subscribe to search state updates.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }

    /// Current state snapshot.
    pub fn state(&self) -> SearchState {
        self.state_tx.borrow().clone()
    }

    /// Submit a query.
    ///
    /// Trimmed queries below the minimum length leave the state untouched.
    /// Otherwise the session moves to `Loading` (error cleared, previous
    /// results retained until new ones arrive) and a background task
    /// performs the remote call.
    pub fn submit(&self, query: &str) {
        let query = query.trim().to_string();
        if query.chars().count() < self.options.min_query_len {
            debug!("Query '{}' below minimum length, ignoring", query);
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.state_tx.send_modify(|state| {
            state.phase = SearchPhase::Loading;
            state.query = query.clone();
            state.error = None;
        });

        let remote = Arc::clone(&self.remote);
        let state_tx = Arc::clone(&self.state_tx);
        let current = Arc::clone(&self.generation);
        let debounce = self.options.debounce;

        tokio::spawn(async move {
            if !debounce.is_zero() {
                tokio::time::sleep(debounce).await;
                if current.load(Ordering::SeqCst) != generation {
                    debug!("Query '{}' superseded during debounce", query);
                    return;
                }
            }

            let outcome = remote.search(&query).await;

            match outcome {
                Ok(candidates) => {
                    // The generation check runs under the channel lock so a
                    // stale result can never overwrite a newer submission.
                    let committed = state_tx.send_if_modified(|state| {
                        if current.load(Ordering::SeqCst) != generation {
                            return false;
                        }
                        state.phase = SearchPhase::Success;
                        state.results = candidates;
                        state.error = None;
                        true
                    });
                    if committed {
                        debug!("Query '{}' committed", query);
                    } else {
                        debug!("Dropping superseded result for query '{}'", query);
                    }
                }
                Err(e) => {
                    let message = e.to_string();
                    state_tx.send_if_modified(|state| {
                        if current.load(Ordering::SeqCst) != generation {
                            return false;
                        }
                        debug!("Query '{}' failed: {}", query, message);
                        state.phase = SearchPhase::Failed;
                        state.results.clear();
                        state.error = Some(message.clone());
                        true
                    });
                }
            }
        });
    }

    /// Discard the current session (the search view was closed).
    ///
    /// Results and error are cleared and any in-flight query result will be
    /// dropped on arrival.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state_tx.send_replace(SearchState::default());
    }
}
