//! Mock remote catalog for testing.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::remote::{RemoteCatalog, RemoteError, SearchCandidate};

/// A scripted reply for one search call.
struct ScriptedReply {
    /// Simulated latency before the reply is produced.
    delay: Duration,
    outcome: Result<Vec<SearchCandidate>, RemoteError>,
}

/// Mock implementation of the RemoteCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Script replies per call, in order, with optional simulated latency
/// - Track search queries for assertions
/// - Simulate transport/provider failures
///
/// Calls beyond the scripted queue succeed with the default result set
/// (empty unless configured).
pub struct MockRemoteCatalog {
    /// Scripted replies, consumed one per search call.
    replies: Arc<RwLock<VecDeque<ScriptedReply>>>,
    /// Results returned once the scripted queue is exhausted.
    default_results: Arc<RwLock<Vec<SearchCandidate>>>,
    /// Recorded search queries.
    queries: Arc<RwLock<Vec<String>>>,
}

impl std::fmt::Debug for MockRemoteCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockRemoteCatalog")
            .field("replies", &"<replies>")
            .field("default_results", &"<default_results>")
            .field("queries", &"<queries>")
            .finish()
    }
}

impl Default for MockRemoteCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRemoteCatalog {
    /// Create a new mock with no scripted replies and empty default results.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(RwLock::new(VecDeque::new())),
            default_results: Arc::new(RwLock::new(Vec::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Script the next search call to succeed with `results` immediately.
    pub async fn enqueue_results(&self, results: Vec<SearchCandidate>) {
        self.replies.write().await.push_back(ScriptedReply {
            delay: Duration::ZERO,
            outcome: Ok(results),
        });
    }

    /// Script the next search call to succeed with `results` after `delay`.
    pub async fn enqueue_results_after(&self, delay: Duration, results: Vec<SearchCandidate>) {
        self.replies.write().await.push_back(ScriptedReply {
            delay,
            outcome: Ok(results),
        });
    }

    /// Script the next search call to fail with `error`.
    pub async fn enqueue_error(&self, error: RemoteError) {
        self.replies.write().await.push_back(ScriptedReply {
            delay: Duration::ZERO,
            outcome: Err(error),
        });
    }

    /// Set the results returned once the scripted queue is exhausted.
    pub async fn set_default_results(&self, results: Vec<SearchCandidate>) {
        *self.default_results.write().await = results;
    }

    /// All queries searched so far, in call order.
    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    /// Number of search calls made.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }
}

#[async_trait]
impl RemoteCatalog for MockRemoteCatalog {
    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, RemoteError> {
        self.queries.write().await.push(query.to_string());

        let reply = self.replies.write().await.pop_front();
        match reply {
            Some(reply) => {
                if !reply.delay.is_zero() {
                    tokio::time::sleep(reply.delay).await;
                }
                reply.outcome
            }
            None => Ok(self.default_results.read().await.clone()),
        }
    }
}
