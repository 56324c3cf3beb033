//! In-flight fetch bookkeeping.
//!
//! Fetches are spawned as tokio tasks and polled for completion from the
//! draw loop; nothing here blocks rendering. Tasks are never cancelled
//! mid-flight (stale detail responses are discarded by sequence number in
//! the app state instead), but all handles are aborted on quit.

use crate::app::DetailRequest;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::warn;
use zapview_api::{ApiClient, ApiError, Conversation};

/// A completed fetch, ready to be applied to the app state.
#[derive(Debug)]
pub enum FetchOutcome {
    List(Result<Vec<Conversation>, ApiError>),
    Detail {
        seq: u64,
        result: Result<Conversation, ApiError>,
    },
}

/// Pool of in-flight fetch tasks.
pub struct FetchPool {
    client: Arc<ApiClient>,
    handles: Vec<JoinHandle<FetchOutcome>>,
}

impl FetchPool {
    /// Create a pool around the given client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Arc::new(client),
            handles: Vec::new(),
        }
    }

    /// Spawn a conversation-list fetch.
    pub fn spawn_list(&mut self) {
        let client = Arc::clone(&self.client);
        self.handles.push(tokio::spawn(async move {
            FetchOutcome::List(client.list_conversations().await)
        }));
    }

    /// Spawn a conversation-detail fetch.
    pub fn spawn_detail(&mut self, request: DetailRequest) {
        let client = Arc::clone(&self.client);
        self.handles.push(tokio::spawn(async move {
            FetchOutcome::Detail {
                seq: request.seq,
                result: client.conversation_detail(&request.id).await,
            }
        }));
    }

    /// Collect outcomes of all finished tasks without blocking on the rest.
    pub async fn drain_finished(&mut self) -> Vec<FetchOutcome> {
        let mut finished = Vec::new();
        for (i, handle) in self.handles.iter().enumerate() {
            if handle.is_finished() {
                finished.push(i);
            }
        }

        let mut outcomes = Vec::new();
        for i in finished.into_iter().rev() {
            match self.handles.remove(i).await {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => warn!(%err, "fetch task panicked or was aborted"),
            }
        }
        outcomes
    }

    /// Abort all remaining tasks (on quit).
    pub fn abort_all(self) {
        for handle in self.handles {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A client pointed at a port nothing listens on: every fetch fails
    /// fast with a transport error, which is enough to exercise the pool.
    async fn unreachable_client() -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        ApiClient::new(format!("http://{addr}"))
    }

    async fn wait_for_outcomes(pool: &mut FetchPool, count: usize) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..200 {
            outcomes.extend(pool.drain_finished().await);
            if outcomes.len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        outcomes
    }

    #[tokio::test]
    async fn test_detail_outcome_carries_sequence_number() {
        let mut pool = FetchPool::new(unreachable_client().await);
        pool.spawn_detail(DetailRequest {
            id: "abc12345-xyz".into(),
            seq: 7,
        });

        let outcomes = wait_for_outcomes(&mut pool, 1).await;
        assert_eq!(outcomes.len(), 1);
        match &outcomes[0] {
            FetchOutcome::Detail { seq, result } => {
                assert_eq!(*seq, 7);
                assert!(result.is_err());
            }
            FetchOutcome::List(_) => panic!("expected a detail outcome"),
        }
    }

    #[tokio::test]
    async fn test_drain_removes_finished_handles() {
        let mut pool = FetchPool::new(unreachable_client().await);
        pool.spawn_list();
        pool.spawn_list();

        let outcomes = wait_for_outcomes(&mut pool, 2).await;
        assert_eq!(outcomes.len(), 2);
        assert!(pool.handles.is_empty());
    }
}
