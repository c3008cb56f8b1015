use std::sync::Arc;

use tokio::sync::Mutex;

use crate::board::Leaderboard;
use crate::error::{ServerError, ServerResult};

/// Shared handler state.
///
/// The board sits behind a single async mutex: each request, including the
/// snapshot write that follows a mutation, runs to completion before the next
/// one touches the heap.
#[derive(Clone, Debug)]
pub struct AppState {
    pub board: Arc<Mutex<Leaderboard>>,
}

impl AppState {
    pub fn new(board: Leaderboard) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
        }
    }

    /// Run a mutation on the blocking pool.
    ///
    /// Mutations end in a synchronous snapshot write. The lock guard moves
    /// into the blocking task and is released only after that write, so the
    /// file always reflects mutations in lock order.
    pub async fn mutate<F, R>(&self, f: F) -> ServerResult<R>
    where
        F: FnOnce(&mut Leaderboard) -> R + Send + 'static,
        R: Send + 'static,
    {
        let mut board = self.board.clone().lock_owned().await;
        tokio::task::spawn_blocking(move || f(&mut *board))
            .await
            .map_err(|e| ServerError::Internal(format!("board task failed: {e}")))
    }
}
