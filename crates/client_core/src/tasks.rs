//! Cancellable background work owned by a single view.
//!
//! Every fetch or delay a view starts is keyed by an [`OperationToken`].
//! Completions travel back over a channel and are applied by the owning
//! view on its own thread, so view state never needs a lock. Dropping the
//! [`ViewTasks`] aborts whatever is still pending.

use std::{collections::HashMap, future::Future, time::Duration};

use tokio::{
    runtime::Handle,
    sync::mpsc,
    task::JoinHandle,
    time::Instant,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationToken(u64);

impl OperationToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

pub struct ViewTasks<E> {
    runtime: Handle,
    completions_tx: mpsc::UnboundedSender<(OperationToken, E)>,
    completions_rx: mpsc::UnboundedReceiver<(OperationToken, E)>,
    pending: HashMap<OperationToken, JoinHandle<()>>,
    next_token: u64,
}

impl<E: Send + 'static> ViewTasks<E> {
    pub fn new(runtime: Handle) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            completions_tx,
            completions_rx,
            pending: HashMap::new(),
            next_token: 1,
        }
    }

    pub fn spawn<F>(&mut self, operation: &'static str, work: F) -> OperationToken
    where
        F: Future<Output = E> + Send + 'static,
    {
        let token = OperationToken(self.next_token);
        self.next_token += 1;

        let completions_tx = self.completions_tx.clone();
        let handle = self.runtime.spawn(async move {
            let event = work.await;
            // The receiver is gone once the view is torn down.
            let _ = completions_tx.send((token, event));
        });
        self.pending.insert(token, handle);
        debug!(operation, token = token.0, "view task started");
        token
    }

    /// Delivers `event` once `delay` has elapsed, measured from this call.
    pub fn schedule_after(
        &mut self,
        operation: &'static str,
        delay: Duration,
        event: E,
    ) -> OperationToken {
        let deadline = Instant::now() + delay;
        self.spawn(operation, async move {
            tokio::time::sleep_until(deadline).await;
            event
        })
    }

    pub fn cancel(&mut self, token: OperationToken) -> bool {
        match self.pending.remove(&token) {
            Some(handle) => {
                handle.abort();
                debug!(token = token.0, "view task cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, token: OperationToken) -> bool {
        self.pending.contains_key(&token)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Next finished operation without waiting. Completions of cancelled
    /// operations are dropped here even if they were already queued.
    pub fn try_next(&mut self) -> Option<(OperationToken, E)> {
        while let Ok((token, event)) = self.completions_rx.try_recv() {
            if self.pending.remove(&token).is_some() {
                return Some((token, event));
            }
        }
        None
    }

    /// Waits for the next finished operation; `None` when nothing is pending.
    pub async fn next(&mut self) -> Option<(OperationToken, E)> {
        while !self.pending.is_empty() {
            let (token, event) = self.completions_rx.recv().await?;
            if self.pending.remove(&token).is_some() {
                return Some((token, event));
            }
        }
        None
    }
}

impl<E> ViewTasks<E> {
    pub fn cancel_all(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        debug!(count = self.pending.len(), "cancelling pending view tasks");
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}

impl<E> Drop for ViewTasks<E> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
#[path = "tests/tasks_tests.rs"]
mod tests;
