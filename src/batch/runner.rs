//! Concurrency-limited execution of independent async tasks.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use tokio::task::{JoinError, JoinSet};

/// A unit of async work producing a value.
///
/// A task does nothing until the runner spawns it.
pub type Task<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'static>>;

/// Boxes a future into a [`Task`].
pub fn task<T, E, F>(future: F) -> Task<T, E>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
{
    Box::pin(future)
}

/// Runs tasks in consecutive chunks of at most `concurrency_limit`.
///
/// All tasks of a chunk are spawned together and the chunk completes before
/// the next one starts, so no more than `concurrency_limit` tasks are ever in
/// flight. Results of a chunk come back in submission order regardless of
/// completion order.
///
/// Chunks start only when [`next_chunk`](Self::next_chunk) is called. A
/// runner can be consumed once: tasks are never replayed. The first failure
/// aborts the rest of its chunk and drops every later chunk.
///
/// # Example
///
/// ```rust
/// use moysklad::batch::{task, TaskRunner};
///
/// # tokio_test::block_on(async {
/// let tasks = (0..5).map(|i| task(async move { Ok::<_, tokio::task::JoinError>(i * 10) }));
/// let mut runner = TaskRunner::new(tasks, 2);
///
/// assert_eq!(runner.next_chunk().await.unwrap().unwrap(), vec![0, 10]);
/// assert_eq!(runner.next_chunk().await.unwrap().unwrap(), vec![20, 30]);
/// assert_eq!(runner.next_chunk().await.unwrap().unwrap(), vec![40]);
/// assert!(runner.next_chunk().await.is_none());
/// # });
/// ```
pub struct TaskRunner<T, E> {
    pending: VecDeque<Task<T, E>>,
    concurrency_limit: usize,
}

impl<T, E> TaskRunner<T, E>
where
    T: Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    /// Creates a runner over `tasks`. A limit of 0 is treated as 1.
    pub fn new(tasks: impl IntoIterator<Item = Task<T, E>>, concurrency_limit: usize) -> Self {
        Self {
            pending: tasks.into_iter().collect(),
            concurrency_limit: concurrency_limit.max(1),
        }
    }

    /// Returns the number of tasks not yet started.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Runs the next chunk and returns its results in submission order.
    ///
    /// Returns `None` once every task has been consumed.
    ///
    /// # Errors
    ///
    /// Yields `Some(Err(_))` with the first task error, or with a
    /// [`JoinError`] if a task panicked. Remaining tasks are discarded.
    pub async fn next_chunk(&mut self) -> Option<Result<Vec<T>, E>> {
        if self.pending.is_empty() {
            return None;
        }

        let size = self.concurrency_limit.min(self.pending.len());
        let mut set = JoinSet::new();
        for (index, task) in self.pending.drain(..size).enumerate() {
            set.spawn(async move { (index, task.await) });
        }

        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(size).collect();
        while let Some(joined) = set.join_next().await {
            let failure = match joined {
                Ok((index, Ok(value))) => {
                    slots[index] = Some(value);
                    continue;
                }
                Ok((_, Err(err))) => err,
                Err(join_err) => E::from(join_err),
            };
            // dropping the set aborts the tasks still running
            self.pending.clear();
            return Some(Err(failure));
        }

        Some(Ok(slots.into_iter().flatten().collect()))
    }

    /// Runs every chunk and concatenates the results.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub async fn run_all(mut self) -> Result<Vec<T>, E> {
        let mut results = Vec::with_capacity(self.pending.len());
        while let Some(chunk) = self.next_chunk().await {
            results.extend(chunk?);
        }
        Ok(results)
    }
}

impl<T, E> std::fmt::Debug for TaskRunner<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRunner")
            .field("pending", &self.pending.len())
            .field("concurrency_limit", &self.concurrency_limit)
            .finish()
    }
}
