//! Fetching every page of a collection.

use std::future::Future;

use crate::batch::page::{CollectionResult, Page};
use crate::batch::runner::{task, TaskRunner};
use crate::clients::{HttpClient, HttpError};
use crate::config::BatchOptions;

/// Fetches every row of a collection.
///
/// `fetch` is called with `(limit, offset)` and must return the page at that
/// offset. The first page is fetched on its own; its `meta.size` decides how
/// many more pages exist. The remaining pages run through a [`TaskRunner`]
/// bounded by the concurrency limit, and their rows are appended in
/// ascending offset order.
///
/// The page size is `page_limit`, or `expanded_page_limit` when
/// `uses_expand` is set.
///
/// # Errors
///
/// Returns the first error raised by `fetch` or by a panicked page task.
/// No partial result is returned.
///
/// # Example
///
/// ```rust
/// use moysklad::batch::{batch_get, Page, PageMeta};
/// use moysklad::{BatchOptions, HttpError};
/// use serde_json::Value;
///
/// # tokio_test::block_on(async {
/// let options = BatchOptions::new(2, 2, 3).unwrap();
/// let result = batch_get(
///     &options,
///     |limit, offset| async move {
///         let rows = (offset..(offset + limit).min(5)).collect();
///         Ok::<_, HttpError>(Page {
///             context: Value::Null,
///             meta: PageMeta { size: 5, limit, offset, ..PageMeta::default() },
///             rows,
///         })
///     },
///     false,
/// )
/// .await
/// .unwrap();
///
/// assert_eq!(result.rows, vec![0, 1, 2, 3, 4]);
/// # });
/// ```
pub async fn batch_get<T, F, Fut>(
    options: &BatchOptions,
    fetch: F,
    uses_expand: bool,
) -> Result<CollectionResult<T>, HttpError>
where
    T: Send + 'static,
    F: Fn(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, HttpError>> + Send + 'static,
{
    let limit = options.limit_for(uses_expand);
    let first = fetch(limit, 0).await?;

    let size = first.meta.size;
    let offsets = page_offsets(size, limit);
    tracing::debug!(size, limit, extra_pages = offsets.len(), "Fetching collection");

    let mut rows = first.rows;
    let context = first.context;

    let tasks = offsets.into_iter().map(|offset| task(fetch(limit, offset)));
    let mut runner = TaskRunner::new(tasks, options.concurrency_limit());
    while let Some(chunk) = runner.next_chunk().await {
        for page in chunk? {
            rows.extend(page.rows);
        }
    }

    Ok(CollectionResult { rows, context })
}

/// Offsets of every page after the first: `limit, 2*limit, ...` below `size`.
fn page_offsets(size: u32, limit: u32) -> Vec<u32> {
    let limit = limit.max(1);
    let mut offsets = Vec::new();
    let mut offset = limit;
    while offset < size {
        offsets.push(offset);
        offset = offset.saturating_add(limit);
    }
    offsets
}

impl HttpClient {
    /// Fetches every row of a collection using this client's batch options.
    ///
    /// See [`batch_get`] for the algorithm.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any page fetch.
    pub async fn batch_get<T, F, Fut>(
        &self,
        fetch: F,
        uses_expand: bool,
    ) -> Result<CollectionResult<T>, HttpError>
    where
        T: Send + 'static,
        F: Fn(u32, u32) -> Fut,
        Fut: Future<Output = Result<Page<T>, HttpError>> + Send + 'static,
    {
        batch_get(self.config().batch_options(), fetch, uses_expand).await
    }
}
