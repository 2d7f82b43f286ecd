//! The [`Entity`] trait: CRUD and listing for one entity type.
//!
//! Implementors name their endpoint; the trait supplies every operation on
//! top of [`HttpClient`], the query composer and the batch engine.
//!
//! # Implementing an Entity
//!
//! ```rust,ignore
//! use moysklad::rest::Entity;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Store {
//!     pub id: Option<String>,
//!     pub name: Option<String>,
//! }
//!
//! impl Entity for Store {
//!     const NAME: &'static str = "store";
//!     const PATH: &'static str = "entity/store";
//! }
//!
//! let stores = Store::all(&client, &PageRequestOptions::new()).await?;
//! ```

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::batch::{CollectionResult, Page};
use crate::clients::{HttpClient, HttpError, RequestPath};
use crate::query::{compose_search_parameters, ExpandTree, PageRequestOptions};

/// An entity type exposed under a fixed endpoint.
///
/// Every method issues plain requests through the client, so failures are
/// the client's [`HttpError`]s.
#[allow(async_fn_in_trait)]
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + Sized + 'static {
    /// Entity type name as it appears in `meta.type` (e.g. `product`).
    const NAME: &'static str;

    /// Endpoint path under the base URL (e.g. `entity/product`).
    const PATH: &'static str;

    /// Fetches one page.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Query`] for an invalid expand tree, or any
    /// request error.
    async fn list(client: &HttpClient, options: &PageRequestOptions) -> Result<Page<Self>, HttpError> {
        list_page(client, Self::PATH, options).await
    }

    /// Fetches every row of the collection concurrently.
    ///
    /// Pagination in `options` is replaced by the batch page window; all
    /// other options apply to every page.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any page request.
    async fn all(
        client: &HttpClient,
        options: &PageRequestOptions,
    ) -> Result<CollectionResult<Self>, HttpError> {
        fetch_all(client, Self::PATH, options).await
    }

    /// Fetches one entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with status 404 if it does not exist.
    async fn get(
        client: &HttpClient,
        id: &str,
        expand: Option<&ExpandTree>,
    ) -> Result<Self, HttpError> {
        let options = PageRequestOptions {
            expand: expand.cloned(),
            ..PageRequestOptions::default()
        };
        let params = compose_search_parameters(&options)?;
        client.get([Self::PATH, id], params).await?.json()
    }

    /// Creates the entity and returns the server's representation.
    ///
    /// # Errors
    ///
    /// Returns any request or decode error.
    async fn create(&self, client: &HttpClient) -> Result<Self, HttpError> {
        client.post(Self::PATH, self, None).await?.json()
    }

    /// Updates entity `id` with the fields set in `changes`.
    ///
    /// # Errors
    ///
    /// Returns any request or decode error.
    async fn update(client: &HttpClient, id: &str, changes: &Self) -> Result<Self, HttpError> {
        client.put([Self::PATH, id], changes, None).await?.json()
    }

    /// Deletes entity `id`.
    ///
    /// # Errors
    ///
    /// Returns any request error.
    async fn delete(client: &HttpClient, id: &str) -> Result<(), HttpError> {
        client.delete([Self::PATH, id], None).await?;
        Ok(())
    }

    /// Fetches the metadata of this entity type (attributes, states, ...).
    ///
    /// # Errors
    ///
    /// Returns any request or decode error.
    async fn metadata(client: &HttpClient) -> Result<Value, HttpError> {
        client.get([Self::PATH, "metadata"], None).await?.json()
    }
}

/// Fetches one page of any list endpoint.
///
/// # Errors
///
/// Returns [`HttpError::Query`] for an invalid expand tree, or any request
/// or decode error.
pub async fn list_page<T: DeserializeOwned>(
    client: &HttpClient,
    path: impl Into<RequestPath>,
    options: &PageRequestOptions,
) -> Result<Page<T>, HttpError> {
    let params = compose_search_parameters(options)?;
    client.get(path, params).await?.json()
}

/// Fetches every row of any list endpoint through [`HttpClient::batch_get`].
///
/// # Errors
///
/// Returns the first error raised by any page request.
pub async fn fetch_all<T>(
    client: &HttpClient,
    path: impl Into<RequestPath>,
    options: &PageRequestOptions,
) -> Result<CollectionResult<T>, HttpError>
where
    T: DeserializeOwned + Send + 'static,
{
    // fail before the first request if the options cannot be encoded
    compose_search_parameters(options)?;

    let path = path.into();
    client
        .batch_get(
            |limit, offset| {
                let client = client.clone();
                let path = path.clone();
                let options = options.clone().limit(limit).offset(offset);
                async move { list_page(&client, path, &options).await }
            },
            options.uses_expand(),
        )
        .await
}
