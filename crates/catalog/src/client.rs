//! HTTP implementation of [`MovieCatalog`].
//!
//! Issues one `GET` per lookup against a URL template in which the literal
//! `{id}` is replaced by the movie id. No retries.

use std::time::Duration;

use async_trait::async_trait;
use operator_core::types::DbId;
use reqwest::StatusCode;

use crate::movie::MovieDescriptor;
use crate::{CatalogLookup, MovieCatalog};

/// Placeholder substituted with the movie id in the URL template.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Errors from talking to the catalog. Callers of [`MovieCatalog::lookup`]
/// only see these flattened into [`CatalogLookup::Unavailable`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The URL template cannot address a single movie.
    #[error("Catalog URL template must contain {{id}}: {0}")]
    InvalidTemplate(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a status that is neither success nor "not found".
    #[error("Catalog returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body was not a movie descriptor.
    #[error("Invalid catalog response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Catalog client backed by [`reqwest`].
pub struct HttpCatalogClient {
    client: reqwest::Client,
    url_template: String,
}

impl HttpCatalogClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(url_template: String, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(client, url_template)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        url_template: String,
    ) -> Result<Self, CatalogError> {
        if !url_template.contains(ID_PLACEHOLDER) {
            return Err(CatalogError::InvalidTemplate(url_template));
        }
        Ok(Self {
            client,
            url_template,
        })
    }

    /// The URL queried for `movie_id`.
    pub fn movie_url(&self, movie_id: DbId) -> String {
        self.url_template.replace(ID_PLACEHOLDER, &movie_id.to_string())
    }

    /// Fetch the descriptor for `movie_id`.
    ///
    /// `Ok(None)` means the catalog answered that the movie does not exist:
    /// a 404/410 status, or a success status with an empty or `null` body.
    pub async fn fetch(&self, movie_id: DbId) -> Result<Option<MovieDescriptor>, CatalogError> {
        let url = self.movie_url(movie_id);
        tracing::debug!(movie_id, %url, "Requesting movie from catalog");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(serde_json::from_slice::<Option<MovieDescriptor>>(&body)?)
    }
}

#[async_trait]
impl MovieCatalog for HttpCatalogClient {
    async fn lookup(&self, movie_id: DbId) -> CatalogLookup {
        match self.fetch(movie_id).await {
            Ok(Some(movie)) => {
                tracing::debug!(movie_id, name = ?movie.name, "Movie found in catalog");
                CatalogLookup::Found(movie)
            }
            Ok(None) => {
                tracing::info!(movie_id, "Movie not found in catalog");
                CatalogLookup::NotFound
            }
            Err(e) => {
                tracing::warn!(movie_id, error = %e, "Catalog lookup failed");
                CatalogLookup::Unavailable(e.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
