//! Thin HTTP client for the external relational data store.
//!
//! The store exposes a PostgREST-style interface: one resource per table,
//! inserts via `POST /rest/v1/{table}` returning the inserted rows, and
//! selects via `GET /rest/v1/{table}` with `col=eq.value` filters. This
//! service issues no updates or deletes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failures reported by the external data store or the transport to it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Client for the store's REST interface.
///
/// Holds a shared [`reqwest::Client`] plus the base URL and API key loaded
/// from configuration. Cloning is cheap; the underlying connection pool is
/// shared.
#[derive(Clone)]
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    /// Inserts one row into `table` and returns the rows the store reports
    /// as written.
    ///
    /// An empty result vector means the store accepted the request but
    /// wrote nothing; callers treat that the same as a store error.
    pub async fn insert<T, R>(&self, table: &str, row: &T) -> Result<Vec<R>, StoreError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Selects rows from `table`, optionally narrowed by equality filters
    /// in the store's `column=eq.value` syntax.
    pub async fn select<R>(
        &self,
        table: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<R>, StoreError>
    where
        R: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", "*")])
            .query(filters)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<R>(response: reqwest::Response) -> Result<Vec<R>, StoreError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

/// Formats an equality filter in the store's query syntax.
pub fn eq_filter(value: i64) -> String {
    format!("eq.{value}")
}
