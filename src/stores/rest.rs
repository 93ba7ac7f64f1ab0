//! Implements a transaction store backed by a hosted PostgREST API, such as
//! the REST endpoint of a Supabase project.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, header::HeaderValue};
use serde::Serialize;

use crate::{
    Error, UserId,
    stores::{RowsAffected, TransactionStore},
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// The table that holds transactions when none is configured.
pub const DEFAULT_TRANSACTION_TABLE: &str = "Transaction";

/// Where the hosted store lives and how to authenticate with it.
#[derive(Clone)]
pub struct RestStoreConfig {
    /// The base URL of the REST API, e.g. "https://xyz.supabase.co/rest/v1".
    pub base_url: String,
    /// The name of the table holding transactions.
    pub table: String,
    /// The project's public API key, sent in the `apikey` header.
    pub api_key: String,
    /// The signed-in user's access token, sent as a bearer token so that the
    /// store's row level security applies.
    pub access_token: String,
}

impl std::fmt::Debug for RestStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestStoreConfig")
            .field("base_url", &self.base_url)
            .field("table", &self.table)
            .field("api_key", &"********")
            .field("access_token", &"********")
            .finish()
    }
}

/// Stores transactions in a hosted PostgREST API.
#[derive(Debug, Clone)]
pub struct RestTransactionStore {
    client: Client,
    config: RestStoreConfig,
}

/// The row sent to the store when inserting a transaction.
#[derive(Serialize)]
struct InsertRow<'a> {
    text: &'a str,
    amount: f64,
    user_id: &'a str,
}

impl RestTransactionStore {
    /// Create a new store for the API described by `config`.
    pub fn new(client: Client, config: RestStoreConfig) -> Self {
        Self { client, config }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table
        )
    }

    /// Add the headers every request to the store needs.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.access_token)
    }

    /// Turn non-success responses into [Error::StoreResponse].
    async fn check_status(response: Response) -> Result<Response, Error> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::StoreResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Ask PostgREST to send back the rows a mutation touched.
fn return_representation() -> HeaderValue {
    HeaderValue::from_static("return=representation")
}

/// Format a PostgREST equality filter, e.g. `eq.42`.
fn eq(value: &str) -> String {
    format!("eq.{value}")
}

#[async_trait]
impl TransactionStore for RestTransactionStore {
    /// Retrieve the user's transactions with `GET /{table}?select=*`.
    ///
    /// # Errors
    /// Returns an [Error::StoreRequest] if the store cannot be reached,
    /// an [Error::StoreResponse] if it rejects the request,
    /// or an [Error::InvalidStoreResponse] if the body is not a list of transactions.
    async fn list(&self, user_id: &UserId) -> Result<Vec<Transaction>, Error> {
        let request = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("user_id", eq(user_id.as_str()).as_str())]);

        let response = Self::check_status(self.authorize(request).send().await?).await?;

        Ok(response.json().await?)
    }

    /// Insert a transaction with `POST /{table}` and return the stored row.
    ///
    /// # Errors
    /// Returns an [Error::StoreRequest] if the store cannot be reached,
    /// an [Error::StoreResponse] if it rejects the request,
    /// or an [Error::InvalidStoreResponse] if it does not send back the new row.
    async fn insert(
        &self,
        transaction: NewTransaction,
        user_id: &UserId,
    ) -> Result<Transaction, Error> {
        let request = self
            .client
            .post(self.table_url())
            .header("Prefer", return_representation())
            .json(&InsertRow {
                text: transaction.text(),
                amount: transaction.amount(),
                user_id: user_id.as_str(),
            });

        let response = Self::check_status(self.authorize(request).send().await?).await?;
        let rows: Vec<Transaction> = response.json().await?;

        rows.into_iter().next().ok_or_else(|| {
            Error::InvalidStoreResponse("the store did not return the inserted row".to_owned())
        })
    }

    /// Delete a transaction with `DELETE /{table}?id=eq.{id}`.
    ///
    /// # Errors
    /// Returns an [Error::StoreRequest] if the store cannot be reached,
    /// an [Error::StoreResponse] if it rejects the request,
    /// or an [Error::InvalidStoreResponse] if the deleted rows cannot be read.
    async fn delete(&self, id: &TransactionId, user_id: &UserId) -> Result<RowsAffected, Error> {
        let request = self
            .client
            .delete(self.table_url())
            .header("Prefer", return_representation())
            .query(&[("id", eq(id.as_str())), ("user_id", eq(user_id.as_str()))]);

        let response = Self::check_status(self.authorize(request).send().await?).await?;
        let deleted_rows: Vec<serde_json::Value> = response.json().await?;

        Ok(deleted_rows.len())
    }
}
