//! Fetches the product transaction dataset from its static upstream URL.

use reqwest::Client;

use crate::transaction::Transaction;

/// The default location of the product transaction dataset.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// The reasons the upstream dataset could not be retrieved.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FetchError {
    /// The request could not be sent or the response could not be read.
    #[error("could not reach the upstream dataset: {0}")]
    Network(String),

    /// The upstream server responded with a non-success status code.
    #[error("the upstream dataset responded with status {0}")]
    UpstreamStatus(u16),

    /// The response body was not a JSON array of transactions.
    #[error("the upstream dataset could not be parsed: {0}")]
    MalformedPayload(String),
}

/// A client for the upstream dataset.
///
/// Every call to [Upstream::fetch_transactions] downloads the whole dataset,
/// nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: Client,
    url: String,
}

impl Upstream {
    /// Create a client for the dataset at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// The URL the dataset is fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and parse the full dataset.
    ///
    /// # Errors
    /// Returns a [FetchError] if the request fails, the upstream responds
    /// with a non-success status, or the body is not a list of transactions.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|error| FetchError::Network(error.to_string()))
            .inspect_err(|error| tracing::error!("{error}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("upstream dataset {} responded with {status}", self.url);
            return Err(FetchError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| FetchError::Network(error.to_string()))
            .inspect_err(|error| tracing::error!("{error}"))?;

        let transactions: Vec<Transaction> = serde_json::from_slice(&body)
            .map_err(|error| FetchError::MalformedPayload(error.to_string()))
            .inspect_err(|error| tracing::error!("{error}"))?;

        tracing::debug!(
            "fetched {} transactions from {}",
            transactions.len(),
            self.url
        );

        Ok(transactions)
    }
}
