//! Joke proxy.
//!
//! Fetches a batch of two-part jokes from the upstream provider and normalises it into
//! [`Joke`] items: setup becomes `title`, delivery becomes `content`, and `id` is the 1-based
//! position inside the batch.
//!
//! ## Upstream shape
//!
//! The provider answers `GET {base}/joke/Any?type=twopart&amount=N` with
//!
//! ```text
//! { "error": false, "amount": N, "jokes": [ { "setup": "...", "delivery": "...", ... } ] }
//! ```
//!
//! except that a request for a single joke returns the joke object itself, without the `jokes`
//! wrapper. Failures come back as `{ "error": true, "message": "..." }`. No retries are made and
//! partial batches are never returned.

use crate::constants::{JOKE_CATEGORY, JOKE_TYPE};
use crate::{CoreError, CoreResult};
use api_shared::Joke;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// One upstream joke; fields other than setup/delivery are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UpstreamJoke {
    pub setup: String,
    pub delivery: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UpstreamBody {
    Batch {
        jokes: Vec<UpstreamJoke>,
    },
    Single(UpstreamJoke),
    Failure {
        error: bool,
        #[serde(default)]
        message: Option<String>,
        #[serde(default, rename = "additionalInfo")]
        additional_info: Option<String>,
    },
}

impl UpstreamBody {
    fn into_batch(self) -> CoreResult<Vec<UpstreamJoke>> {
        match self {
            UpstreamBody::Failure {
                error: true,
                message,
                additional_info,
            } => Err(CoreError::UpstreamRejected(
                additional_info
                    .or(message)
                    .unwrap_or_else(|| "unspecified upstream error".into()),
            )),
            UpstreamBody::Failure { error: false, .. } => Err(CoreError::UpstreamRejected(
                "response carried neither jokes nor a joke".into(),
            )),
            UpstreamBody::Batch { jokes } => Ok(jokes),
            UpstreamBody::Single(joke) => Ok(vec![joke]),
        }
    }
}

/// Source of raw upstream batches.
#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch_batch(&self, count: usize) -> CoreResult<Vec<UpstreamJoke>>;
}

/// HTTP client for the upstream joke provider.
#[derive(Clone, Debug)]
pub struct JokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl JokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/joke/{JOKE_CATEGORY}", self.base_url)
    }
}

#[async_trait]
impl JokeSource for JokeApiClient {
    async fn fetch_batch(&self, count: usize) -> CoreResult<Vec<UpstreamJoke>> {
        let response = self
            .http
            .get(self.endpoint())
            .query(&[("type", JOKE_TYPE.to_string()), ("amount", count.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::UpstreamStatus(status.as_u16()));
        }

        let body: UpstreamBody = response.json().await?;
        body.into_batch()
    }
}

/// Map an upstream batch to jokes numbered `1..=K` in upstream order.
pub fn normalise(batch: Vec<UpstreamJoke>) -> Vec<Joke> {
    batch
        .into_iter()
        .zip(1u32..)
        .map(|(joke, id)| Joke {
            id,
            title: joke.setup,
            content: joke.delivery,
        })
        .collect()
}

/// Joke feed over an injected upstream source.
#[derive(Clone)]
pub struct JokeService {
    source: Arc<dyn JokeSource>,
    count: usize,
}

impl JokeService {
    /// `count` is the batch size requested on every fetch.
    pub fn new(source: Arc<dyn JokeSource>, count: usize) -> Self {
        Self { source, count }
    }

    pub async fn fetch_jokes(&self) -> CoreResult<Vec<Joke>> {
        let batch = self.source.fetch_batch(self.count).await?;
        tracing::debug!("upstream returned {} jokes", batch.len());
        Ok(normalise(batch))
    }
}
