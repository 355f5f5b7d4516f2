//! HTTP access to the showcase REST API.

use crate::error::{ClientError, ClientResult};
use api_shared::{AddPersonReq, AddPersonRes, ErrorRes, Joke, Person};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// The three operations the client performs against the server.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    async fn fetch_jokes(&self) -> ClientResult<Vec<Joke>>;
    async fn fetch_persons(&self) -> ClientResult<Vec<Person>>;
    async fn add_person(&self, req: &AddPersonReq) -> ClientResult<AddPersonRes>;
}

/// [`Backend`] over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Decode a success body, or turn a failure status into `ClientError::Status` carrying the
/// server's `{error}` text when it sent one.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorRes>(&text)
        .map(|e| e.error)
        .unwrap_or(text);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_jokes(&self) -> ClientResult<Vec<Joke>> {
        let response = self.http.get(self.url("/api/jokes")).send().await?;
        decode(response).await
    }

    async fn fetch_persons(&self) -> ClientResult<Vec<Person>> {
        let response = self.http.get(self.url("/api/persons")).send().await?;
        decode(response).await
    }

    async fn add_person(&self, req: &AddPersonReq) -> ClientResult<AddPersonRes> {
        let response = self
            .http
            .post(self.url("/api/persons"))
            .json(req)
            .send()
            .await?;
        decode(response).await
    }
}
