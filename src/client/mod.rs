//! HTTP client, configuration, errors and query helpers.
//!
//! [`Client`] holds the API key and base URL and nothing else. Each
//! endpoint method performs exactly one request and returns the decoded
//! response or a [`ClientError`]; there are no retries and no caching.

mod config;
mod error;
mod pagination;
mod query;

pub use config::{API_KEY_ENV, BASE_URL_ENV, ClientBuilder, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use pagination::{Page, PageParams};
pub use query::QueryParams;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Client for the Rechnungs-API.
///
/// Cheap to clone; clones share the underlying connection pool. Calls may
/// be issued concurrently from any number of tasks.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) authorization: HeaderValue,
}

impl Client {
    /// Client for the production endpoint.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// The configured API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended as percent-encoded path segments.
    ///
    /// Empty, `.` and `..` segments are rejected since `PathSegmentsMut`
    /// drops or resolves them.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(ClientError::Config(format!(
                "invalid resource id {bad:?} in request path"
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("cannot extend base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "sending request");
        self.http
            .request(method, url)
            .header(AUTHORIZATION, self.authorization.clone())
    }

    /// Send a request without a body and return the successful response.
    pub(crate) async fn send(&self, method: Method, url: Url) -> Result<Response, ClientError> {
        execute(self.request(method, url)).await
    }

    /// Send `body` as JSON and return the successful response.
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<Response, ClientError> {
        execute(self.request(method, url).json(body)).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &QueryParams,
    ) -> Result<T, ClientError> {
        let mut url = url;
        query.apply(&mut url);
        decode_json(self.send(Method::GET, url).await?).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ClientError> {
        decode_json(self.send_json(Method::POST, url, body).await?).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        decode_json(self.send(Method::DELETE, url).await?).await
    }
}

async fn execute(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    tracing::debug!(status = status.as_u16(), url = %response.url(), "received response");

    if status.is_success() {
        return Ok(response);
    }

    let raw = response.text().await?;
    let err = ClientError::request_failed(status.as_u16(), &raw);
    tracing::warn!(status = status.as_u16(), error = %err, "request failed");
    Err(err)
}

/// Decode a successful response body as JSON.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
