use std::time::Duration;

use reqwest::Url;
use reqwest::header::HeaderValue;

use super::Client;
use super::error::ClientError;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.rechnungs-api.de/api/v1";

/// Environment variable read by [`ClientBuilder::from_env`] for the API key.
pub const API_KEY_ENV: &str = "RECHNUNGS_API_KEY";

/// Environment variable read by [`ClientBuilder::from_env`] for a base URL override.
pub const BASE_URL_ENV: &str = "RECHNUNGS_API_BASE_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str = concat!("rechnungs-api-rust/", env!("CARGO_PKG_VERSION"));

/// Builder for [`Client`].
///
/// ```
/// use std::time::Duration;
/// use rechnungs_api::Client;
///
/// let client = Client::builder("my-api-key")
///     .base_url("https://sandbox.example.com/api/v1")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url().as_str(), "https://sandbox.example.com/api/v1");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http: None,
        }
    }

    /// Builder configured from [`API_KEY_ENV`] and [`BASE_URL_ENV`].
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the API key variable is unset.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ClientError> {
        let api_key = lookup(API_KEY_ENV)
            .ok_or_else(|| ClientError::Config(format!("{API_KEY_ENV} is not set")))?;
        let mut builder = Self::new(api_key);
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            builder.base_url = url;
        }
        Ok(builder)
    }

    /// Override the API root (default: [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Total request timeout. Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` header. Ignored when a custom HTTP client is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, custom TLS, ...).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Validate the configuration and create the client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` for an empty API key, a key or user agent
    /// that cannot be sent as a header, or a base URL that is not an absolute
    /// HTTP(S) URL.
    /// Returns `ClientError::Transport` if the HTTP client cannot be built.
    pub fn build(self) -> Result<Client, ClientError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(ClientError::Config("API key must not be empty".into()));
        }

        let mut authorization = HeaderValue::from_str(&format!("ApiKey {key}"))
            .map_err(|_| ClientError::Config("API key contains invalid characters".into()))?;
        authorization.set_sensitive(true);

        let base_url = parse_base_url(&self.base_url)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|_| {
                    ClientError::Config(format!("invalid user agent {:?}", self.user_agent))
                })?;
                reqwest::Client::builder()
                    .timeout(self.timeout)
                    .user_agent(user_agent)
                    .build()?
            }
        };

        Ok(Client {
            http,
            base_url,
            authorization,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| ClientError::Config(format!("invalid base URL {raw:?}: {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "base URL must be an absolute http(s) URL, got {raw:?}"
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ClientError::Config(format!(
            "base URL must not carry a query or fragment, got {raw:?}"
        )));
    }
    Ok(url)
}
