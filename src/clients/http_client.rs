//! HTTP client for Partner API communication.
//!
//! This module provides the [`HttpClient`] type, which signs a fresh bearer
//! token for every request, performs the exchange, and classifies the result.

use std::collections::HashMap;

use crate::auth::TokenIssuer;
use crate::clients::errors::DispatchError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::Payload;
use crate::config::{BaseUrl, ClientOptions, Credentials};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated requests to the Partner API.
///
/// The client handles:
/// - URL construction from the credentials' base URL
/// - Default headers including User-Agent and Accept
/// - A freshly signed `Authorization: Bearer` token on every request
/// - Classification of the response into a [`Payload`] or [`DispatchError`]
///
/// Failures are logged and returned; nothing is retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state, so one instance
/// can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use partner_api::{ClientOptions, Credentials, HttpClient, HttpMethod};
///
/// let credentials = Credentials::from_env()?;
/// let client = HttpClient::new(&credentials, &ClientOptions::default())?;
///
/// let payload = client.execute(HttpMethod::Get, "/partner/api/order/", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every route is joined onto.
    base_url: BaseUrl,
    /// Signs the bearer token for each request.
    issuer: TokenIssuer,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(credentials: &Credentials, options: &ClientOptions) -> Result<Self, ConfigError> {
        let issuer = TokenIssuer::new(credentials.partner_id().clone(), credentials.shared_secret());
        Self::with_issuer(credentials.base_url().clone(), issuer, options)
    }

    /// Creates a new HTTP client with a preconfigured token issuer.
    ///
    /// Use this to apply a ttl policy via [`TokenIssuer::with_max_ttl`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created.
    pub fn with_issuer(
        base_url: BaseUrl,
        issuer: TokenIssuer,
        options: &ClientOptions,
    ) -> Result<Self, ConfigError> {
        let user_agent_prefix = options
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Partner API Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }
        if options.accept_invalid_certs() {
            tracing::warn!(
                base_url = %base_url,
                "TLS certificate validation is disabled; do not use this configuration in production"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            issuer,
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the token issuer used for every request.
    #[must_use]
    pub const fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `method` to `path` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Payload, DispatchError> {
        let request = HttpRequest::builder(method, path).maybe_body(body).build();
        self.request(request).await
    }

    /// Sends an HTTP request to the Partner API.
    ///
    /// One token is issued and one network round trip is made per call.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if:
    /// - The token cannot be signed (`Signing`)
    /// - No response is received (`Transport`)
    /// - The response is 401 (`Authentication`), 403 (`Authorization`),
    ///   or any other non-2xx status (`Remote`)
    pub async fn request(&self, request: HttpRequest) -> Result<Payload, DispatchError> {
        let url = self.base_url.join(&request.path);
        let token = self.issuer.issue_default()?;

        let mut req_builder = self.client.request(request.http_method.into(), &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                if key.eq_ignore_ascii_case("authorization") {
                    continue;
                }
                req_builder = req_builder.header(key, value);
            }
        }
        req_builder = req_builder.bearer_auth(&token);

        // `json` also declares Content-Type: application/json
        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        tracing::debug!(method = %request.http_method, url = %url, "Sending partner API request");

        let res = match req_builder.send().await {
            Ok(res) => res,
            Err(source) => return Err(Self::transport_failure(&request, source)),
        };

        let status = res.status();
        let body_text = match res.text().await {
            Ok(text) => text,
            Err(source) => return Err(Self::transport_failure(&request, source)),
        };

        if status.is_success() {
            return Ok(Payload::from_body(&body_text));
        }

        let error = DispatchError::from_status(status.as_u16(), &body_text);
        Self::log_http_failure(&request, &error);
        Err(error)
    }

    fn transport_failure(request: &HttpRequest, source: reqwest::Error) -> DispatchError {
        tracing::error!(
            method = %request.http_method,
            path = %request.path,
            timeout = source.is_timeout(),
            connect = source.is_connect(),
            "Network error calling partner API: {source}"
        );
        DispatchError::Transport { source }
    }

    fn log_http_failure(request: &HttpRequest, error: &DispatchError) {
        let status = error.status().unwrap_or_default();
        tracing::warn!(
            method = %request.http_method,
            path = %request.path,
            status,
            kind = %error.kind(),
            "Partner API error: {error}"
        );

        match error {
            DispatchError::Authentication { .. } => {
                tracing::warn!("Authentication failed: check the shared secret and partner ID");
            }
            DispatchError::Authorization { .. } => {
                tracing::warn!("Authorization failed: this partner is not permitted to call this API");
            }
            _ => {}
        }
    }
}
