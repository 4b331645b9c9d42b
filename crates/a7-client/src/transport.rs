//! Shared HTTP transport.
//!
//! One `HttpTransport` lives behind each [`A7Client`](crate::A7Client). It
//! owns the configured connection pool and is the single place where the
//! `Authorization` and `User-Agent` headers, the TLS policy, the proxy
//! bypass decision and the request timeout are applied. Every resource
//! call funnels through [`HttpTransport::execute`]: one attempt per call,
//! no implicit retry, non-2xx statuses translated into [`A7Error`].

use std::sync::{PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::BearerToken;
use crate::config::{A7Config, USER_AGENT};
use crate::error::A7Error;
use crate::proxy;

/// Query parameters as name/value pairs; an empty slice sends none.
pub(crate) type Query<'a> = &'a [(&'a str, String)];

/// Request body variants used by the write endpoints.
pub(crate) enum Body {
    /// JSON-encoded body.
    Json(serde_json::Value),
    /// Literal body with an explicit content type (e.g. algorithm YAML).
    Raw {
        content_type: &'static str,
        content: String,
    },
}

/// Configured HTTP execution layer shared by all resource clients of one
/// facade.
#[derive(Debug)]
pub(crate) struct HttpTransport {
    // Taken out on close; requests clone the pooled client out of the lock
    // so the guard is never held across an await point.
    client: RwLock<Option<Client>>,
    base_url: String,
}

impl HttpTransport {
    /// Build the transport from a configuration.
    ///
    /// Reads the NO_PROXY environment once to decide whether this base URL
    /// bypasses any ambient proxy; the decision is fixed for the lifetime
    /// of the transport.
    pub(crate) fn new(config: &A7Config) -> Result<Self, A7Error> {
        let token = BearerToken::new(config.token());
        let mut auth = HeaderValue::from_str(token.header_value())
            .map_err(|_| A7Error::Generic("token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_tls);

        if proxy::should_bypass(&config.base_url, &proxy::no_proxy_from_env()) {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| A7Error::Connection(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client: RwLock::new(Some(client)),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Release the pooled client. Safe to call any number of times; calls
    /// issued afterwards fail with a `Connection` error.
    pub(crate) fn close(&self) {
        let mut guard = self.client.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Issue a single request and return the successful response.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<Body>,
    ) -> Result<Response, A7Error> {
        let client = {
            let guard = self.client.read().unwrap_or_else(PoisonError::into_inner);
            guard.clone()
        }
        .ok_or_else(|| A7Error::Connection("client has been closed".to_string()))?;

        let url = format!("{}{path}", self.base_url);
        debug!(method = %method, url = %url, "dispatching request");

        let mut request = client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        match body {
            Some(Body::Json(value)) => request = request.json(&value),
            Some(Body::Raw {
                content_type,
                content,
            }) => {
                request = request.header(CONTENT_TYPE, content_type).body(content);
            }
            None => {}
        }

        let response = request.send().await.map_err(A7Error::from)?;
        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(A7Error::from_status(status.as_u16(), &body_text));
        }
        Ok(response)
    }

    /// Decode a successful response body as JSON.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, A7Error> {
        let text = response.text().await.map_err(A7Error::from)?;
        // Some write endpoints answer 2xx with an empty body
        let text = if text.is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text)
            .map_err(|e| A7Error::Generic(format!("failed to decode response: {e}")))
    }

    /// GET returning decoded JSON.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> Result<T, A7Error> {
        let response = self.execute(Method::GET, path, query, None).await?;
        Self::decode(response).await
    }

    /// GET returning the raw body text.
    pub(crate) async fn get_text(&self, path: &str, query: Query<'_>) -> Result<String, A7Error> {
        let response = self.execute(Method::GET, path, query, None).await?;
        response.text().await.map_err(A7Error::from)
    }

    /// PUT with a JSON body, returning decoded JSON.
    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, A7Error> {
        let value = serde_json::to_value(body)
            .map_err(|e| A7Error::Generic(format!("failed to encode request body: {e}")))?;
        let response = self
            .execute(Method::PUT, path, &[], Some(Body::Json(value)))
            .await?;
        Self::decode(response).await
    }

    /// PUT with a literal body and explicit content type, returning decoded
    /// JSON.
    pub(crate) async fn put_raw<T: DeserializeOwned>(
        &self,
        path: &str,
        content_type: &'static str,
        content: String,
    ) -> Result<T, A7Error> {
        let body = Body::Raw {
            content_type,
            content,
        };
        let response = self.execute(Method::PUT, path, &[], Some(body)).await?;
        Self::decode(response).await
    }

    /// Bodyless PATCH, returning decoded JSON.
    pub(crate) async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, A7Error> {
        let response = self.execute(Method::PATCH, path, &[], None).await?;
        Self::decode(response).await
    }

    /// DELETE returning decoded JSON.
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, A7Error> {
        let response = self.execute(Method::DELETE, path, &[], None).await?;
        Self::decode(response).await
    }
}
