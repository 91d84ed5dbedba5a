//! HTTP client for the esports database REST API.
//!
//! Every request carries the configured timeout. Reads attach the auth token
//! when one is present and, if the server answers 401, retry once without
//! credentials. Writes never retry: status failures are mapped onto
//! [`EsportsError`] variants carrying the server's `detail` message.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use log::{debug, warn};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use super::types::ListPayload;
use crate::{core::auth_header_map, EsportsError, Result};

#[cfg(test)]
mod tests;

/// API root used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(7);

/// Empty query string.
pub const NO_QUERY: &[(&str, &str)] = &[];

/// A path below the API base plus fixed query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub query: &'static [(&'static str, &'static str)],
}

impl Endpoint {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            query: NO_QUERY,
        }
    }

    pub const fn with_query(
        path: &'static str,
        query: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { path, query }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    token_rejected: Arc<AtomicBool>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("esports-db/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
            token_rejected: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the server answered 401 to a request made with our token.
    pub fn token_rejected(&self) -> bool {
        self.token_rejected.load(Ordering::Relaxed)
    }

    /// Absolute URL for a path below the API base.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn send<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        query: &Q,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> Result<Response> {
        let mut builder = self
            .client
            .request(method, url)
            .headers(auth_header_map(token)?)
            .query(query);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    /// GET a JSON document, retrying once without credentials on 401.
    pub async fn get_json<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value> {
        let url = self.url(path);
        debug!("GET {url}");

        let mut res = self
            .send(Method::GET, &url, query, self.token.as_deref(), None)
            .await?;

        if res.status() == StatusCode::UNAUTHORIZED && self.token.is_some() {
            warn!("token rejected by {url}, retrying without credentials");
            self.token_rejected.store(true, Ordering::Relaxed);
            res = self.send(Method::GET, &url, query, None, None).await?;
        }

        Ok(check_status(res, &url).await?.json::<Value>().await?)
    }

    /// GET a list, accepting both bare arrays and `results` envelopes.
    pub async fn get_list<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Vec<Value>> {
        let payload = ListPayload::from(self.get_json(path, query).await?);
        Ok(payload.into_items())
    }

    /// First candidate endpoint that answers with a list.
    pub async fn get_list_from(&self, candidates: &[Endpoint]) -> Result<Vec<Value>> {
        let mut last_error = None;
        for ep in candidates {
            match self.get_list(ep.path, ep.query).await {
                Ok(items) => return Ok(items),
                Err(e) => {
                    debug!("{} unavailable: {e}", ep.path);
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| EsportsError::NotFound {
            what: "no candidate endpoints".to_string(),
        }))
    }

    /// Send a request with credentials and no retry. 401/403/other failures
    /// become errors.
    pub async fn send_json(&self, method: Method, path: &str, payload: Option<&Value>) -> Result<Value> {
        self.send_json_as(method, path, payload, self.token.as_deref()).await
    }

    async fn send_json_as(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value> {
        let url = self.url(path);
        debug!("{method} {url}");

        let res = self.send(method, &url, NO_QUERY, token, payload).await?;
        let res = check_status(res, &url).await?;

        // Empty or non-JSON bodies (204 on DELETE) read as an empty object.
        let text = res.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Default::default())))
    }

    /// POST without credentials, for login and registration.
    pub async fn post_json_anonymous(&self, path: &str, payload: &Value) -> Result<Value> {
        self.send_json_as(Method::POST, path, Some(payload), None).await
    }

    pub async fn post_json(&self, path: &str, payload: &Value) -> Result<Value> {
        self.send_json(Method::POST, path, Some(payload)).await
    }

    pub async fn patch_json(&self, path: &str, payload: &Value) -> Result<Value> {
        self.send_json(Method::PATCH, path, Some(payload)).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send_json(Method::DELETE, path, None).await.map(|_| ())
    }
}

/// Map non-2xx responses onto errors.
async fn check_status(res: Response, url: &str) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(EsportsError::Unauthorized {
            url: url.to_string(),
        }),
        StatusCode::FORBIDDEN => Err(EsportsError::Forbidden {
            url: url.to_string(),
        }),
        _ => {
            let body = res.text().await.unwrap_or_default();
            Err(EsportsError::Rejected {
                status: status.as_u16(),
                url: url.to_string(),
                detail: error_detail(&body),
            })
        }
    }
}

/// Server error message: `detail`, else the first `non_field_errors` entry.
pub fn error_detail(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    v.get("detail")
        .and_then(Value::as_str)
        .or_else(|| {
            v.get("non_field_errors")
                .and_then(Value::as_array)
                .and_then(|a| a.first())
                .and_then(Value::as_str)
        })
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
