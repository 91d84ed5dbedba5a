//! Token-based auth endpoints.

use log::debug;
use reqwest::Method;
use serde_json::json;

use super::{
    http::ApiClient,
    types::{AuthResponse, Me},
};
use crate::{EsportsError, Result};

impl ApiClient {
    /// `POST /auth/register/`. Sent without credentials.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let payload = json!({ "username": username, "email": email, "password": password });
        let body = self.post_json_anonymous("/auth/register/", &payload).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `POST /auth/login/`. Sent without credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let payload = json!({ "username": username, "password": password });
        let body = self.post_json_anonymous("/auth/login/", &payload).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `POST /auth/logout/`. Failures are logged and ignored.
    pub async fn logout(&self) {
        if let Err(e) = self.send_json(Method::POST, "/auth/logout/", None).await {
            debug!("logout request failed: {e}");
        }
    }

    /// Current user, or `None` when there is no token or the server answers 401.
    ///
    /// Unlike other reads, this never retries anonymously. A body that does not
    /// decode is an error, not a rejected token.
    pub async fn me(&self) -> Result<Option<Me>> {
        if !self.has_token() {
            return Ok(None);
        }
        match self.send_json(Method::GET, "/auth/me/", None).await {
            Ok(body) => Ok(Some(serde_json::from_value(body)?)),
            Err(EsportsError::Unauthorized { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
