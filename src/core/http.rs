//! HTTP header utilities for API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Build request headers, with `Authorization: Token <token>` when a token is given.
pub fn auth_header_map(token: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        h.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Token {}", token))?);
    }
    Ok(h)
}
