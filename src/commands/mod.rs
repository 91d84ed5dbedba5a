//! Command implementations for the esports database CLI

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Url;

use crate::{
    api::{DEFAULT_API_BASE, DEFAULT_TIMEOUT},
    EsportsError, Result, API_BASE_ENV_VAR, TIMEOUT_ENV_VAR,
};

pub mod admin;
pub mod auth;
pub mod browse;
pub mod common;
pub mod dashboard;
pub mod matches;
pub mod output;
pub mod teams;
pub mod tournaments;

#[cfg(test)]
mod tests;

/// Resolve the API base from option, environment variable or default.
///
/// The result must be an absolute http(s) URL.
pub fn resolve_api_base(api_base: Option<String>) -> Result<String> {
    let raw = api_base
        .or_else(|| std::env::var(API_BASE_ENV_VAR).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    match Url::parse(&raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(raw.trim_end_matches('/').to_string())
        }
        _ => Err(EsportsError::InvalidApiBase { url: raw }),
    }
}

/// Resolve the request timeout from option, environment variable or default.
pub fn resolve_timeout(timeout_secs: Option<u64>) -> Result<Duration> {
    let secs = match timeout_secs {
        Some(secs) => secs,
        None => match std::env::var(TIMEOUT_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| EsportsError::InvalidTimeout { value: raw })?,
            _ => return Ok(DEFAULT_TIMEOUT),
        },
    };

    if secs == 0 {
        return Err(EsportsError::InvalidTimeout {
            value: secs.to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| EsportsError::InvalidDate {
        value: s.to_string(),
    })
}

/// Parse a `key=value` field assignment. The value may be empty.
pub fn parse_field(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(EsportsError::InvalidField {
            value: s.to_string(),
        }),
    }
}
