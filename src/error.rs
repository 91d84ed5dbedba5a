//! Error types for the esports database client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, EsportsError>;

/// Shown when a write is rejected with 403.
pub const MSG_FORBIDDEN: &str = "Нет прав (403).";
pub const MSG_UNAUTHORIZED: &str = "Не авторизован";
pub const MSG_SAVE_FAILED: &str = "Ошибка сохранения";
pub const MSG_DELETE_FAILED: &str = "Ошибка удаления";
pub const MSG_REQUEST_FAILED: &str = "Ошибка запроса";

#[derive(Error, Debug)]
pub enum EsportsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid API base URL: {url}")]
    InvalidApiBase { url: String },

    #[error("Invalid timeout: {value}")]
    InvalidTimeout { value: String },

    #[error("Invalid date (expected YYYY-MM-DD): {value}")]
    InvalidDate { value: String },

    #[error("Invalid field assignment (expected key=value): {value}")]
    InvalidField { value: String },

    /// 401 from the API.
    #[error("Unauthorized (401) for {url}")]
    Unauthorized { url: String },

    /// 403 from the API.
    #[error("Forbidden (403) for {url}")]
    Forbidden { url: String },

    /// Any other non-2xx answer. `detail` carries the server message, if any.
    #[error("API returned {status} for {url}")]
    Rejected {
        status: u16,
        url: String,
        detail: Option<String>,
    },

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Staff access required")]
    StaffRequired,

    #[error("Not found: {what}")]
    NotFound { what: String },
}

impl EsportsError {
    /// Message suitable for the end user of a write path.
    ///
    /// `fallback` is used when the server gave no detail of its own.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            EsportsError::Unauthorized { .. } => MSG_UNAUTHORIZED.to_string(),
            EsportsError::Forbidden { .. } => MSG_FORBIDDEN.to_string(),
            EsportsError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            EsportsError::Rejected { detail: None, .. } => fallback.to_string(),
            EsportsError::Http(e) if e.is_timeout() => {
                "Сервер не ответил вовремя.".to_string()
            }
            EsportsError::Http(_) => "Не удалось связаться с сервером.".to_string(),
            EsportsError::Validation(message) => message.clone(),
            EsportsError::NotLoggedIn => "Требуется вход.".to_string(),
            EsportsError::StaffRequired => "Доступ запрещён: нужен staff/superuser.".to_string(),
            EsportsError::NotFound { what } => format!("Не найдено: {what}"),
            other => other.to_string(),
        }
    }

    /// True for 401 answers, which invalidate the stored token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, EsportsError::Unauthorized { .. })
    }
}
