//! Persistent storage for the API auth token.
//!
//! The token lives in a single file: `~/.config/esports-db/token` by default,
//! or wherever `ESPORTS_DB_TOKEN_FILE` points.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::TOKEN_FILE_ENV_VAR;

/// Default path: {config_dir}/esports-db/token
pub fn default_token_path() -> PathBuf {
    if let Ok(p) = std::env::var(TOKEN_FILE_ENV_VAR) {
        if !p.trim().is_empty() {
            return PathBuf::from(p);
        }
    }
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("esports-db").join("token")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// File-backed token store.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::at(default_token_path())
    }
}

impl TokenStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored token; empty, `"null"` and `"undefined"` count as none.
    pub fn load(&self) -> Option<String> {
        let raw = try_read_to_string(&self.path)?;
        let t = raw.trim();
        if t.is_empty() || t == "null" || t == "undefined" {
            return None;
        }
        Some(t.to_string())
    }

    /// Store a token. Blank tokens are ignored.
    pub fn save(&self, token: &str) -> std::io::Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(());
        }
        write_string(&self.path, token)
    }

    pub fn clear(&self) -> std::io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
