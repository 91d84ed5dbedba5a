//! Shared command context: the configured API client and the token store.

use log::warn;

use crate::{
    api::ApiClient,
    cli::ConnectionArgs,
    core::TokenStore,
    Result,
};

use super::{resolve_api_base, resolve_timeout};

/// Resources needed by every command
pub struct CommandContext {
    pub client: ApiClient,
    pub tokens: TokenStore,
}

impl CommandContext {
    /// Build a client from CLI/env configuration and the stored token.
    pub fn new(connection: &ConnectionArgs) -> Result<Self> {
        Self::with_store(connection, TokenStore::default())
    }

    pub fn with_store(connection: &ConnectionArgs, tokens: TokenStore) -> Result<Self> {
        let base = resolve_api_base(connection.api_base.clone())?;
        let timeout = resolve_timeout(connection.timeout_secs)?;
        let client = ApiClient::new(base, timeout, tokens.load())?;

        Ok(Self { client, tokens })
    }

    /// Drop the stored token, logging rather than failing on I/O errors.
    pub fn forget_token(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!("could not remove {}: {e}", self.tokens.path().display());
        }
    }

    /// End-of-command bookkeeping: a token the server rejected is discarded.
    pub fn finish(&self) {
        if self.client.token_rejected() {
            warn!("stored token was rejected by the server, discarding it");
            self.forget_token();
        }
    }
}

/// Optional section of a detail card: a failed fetch is logged and shown empty.
pub fn or_empty<T>(what: &str, res: Result<Vec<T>>) -> Vec<T> {
    res.unwrap_or_else(|e| {
        warn!("{what} unavailable: {e}");
        Vec::new()
    })
}
