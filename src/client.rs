//! High-level client — `BittrexClient` with nested sub-client accessors.
//!
//! Each API surface group has its own sub-client in
//! `domain/<name>/client.rs`. This module keeps the builder and the
//! accessor methods.

use crate::auth::{ApiVersion, Credentials};
use crate::domain::account::client::Account;
use crate::domain::market::client::Markets;
use crate::domain::order::client::Orders;
use crate::domain::orderbook::client::OrderBooks;
use crate::error::BittrexError;
use crate::http::BittrexHttp;
use crate::network;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::orderbook::client::OrderBooks as OrderBooksClient;

/// The primary entry point for the Bittrex SDK.
///
/// Provides nested sub-client accessors per surface group:
/// `client.markets()`, `client.order_books()`, `client.orders()`,
/// `client.account()`.
///
/// Calls issued concurrently are independent; the client holds no mutable
/// state beyond the connection pool inside `reqwest`.
#[derive(Debug)]
pub struct BittrexClient {
    pub(crate) http: BittrexHttp,
}

impl BittrexClient {
    pub fn builder() -> BittrexClientBuilder {
        BittrexClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn order_books(&self) -> OrderBooks<'_> {
        OrderBooks { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BittrexClientBuilder {
    host: String,
    api_version: ApiVersion,
    key: String,
    secret: String,
    credentials: Option<Credentials>,
}

impl Default for BittrexClientBuilder {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_API_HOST.to_string(),
            api_version: ApiVersion::default(),
            key: String::new(),
            secret: String::new(),
            credentials: None,
        }
    }
}

impl BittrexClientBuilder {
    /// Override the API host (staging, test doubles).
    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Select the API version. Defaults to v1.1.
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    pub fn key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn secret(mut self, secret: &str) -> Self {
        self.secret = secret.to_string();
        self
    }

    /// Supply pre-built credentials (e.g. from [`Credentials::from_env`]).
    /// Takes precedence over `key`/`secret`.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// # Errors
    /// Fails with a configuration error if the key or secret is missing.
    pub fn build(self) -> Result<BittrexClient, BittrexError> {
        let credentials = match self.credentials {
            Some(credentials) => credentials,
            None => Credentials::new(self.key, self.secret)?,
        };

        Ok(BittrexClient {
            http: BittrexHttp::new(&self.host, self.api_version, credentials),
        })
    }
}
