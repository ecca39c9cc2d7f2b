//! Authentication: API version selection and credential management.
//!
//! The secret key is wrapped in [`secrecy::SecretString`] so it is never
//! exposed through `Debug` output and its memory is zeroed on drop.

pub mod signer;

use crate::error::ConfigError;
use secrecy::{ExposeSecret, SecretString};

/// Bittrex REST API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Legacy `/api/v1.0` surface.
    V1_0,
    /// Current `/api/v1.1` surface.
    #[default]
    V1_1,
}

impl ApiVersion {
    /// Version segment as it appears in the URL path.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V1_0 => "1.0",
            ApiVersion::V1_1 => "1.1",
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API credentials for authenticated requests.
#[derive(Clone)]
pub struct Credentials {
    key: String,
    secret: SecretString,
}

impl Credentials {
    /// Create credentials from explicit values.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingKey`] / [`ConfigError::MissingSecret`]
    /// if either value is empty.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let secret = secret.into();

        if key.is_empty() {
            return Err(ConfigError::MissingKey);
        }
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        Ok(Self {
            key,
            secret: SecretString::from(secret),
        })
    }

    /// Load credentials from `BITTREX_API_KEY` / `BITTREX_API_SECRET`.
    ///
    /// A `.env` file is honored if present.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingEnvVar`] if either variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let key = std::env::var("BITTREX_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("BITTREX_API_KEY".into()))?;
        let secret = std::env::var("BITTREX_API_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("BITTREX_API_SECRET".into()))?;

        Self::new(key, secret)
    }

    /// The API key (public, safe to log).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Expose the secret key for signing. Never log the return value.
    pub(crate) fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_empty_pair() {
        let creds = Credentials::new("my-key", "my-secret").unwrap();
        assert_eq!(creds.key(), "my-key");
        assert_eq!(creds.expose_secret(), "my-secret");
    }

    #[test]
    fn new_rejects_empty_key() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(ConfigError::MissingKey)
        ));
    }

    #[test]
    fn new_rejects_empty_secret() {
        assert!(matches!(
            Credentials::new("key", ""),
            Err(ConfigError::MissingSecret)
        ));
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::new("my-key", "super-secret").unwrap();
        let debug = format!("{:?}", creds);

        assert!(debug.contains("my-key"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn default_version_is_v1_1() {
        assert_eq!(ApiVersion::default(), ApiVersion::V1_1);
        assert_eq!(ApiVersion::default().as_str(), "1.1");
    }
}
