//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum BittrexError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("request error: {0}")]
    Request(#[from] RequestError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("malformed response: {0}")]
    Response(#[from] ResponseError),
}

/// Construction-time configuration errors. Fatal, surfaced synchronously.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("api key is required")]
    MissingKey,

    #[error("api secret is required")]
    MissingSecret,

    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Transport-level failures. Never retried internally.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("[{status}: {status_text}] {message}")]
    Status {
        status: u16,
        status_text: String,
        /// Best-effort server message extracted from the error body.
        message: String,
    },
}

/// The server answered 2xx but reported `success: false`.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

/// A response that violates the documented schema. Indicates an API
/// contract change and is never silently swallowed.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{endpoint} returned an empty result")]
    EmptyResult { endpoint: String },
}
