/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error type for every fallible operation of the client.
//!
//! Business failures (a reply with `"success": false`) are not errors: they come back
//! as an [`ApiResponse`](crate::model::responses::ApiResponse) and only become an
//! [`AppError::Api`] when the caller asks for it with `into_result`.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the Marketo client
#[derive(Debug, Error)]
pub enum AppError {
    /// The access token could not be obtained from the identity endpoint
    #[error("authentication error: {0}")]
    Auth(String),

    /// The HTTP exchange itself failed (connection, TLS, timeout, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The reply body could not be parsed as a Marketo envelope
    #[error("malformed response (HTTP {status}): {message}")]
    MalformedResponse {
        /// HTTP status of the reply
        status: StatusCode,
        /// Parser diagnostic
        message: String,
    },

    /// A configuration value or command argument was rejected before any request was sent
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A business failure surfaced through `ApiResponse::into_result`
    #[error("api error {code}: {message}")]
    Api {
        /// Marketo error code, e.g. `"601"`
        code: String,
        /// Human readable message
        message: String,
    },

    /// A request body could not be serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the crate
pub type MarketoResult<T> = Result<T, AppError>;
