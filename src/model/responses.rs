/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::utils::string_or_number;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the `errors` (or `reasons`) array of a Marketo reply
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseError {
    /// Marketo error code, e.g. `"601"` for an invalid token
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    /// Human readable message
    #[serde(default)]
    pub message: String,
}

/// Envelope wrapping every Marketo REST reply
///
/// `success` is the authoritative business outcome; the HTTP status of the reply is
/// not consulted. `T` defaults to [`serde_json::Value`] so `result` holds the records
/// exactly as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T = Value> {
    /// Identifier of the request, useful when talking to Marketo support
    #[serde(default)]
    pub request_id: String,
    /// Business success flag
    pub success: bool,
    /// Records returned by the call, absent on most failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<T>>,
    /// Errors reported by Marketo when `success` is false
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
    /// Non fatal warnings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Cursor for the next page, when the result set continues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    /// Whether more records are available through `next_page_token`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_result: Option<bool>,
}

impl<T> ApiResponse<T> {
    /// Business success flag
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Identifier of the request
    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Records of the reply, empty when the reply has none
    #[must_use]
    pub fn result(&self) -> &[T] {
        self.result.as_deref().unwrap_or_default()
    }

    /// First error reported by Marketo, if any
    #[must_use]
    pub fn error(&self) -> Option<&ResponseError> {
        self.errors.first()
    }

    /// Cursor for the next page
    #[must_use]
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    /// Whether Marketo announced further pages
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.more_result.unwrap_or(false)
    }

    /// Turns a business failure into an error
    ///
    /// # Errors
    /// `AppError::Api` with the first reported error when `success` is false. A failed
    /// reply without errors is reported with the code `"unknown"`.
    pub fn into_result(self) -> Result<Vec<T>, AppError> {
        if self.success {
            return Ok(self.result.unwrap_or_default());
        }
        let (code, message) = match self.errors.into_iter().next() {
            Some(error) => (error.code, error.message),
            None => (
                "unknown".to_string(),
                format!("request {} failed without errors", self.request_id),
            ),
        };
        Err(AppError::Api { code, message })
    }
}
