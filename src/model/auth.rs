/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{MAX_TOKEN_LIFETIME_SECS, TOKEN_EXPIRY_MARGIN_SECS};
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Reply of the identity endpoint
///
/// Marketo answers failed client-credentials grants either with a non-2xx status or
/// with `200 OK` and an `error` / `error_description` pair, so every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Bearer token
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type (Marketo sends `bearer`)
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the token in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// API user the token belongs to
    #[serde(default)]
    pub scope: Option<String>,
    /// OAuth2 error code
    #[serde(default)]
    pub error: Option<String>,
    /// OAuth2 error description
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Bearer token held by [`Auth`](crate::application::auth::Auth)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Bearer token sent with every business request
    pub access_token: String,
    /// Token type reported by the identity endpoint
    pub token_type: String,
    /// Instant after which the token must not be used anymore
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Builds a token from an identity reply received at `now`
    ///
    /// `expires_at` is `now + expires_in` minus [`TOKEN_EXPIRY_MARGIN_SECS`], never
    /// earlier than `now` and never later than [`MAX_TOKEN_LIFETIME_SECS`] after it.
    /// A reply without `expires_in` yields a token valid for this call only.
    ///
    /// # Errors
    /// `AppError::Auth` when the reply carries no usable `access_token`, or when the
    /// expiry instant cannot be represented.
    pub fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Result<Self, AppError> {
        let access_token = match response.access_token {
            Some(token) if !token.trim().is_empty() => token,
            _ => {
                let reason = match (response.error, response.error_description) {
                    (_, Some(description)) => description,
                    (Some(code), None) => code,
                    (None, None) => "reply does not contain an access_token".to_string(),
                };
                return Err(AppError::Auth(reason));
            }
        };

        let lifetime = response
            .expires_in
            .unwrap_or(0)
            .saturating_sub(TOKEN_EXPIRY_MARGIN_SECS)
            .clamp(0, MAX_TOKEN_LIFETIME_SECS);
        let expires_at = Duration::try_seconds(lifetime)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::Auth(format!("token lifetime of {lifetime} seconds is out of range"))
            })?;

        Ok(Self {
            access_token,
            token_type: response.token_type.unwrap_or_else(|| "bearer".to_string()),
            expires_at,
        })
    }

    /// Checks whether the token has reached its (margin adjusted) expiry
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Same as [`Token::is_expired`] against an explicit clock
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Seconds left before expiry, negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
