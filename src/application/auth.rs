/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Token management for the Marketo REST API
//!
//! Marketo uses the OAuth2 client-credentials grant: the client id and secret are
//! exchanged at the identity endpoint for a bearer token that lives about an hour.
//! [`Auth`] keeps that token in memory only:
//! - no token held: one is requested on the first call
//! - valid token held: it is reused as is
//! - expired token held: it is replaced transparently

use crate::application::config::Config;
use crate::constants::IDENTITY_TOKEN_PATH;
use crate::error::AppError;
use crate::model::auth::{Token, TokenResponse};
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Token manager for a single set of credentials
///
/// The cached token sits behind a mutex held across the whole check-and-refresh, so
/// concurrent callers hitting an empty or expired cache wait for one identity request
/// instead of each sending their own.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: Mutex<Option<Token>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the instance URL
    /// * `client` - HTTP client shared with the command dispatcher
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            token: Mutex::new(None),
        }
    }

    /// Returns a valid token, requesting a new one when none is held or it expired
    ///
    /// # Errors
    /// * `AppError::Auth` - the identity endpoint refused the credentials or replied
    ///   without an access token
    /// * `AppError::Transport` - the identity endpoint could not be reached
    pub async fn get_token(&self) -> Result<Token, AppError> {
        let mut cached = self.token.lock().await;

        match cached.as_ref() {
            Some(token) if !token.is_expired() => return Ok(token.clone()),
            Some(_) => info!("Access token expired, requesting a new one"),
            None => info!("No access token held, requesting one"),
        }

        let token = self.request_token().await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    /// Returns the held token without refreshing it, expired or not
    pub async fn cached_token(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }

    /// Drops the held token so the next call requests a new one
    pub async fn invalidate(&self) {
        let mut cached = self.token.lock().await;
        if cached.take().is_some() {
            debug!("Access token invalidated");
        }
    }

    async fn request_token(&self) -> Result<Token, AppError> {
        let url = self.config.endpoint(IDENTITY_TOKEN_PATH);
        let credentials = &self.config.credentials;

        debug!("Requesting access token from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Token request failed with status {}: {}", status, body);
            return Err(AppError::Auth(format!(
                "identity endpoint returned HTTP {status}"
            )));
        }

        let reply: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Token reply is not valid JSON: {}", e);
            AppError::Auth(format!("identity endpoint returned an invalid body: {e}"))
        })?;

        let token = Token::from_response(reply, Utc::now())?;
        info!(
            "Access token acquired, valid for {} seconds",
            token.seconds_until_expiry()
        );
        Ok(token)
    }
}
