/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::DEFAULT_REST_TIMEOUT_SECS;
use crate::error::AppError;
use crate::utils::config::{get_env_non_empty, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Authentication credentials for a Marketo instance
///
/// The secret is never serialized, so it stays out of `Debug` and `Display` output.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Client id of the LaunchPoint API service
    pub client_id: String,
    /// Client secret of the LaunchPoint API service
    #[serde(skip_serializing)]
    pub client_secret: String,
    /// Munchkin account id, e.g. `123-ABC-456`
    pub munchkin_id: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        munchkin_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            munchkin_id: munchkin_id.into(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Marketo instance, e.g. `https://123-ABC-456.mktorest.com`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

/// Main configuration for the Marketo API client
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` when present, then reads `MARKETO_CLIENT_ID`,
    /// `MARKETO_CLIENT_SECRET`, `MARKETO_MUNCHKIN_ID`, `MARKETO_URL` and
    /// `MARKETO_REST_TIMEOUT`. When `MARKETO_URL` is unset the URL is derived from
    /// the munchkin id. Missing credentials are logged and left empty, so
    /// [`Config::validate`] (run by `Client::new`) rejects the result.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_non_empty("MARKETO_CLIENT_ID").unwrap_or_default();
        let client_secret = get_env_non_empty("MARKETO_CLIENT_SECRET").unwrap_or_default();
        let munchkin_id = get_env_non_empty("MARKETO_MUNCHKIN_ID").unwrap_or_default();

        if client_id.is_empty() {
            error!("MARKETO_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret.is_empty() {
            error!("MARKETO_CLIENT_SECRET not found in environment variables or .env file");
        }
        if munchkin_id.is_empty() {
            error!("MARKETO_MUNCHKIN_ID not found in environment variables or .env file");
        }

        let base_url = get_env_non_empty("MARKETO_URL").unwrap_or_else(|| {
            if munchkin_id.is_empty() {
                String::new()
            } else {
                default_base_url(&munchkin_id)
            }
        });

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                munchkin_id,
            },
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("MARKETO_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration from explicit values, without touching the environment
    pub fn with_credentials(url: impl Into<String>, credentials: Credentials) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: url.into(),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
            },
        }
    }

    /// Overrides the request timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.rest_api.timeout = seconds;
        self
    }

    /// Checks that every mandatory option is present
    ///
    /// # Errors
    /// `AppError::InvalidInput` naming the first empty option among `url`,
    /// `client_id`, `client_secret` and `munchkin_id`.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("url", &self.rest_api.base_url),
            ("client_id", &self.credentials.client_id),
            ("client_secret", &self.credentials.client_secret),
            ("munchkin_id", &self.credentials.munchkin_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "configuration option `{name}` must not be empty"
                )));
            }
        }
        if self.rest_api.timeout == 0 {
            return Err(AppError::InvalidInput(
                "configuration option `timeout` must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Joins `path` onto the base URL
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Default REST host of a Marketo instance
#[must_use]
pub fn default_base_url(munchkin_id: &str) -> String {
    format!("https://{munchkin_id}.mktorest.com")
}
