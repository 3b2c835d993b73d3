/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Command dispatcher for the Marketo REST API
//!
//! [`Client`] turns a [`Command`] into an HTTP request, attaches the bearer token
//! as an `Authorization: Bearer` header and wraps the reply in an [`ApiResponse`].
//! The typed service traits are thin wrappers over [`Client::execute_as`].
//!
//! # Example
//! ```ignore
//! use marketo_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let lists = client.get_lists(PageRequest::new().with_batch_size(50)).await?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::activity::ActivityService;
use crate::application::interfaces::campaign::CampaignService;
use crate::application::interfaces::lead::LeadService;
use crate::application::interfaces::list::ListService;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::command::Command;
use crate::model::http::{make_http_request, parse_api_response};
use crate::model::requests::{CreateOrUpdateLeadsRequest, LeadActivityQuery, PageRequest};
use crate::model::responses::ApiResponse;
use crate::presentation::activity::{ActivityType, LeadActivity};
use crate::presentation::campaign::Campaign;
use crate::presentation::lead::{Lead, LeadPartition, LeadStatus};
use crate::presentation::list::StaticList;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for one Marketo instance
///
/// Owns the configuration, the HTTP client and the [`Auth`] token manager. There is
/// no shared global instance: callers create a client and pass it around (wrap it in
/// an `Arc` to share it between tasks).
pub struct Client {
    auth: Auth,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client
    ///
    /// No request is sent: the token is acquired on the first command.
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - a mandatory option (`url`, `client_id`,
    ///   `client_secret`, `munchkin_id`) is empty
    /// * `AppError::Transport` - the HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let config = Arc::new(config);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Auth::new(config.clone(), http_client.clone());

        info!(
            "Marketo client created for munchkin {} at {}",
            config.credentials.munchkin_id, config.rest_api.base_url
        );

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Executes a command and returns the raw envelope, records as JSON values
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - the command arguments were rejected, nothing was sent
    /// * `AppError::Auth` - no token could be obtained, the business request was not sent
    /// * `AppError::Transport` - the HTTP exchange failed
    /// * `AppError::MalformedResponse` - the reply body is not a Marketo envelope
    ///
    /// A reply with `"success": false` is returned as `Ok`.
    pub async fn execute(&self, command: &Command) -> Result<ApiResponse<Value>, AppError> {
        self.execute_as(command).await
    }

    /// Executes a command and deserializes the records as `T`
    ///
    /// # Errors
    /// Same as [`Client::execute`]; records that do not fit `T` are reported as
    /// `AppError::MalformedResponse`.
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        command: &Command,
    ) -> Result<ApiResponse<T>, AppError> {
        let request = command.prepare()?;
        let token = self.auth.get_token().await?;
        let url = self.config.endpoint(&request.path);
        let authorization = token.authorization_header();

        debug!("Dispatching {}", command.name());

        let headers = vec![
            ("Authorization", authorization.as_str()),
            ("Accept", "application/json"),
        ];

        let (status, body) = make_http_request(
            &self.http_client,
            request.method,
            &url,
            headers,
            &request.query,
            request.body.as_ref(),
        )
        .await?;

        let response: ApiResponse<T> = parse_api_response(status, &body)?;

        if !response.success {
            match response.error() {
                Some(error) => warn!(
                    "{} failed (request {}): {} {}",
                    command.name(),
                    response.request_id,
                    error.code,
                    error.message
                ),
                None => warn!(
                    "{} failed (request {}) without errors",
                    command.name(),
                    response.request_id
                ),
            }
        }

        Ok(response)
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the token manager
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

#[async_trait]
impl CampaignService for Client {
    async fn get_campaigns(&self, page: PageRequest) -> Result<ApiResponse<Campaign>, AppError> {
        self.execute_as(&Command::GetCampaigns { page }).await
    }

    async fn get_campaign(&self, id: u64) -> Result<ApiResponse<Campaign>, AppError> {
        self.execute_as(&Command::GetCampaign { id }).await
    }
}

#[async_trait]
impl ListService for Client {
    async fn get_lists(&self, page: PageRequest) -> Result<ApiResponse<StaticList>, AppError> {
        self.execute_as(&Command::GetLists { page }).await
    }

    async fn get_list(&self, id: u64) -> Result<ApiResponse<StaticList>, AppError> {
        self.execute_as(&Command::GetList { id }).await
    }

    async fn add_leads_to_list(
        &self,
        list_id: u64,
        lead_ids: &[u64],
    ) -> Result<ApiResponse<LeadStatus>, AppError> {
        self.execute_as(&Command::AddLeadsToList {
            list_id,
            lead_ids: lead_ids.to_vec(),
        })
        .await
    }

    async fn remove_leads_from_list(
        &self,
        list_id: u64,
        lead_ids: &[u64],
    ) -> Result<ApiResponse<LeadStatus>, AppError> {
        self.execute_as(&Command::RemoveLeadsFromList {
            list_id,
            lead_ids: lead_ids.to_vec(),
        })
        .await
    }
}

#[async_trait]
impl LeadService for Client {
    async fn get_lead_partitions(&self) -> Result<ApiResponse<LeadPartition>, AppError> {
        self.execute_as(&Command::GetLeadPartitions).await
    }

    async fn get_lead(&self, id: u64, fields: &[String]) -> Result<ApiResponse<Lead>, AppError> {
        self.execute_as(&Command::GetLead {
            id,
            fields: fields.to_vec(),
        })
        .await
    }

    async fn get_leads_by_filter(
        &self,
        filter_type: &str,
        filter_values: &[String],
        fields: &[String],
        page: PageRequest,
    ) -> Result<ApiResponse<Lead>, AppError> {
        self.execute_as(&Command::GetLeadsByFilter {
            filter_type: filter_type.to_string(),
            filter_values: filter_values.to_vec(),
            fields: fields.to_vec(),
            page,
        })
        .await
    }

    async fn get_leads_by_list(
        &self,
        list_id: u64,
        fields: &[String],
        page: PageRequest,
    ) -> Result<ApiResponse<Lead>, AppError> {
        self.execute_as(&Command::GetLeadsByList {
            list_id,
            fields: fields.to_vec(),
            page,
        })
        .await
    }

    async fn create_or_update_leads(
        &self,
        request: CreateOrUpdateLeadsRequest,
    ) -> Result<ApiResponse<LeadStatus>, AppError> {
        self.execute_as(&Command::CreateOrUpdateLeads(request)).await
    }
}

#[async_trait]
impl ActivityService for Client {
    async fn get_paging_token(&self, since: DateTime<Utc>) -> Result<ApiResponse<Value>, AppError> {
        self.execute(&Command::GetPagingToken { since }).await
    }

    async fn get_activity_types(&self) -> Result<ApiResponse<ActivityType>, AppError> {
        self.execute_as(&Command::GetActivityTypes).await
    }

    async fn get_lead_activity(
        &self,
        query: LeadActivityQuery,
    ) -> Result<ApiResponse<LeadActivity>, AppError> {
        self.execute_as(&Command::GetLeadActivity(query)).await
    }
}
