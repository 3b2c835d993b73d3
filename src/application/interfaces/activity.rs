use crate::error::AppError;
use crate::model::requests::LeadActivityQuery;
use crate::model::responses::ApiResponse;
use crate::presentation::activity::{ActivityType, LeadActivity};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Interface for the activity service
#[async_trait]
pub trait ActivityService: Send + Sync {
    /// Gets a paging token for activities recorded after `since`
    ///
    /// The token is in `next_page_token` of the reply; `result` is empty. Passing it on
    /// to [`ActivityService::get_lead_activity`] and chaining the following tokens is
    /// left to the caller.
    async fn get_paging_token(&self, since: DateTime<Utc>) -> Result<ApiResponse<Value>, AppError>;

    /// Gets every activity type of the instance
    async fn get_activity_types(&self) -> Result<ApiResponse<ActivityType>, AppError>;

    /// Gets one page of lead activities
    async fn get_lead_activity(
        &self,
        query: LeadActivityQuery,
    ) -> Result<ApiResponse<LeadActivity>, AppError>;
}
