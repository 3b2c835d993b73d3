use crate::error::AppError;
use crate::model::requests::{CreateOrUpdateLeadsRequest, PageRequest};
use crate::model::responses::ApiResponse;
use crate::presentation::lead::{Lead, LeadPartition, LeadStatus};
use async_trait::async_trait;

/// Interface for the lead service
#[async_trait]
pub trait LeadService: Send + Sync {
    /// Gets every lead partition of the instance
    async fn get_lead_partitions(&self) -> Result<ApiResponse<LeadPartition>, AppError>;

    /// Gets a lead by id
    ///
    /// # Arguments
    /// * `id` - Lead id
    /// * `fields` - REST API names of the fields to return, the default set when empty
    async fn get_lead(&self, id: u64, fields: &[String]) -> Result<ApiResponse<Lead>, AppError>;

    /// Gets leads whose `filter_type` field matches one of `filter_values`
    async fn get_leads_by_filter(
        &self,
        filter_type: &str,
        filter_values: &[String],
        fields: &[String],
        page: PageRequest,
    ) -> Result<ApiResponse<Lead>, AppError>;

    /// Gets one page of the members of a static list
    async fn get_leads_by_list(
        &self,
        list_id: u64,
        fields: &[String],
        page: PageRequest,
    ) -> Result<ApiResponse<Lead>, AppError>;

    /// Creates or updates leads, one status per input record
    async fn create_or_update_leads(
        &self,
        request: CreateOrUpdateLeadsRequest,
    ) -> Result<ApiResponse<LeadStatus>, AppError>;
}
