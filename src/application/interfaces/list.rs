use crate::error::AppError;
use crate::model::requests::PageRequest;
use crate::model::responses::ApiResponse;
use crate::presentation::lead::LeadStatus;
use crate::presentation::list::StaticList;
use async_trait::async_trait;

/// Interface for the static list service
#[async_trait]
pub trait ListService: Send + Sync {
    /// Gets one page of static lists
    async fn get_lists(&self, page: PageRequest) -> Result<ApiResponse<StaticList>, AppError>;

    /// Gets a static list by id
    async fn get_list(&self, id: u64) -> Result<ApiResponse<StaticList>, AppError>;

    /// Adds leads to a static list, one status per lead
    async fn add_leads_to_list(
        &self,
        list_id: u64,
        lead_ids: &[u64],
    ) -> Result<ApiResponse<LeadStatus>, AppError>;

    /// Removes leads from a static list, one status per lead
    async fn remove_leads_from_list(
        &self,
        list_id: u64,
        lead_ids: &[u64],
    ) -> Result<ApiResponse<LeadStatus>, AppError>;
}
