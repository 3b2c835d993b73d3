use crate::error::AppError;
use crate::model::requests::PageRequest;
use crate::model::responses::ApiResponse;
use crate::presentation::campaign::Campaign;
use async_trait::async_trait;

/// Interface for the smart campaign service
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Gets one page of smart campaigns
    async fn get_campaigns(&self, page: PageRequest) -> Result<ApiResponse<Campaign>, AppError>;

    /// Gets a smart campaign by id
    ///
    /// Marketo answers with a one element `result`, or `success: false` and error
    /// `610` when the campaign does not exist.
    async fn get_campaign(&self, id: u64) -> Result<ApiResponse<Campaign>, AppError>;
}
