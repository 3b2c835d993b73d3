/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{marketo_datetime_opt, serialize_datetime_opt};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Kind of smart campaign
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    /// Campaign fired by a trigger
    Trigger,
    /// Campaign run on a schedule or on demand
    #[default]
    Batch,
}

/// Smart campaign
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Campaign id
    pub id: u64,
    /// Campaign name
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: Option<String>,
    /// Trigger or batch
    #[serde(rename = "type", default)]
    pub campaign_type: CampaignType,
    /// Name of the parent program
    #[serde(default)]
    pub program_name: Option<String>,
    /// Id of the parent program
    #[serde(default)]
    pub program_id: Option<u64>,
    /// Workspace holding the campaign
    #[serde(default)]
    pub workspace_name: Option<String>,
    /// Creation time
    #[serde(
        default,
        deserialize_with = "marketo_datetime_opt",
        serialize_with = "serialize_datetime_opt"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(
        default,
        deserialize_with = "marketo_datetime_opt",
        serialize_with = "serialize_datetime_opt"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether a trigger campaign is active
    #[serde(default)]
    pub active: bool,
}

impl Campaign {
    /// Checks whether the campaign is a trigger campaign
    #[must_use]
    pub fn is_trigger(&self) -> bool {
        self.campaign_type == CampaignType::Trigger
    }
}
