/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{marketo_datetime_opt, serialize_datetime_opt};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Static list
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StaticList {
    /// List id
    pub id: u64,
    /// List name
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: Option<String>,
    /// Program the list belongs to
    #[serde(default)]
    pub program_name: Option<String>,
    /// Workspace holding the list
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
}
