/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{marketo_datetime_opt, serialize_datetime_opt};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute declaration of an activity type
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeAttribute {
    /// Attribute name
    pub name: String,
    /// Marketo data type, e.g. `string`, `integer`
    #[serde(default)]
    pub data_type: Option<String>,
}

/// Activity type
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
    /// Activity type id, the value passed as `activityTypeIds`
    pub id: u32,
    /// Activity type name, e.g. `Visit Webpage`
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: Option<String>,
    /// Attribute stored in `primaryAttributeValue`
    #[serde(default)]
    pub primary_attribute: Option<ActivityTypeAttribute>,
    /// Secondary attributes
    #[serde(default)]
    pub attributes: Vec<ActivityTypeAttribute>,
}

/// Name/value pair attached to an activity
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ActivityAttribute {
    /// Attribute name
    pub name: String,
    /// Attribute value, typed according to the activity type declaration
    #[serde(default)]
    pub value: Value,
}

/// Activity recorded on a lead
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeadActivity {
    /// Activity id
    pub id: u64,
    /// Globally unique id of the activity
    #[serde(rename = "marketoGUID", default)]
    pub marketo_guid: Option<String>,
    /// Lead the activity belongs to
    pub lead_id: u64,
    /// When the activity happened
    #[serde(
        default,
        deserialize_with = "marketo_datetime_opt",
        serialize_with = "serialize_datetime_opt"
    )]
    pub activity_date: Option<DateTime<Utc>>,
    /// Activity type id
    pub activity_type_id: u32,
    /// Campaign that produced the activity
    #[serde(default)]
    pub campaign_id: Option<u64>,
    /// Id of the primary attribute value
    #[serde(default)]
    pub primary_attribute_value_id: Option<u64>,
    /// Primary attribute value
    #[serde(default)]
    pub primary_attribute_value: Option<String>,
    /// Secondary attributes
    #[serde(default)]
    pub attributes: Vec<ActivityAttribute>,
}

impl LeadActivity {
    /// Looks up a secondary attribute by name
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| &attribute.value)
    }
}
