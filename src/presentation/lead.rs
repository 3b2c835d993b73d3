/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::responses::ResponseError;
use crate::model::utils::{marketo_datetime_opt, serialize_datetime_opt};
use chrono::{DateTime, SecondsFormat, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lead partition
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LeadPartition {
    /// Partition id
    pub id: u64,
    /// Partition name, `Default` for the initial partition
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: Option<String>,
}

/// Lead record
///
/// Only the standard fields are typed. Every other field requested through `fields`
/// lands in `extra` under its REST API name.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Lead id
    pub id: u64,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
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
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Lead {
    /// Looks up a field by its REST API name, typed fields included
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::from(self.id)),
            "email" => self.email.clone().map(Value::from),
            "firstName" => self.first_name.clone().map(Value::from),
            "lastName" => self.last_name.clone().map(Value::from),
            "createdAt" => self.created_at.map(rest_datetime),
            "updatedAt" => self.updated_at.map(rest_datetime),
            other => self.extra.get(other).cloned(),
        }
    }
}

fn rest_datetime(value: DateTime<Utc>) -> Value {
    Value::from(value.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Per record outcome of a write call (upsert, list membership)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LeadStatus {
    /// Lead id, absent when the record was skipped before a lead was resolved
    #[serde(default)]
    pub id: Option<u64>,
    /// `created`, `updated`, `added`, `removed`, `skipped`, `notmemberof`, ...
    pub status: String,
    /// Why the record was skipped
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<ResponseError>,
}

impl LeadStatus {
    /// Checks whether Marketo skipped this record
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.status == "skipped"
    }
}
