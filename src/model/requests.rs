/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{MAX_ACTIVITY_TYPE_IDS, MAX_BATCH_SIZE, MAX_INPUT_RECORDS};
use crate::error::AppError;
use crate::model::utils::join_ids;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Paging parameters shared by list-type queries
///
/// Chaining `next_page_token` across calls is up to the caller: feed the token of a
/// reply back through [`PageRequest::with_next_page_token`].
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Records per page, between 1 and 300. Marketo's default is 300
    pub batch_size: Option<u32>,
    /// Cursor returned by the previous page
    pub next_page_token: Option<String>,
}

impl PageRequest {
    /// Creates an empty page request (first page, server default size)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Sets the cursor of the page to fetch
    #[must_use]
    pub fn with_next_page_token(mut self, token: impl Into<String>) -> Self {
        self.next_page_token = Some(token.into());
        self
    }

    /// Checks the batch size bounds
    ///
    /// # Errors
    /// `AppError::InvalidInput` when `batch_size` is outside `1..=300`.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_batch_size(self.batch_size)
    }

    /// Appends the paging parameters to a query string
    pub fn append_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(size) = self.batch_size {
            query.push(("batchSize", size.to_string()));
        }
        if let Some(token) = &self.next_page_token {
            query.push(("nextPageToken", token.clone()));
        }
    }
}

pub(crate) fn validate_batch_size(batch_size: Option<u32>) -> Result<(), AppError> {
    match batch_size {
        Some(size) if size == 0 || size > MAX_BATCH_SIZE => Err(AppError::InvalidInput(format!(
            "batch size must be between 1 and {MAX_BATCH_SIZE}, got {size}"
        ))),
        _ => Ok(()),
    }
}

/// Query for the lead activity endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadActivityQuery {
    /// Paging token obtained from `get_paging_token` or a previous page
    pub next_page_token: String,
    /// Activity types to return, at most 10
    pub activity_type_ids: Vec<u32>,
    /// Restrict to the members of a static list
    pub list_id: Option<u64>,
    /// Restrict to these leads
    pub lead_ids: Vec<u64>,
    /// Records per page, between 1 and 300
    pub batch_size: Option<u32>,
}

impl LeadActivityQuery {
    /// Creates a query for the given paging token and activity types
    pub fn new(next_page_token: impl Into<String>, activity_type_ids: Vec<u32>) -> Self {
        Self {
            next_page_token: next_page_token.into(),
            activity_type_ids,
            ..Self::default()
        }
    }

    /// Restricts the query to a static list
    #[must_use]
    pub fn with_list_id(mut self, list_id: u64) -> Self {
        self.list_id = Some(list_id);
        self
    }

    /// Restricts the query to a set of leads
    #[must_use]
    pub fn with_lead_ids(mut self, lead_ids: Vec<u64>) -> Self {
        self.lead_ids = lead_ids;
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Checks the query before it is sent
    ///
    /// # Errors
    /// `AppError::InvalidInput` for an empty paging token, no or more than ten
    /// activity types, or a batch size out of bounds.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.next_page_token.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "lead activity query requires a paging token".to_string(),
            ));
        }
        if self.activity_type_ids.is_empty() || self.activity_type_ids.len() > MAX_ACTIVITY_TYPE_IDS {
            return Err(AppError::InvalidInput(format!(
                "lead activity query takes 1 to {MAX_ACTIVITY_TYPE_IDS} activity type ids, got {}",
                self.activity_type_ids.len()
            )));
        }
        validate_batch_size(self.batch_size)
    }

    /// Builds the query string
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("nextPageToken", self.next_page_token.clone()),
            ("activityTypeIds", join_ids(&self.activity_type_ids)),
        ];
        if let Some(list_id) = self.list_id {
            query.push(("listId", list_id.to_string()));
        }
        if !self.lead_ids.is_empty() {
            query.push(("leadIds", join_ids(&self.lead_ids)));
        }
        if let Some(size) = self.batch_size {
            query.push(("batchSize", size.to_string()));
        }
        query
    }
}

/// Write mode of a lead upsert
#[derive(Debug, Clone, Copy, DisplaySimple, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LeadAction {
    /// Create missing leads and update existing ones
    #[default]
    CreateOrUpdate,
    /// Only create; existing leads are skipped
    CreateOnly,
    /// Only update; unknown leads are skipped
    UpdateOnly,
    /// Always create, even when a duplicate exists
    CreateDuplicate,
}

/// Body of the lead upsert call
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrUpdateLeadsRequest {
    /// Write mode
    pub action: LeadAction,
    /// Field used to match existing leads, `email` when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_field: Option<String>,
    /// Lead partition to write into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_name: Option<String>,
    /// Lead records keyed by field REST API name
    pub input: Vec<Map<String, Value>>,
}

impl CreateOrUpdateLeadsRequest {
    /// Creates an upsert of the given records
    pub fn new(action: LeadAction, input: Vec<Map<String, Value>>) -> Self {
        Self {
            action,
            input,
            ..Self::default()
        }
    }

    /// Sets the field used to match existing leads
    #[must_use]
    pub fn with_lookup_field(mut self, field: impl Into<String>) -> Self {
        self.lookup_field = Some(field.into());
        self
    }

    /// Sets the target partition
    #[must_use]
    pub fn with_partition_name(mut self, partition: impl Into<String>) -> Self {
        self.partition_name = Some(partition.into());
        self
    }

    /// Checks the record count
    ///
    /// # Errors
    /// `AppError::InvalidInput` for an empty input or more than 300 records.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_record_count("lead upsert", self.input.len())
    }
}

/// Reference to a lead by id, as used in list membership bodies
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadIdInput {
    /// Lead id
    pub id: u64,
}

/// Body of the list membership calls
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListMembershipRequest {
    /// Leads to add or remove
    pub input: Vec<LeadIdInput>,
}

impl ListMembershipRequest {
    /// Builds the body from lead ids
    #[must_use]
    pub fn from_ids(ids: &[u64]) -> Self {
        Self {
            input: ids.iter().map(|&id| LeadIdInput { id }).collect(),
        }
    }
}

pub(crate) fn validate_record_count(operation: &str, count: usize) -> Result<(), AppError> {
    if count == 0 || count > MAX_INPUT_RECORDS {
        return Err(AppError::InvalidInput(format!(
            "{operation} takes 1 to {MAX_INPUT_RECORDS} records, got {count}"
        )));
    }
    Ok(())
}
