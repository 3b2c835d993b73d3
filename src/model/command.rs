/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! The closed set of operations the client can dispatch.
//!
//! Each [`Command`] variant owns a request builder that turns it into a
//! [`PreparedRequest`]: method, path relative to the instance URL, query string and
//! optional JSON body. Argument validation happens here, before a token is requested.

use crate::constants::REST_PREFIX;
use crate::error::AppError;
use crate::model::requests::{
    CreateOrUpdateLeadsRequest, LeadActivityQuery, ListMembershipRequest, PageRequest,
    validate_record_count,
};
use crate::model::utils::join_ids;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde_json::Value;

/// A Marketo REST operation
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `GET /rest/v1/campaigns.json`
    GetCampaigns {
        /// Paging parameters
        page: PageRequest,
    },
    /// `GET /rest/v1/campaigns/{id}.json`
    GetCampaign {
        /// Campaign id
        id: u64,
    },
    /// `GET /rest/v1/lists.json`
    GetLists {
        /// Paging parameters
        page: PageRequest,
    },
    /// `GET /rest/v1/lists/{id}.json`
    GetList {
        /// Static list id
        id: u64,
    },
    /// `GET /rest/v1/leads/partitions.json`
    GetLeadPartitions,
    /// `GET /rest/v1/activities/pagingtoken.json`
    GetPagingToken {
        /// Activities after this instant are returned by the queries using the token
        since: DateTime<Utc>,
    },
    /// `GET /rest/v1/activities/types.json`
    GetActivityTypes,
    /// `GET /rest/v1/activities.json`
    GetLeadActivity(LeadActivityQuery),
    /// `GET /rest/v1/lead/{id}.json`
    GetLead {
        /// Lead id
        id: u64,
        /// Fields to return, Marketo's default set when empty
        fields: Vec<String>,
    },
    /// `GET /rest/v1/leads.json`
    GetLeadsByFilter {
        /// Field to filter on, e.g. `email`
        filter_type: String,
        /// Accepted values, at most 300
        filter_values: Vec<String>,
        /// Fields to return, Marketo's default set when empty
        fields: Vec<String>,
        /// Paging parameters
        page: PageRequest,
    },
    /// `GET /rest/v1/list/{list_id}/leads.json`
    GetLeadsByList {
        /// Static list id
        list_id: u64,
        /// Fields to return, Marketo's default set when empty
        fields: Vec<String>,
        /// Paging parameters
        page: PageRequest,
    },
    /// `POST /rest/v1/leads.json`
    CreateOrUpdateLeads(CreateOrUpdateLeadsRequest),
    /// `POST /rest/v1/lists/{list_id}/leads.json`
    AddLeadsToList {
        /// Static list id
        list_id: u64,
        /// Leads to add, at most 300
        lead_ids: Vec<u64>,
    },
    /// `DELETE /rest/v1/lists/{list_id}/leads.json`
    RemoveLeadsFromList {
        /// Static list id
        list_id: u64,
        /// Leads to remove, at most 300
        lead_ids: Vec<u64>,
    },
}

/// HTTP request derived from a [`Command`]
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the instance base URL
    pub path: String,
    /// Query string parameters, in order
    pub query: Vec<(&'static str, String)>,
    /// JSON body
    pub body: Option<Value>,
}

impl PreparedRequest {
    fn get(path: String) -> Self {
        Self {
            method: Method::GET,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }
}

impl Command {
    /// Operation name as documented by Marketo, used in logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetCampaigns { .. } => "getCampaigns",
            Command::GetCampaign { .. } => "getCampaign",
            Command::GetLists { .. } => "getLists",
            Command::GetList { .. } => "getList",
            Command::GetLeadPartitions => "getLeadPartitions",
            Command::GetPagingToken { .. } => "getPagingToken",
            Command::GetActivityTypes => "getActivityTypes",
            Command::GetLeadActivity(_) => "getLeadActivity",
            Command::GetLead { .. } => "getLead",
            Command::GetLeadsByFilter { .. } => "getLeadsByFilterType",
            Command::GetLeadsByList { .. } => "getLeadsByList",
            Command::CreateOrUpdateLeads(_) => "createOrUpdateLeads",
            Command::AddLeadsToList { .. } => "addLeadsToList",
            Command::RemoveLeadsFromList { .. } => "removeLeadsFromList",
        }
    }

    /// Validates the arguments and builds the HTTP request
    ///
    /// # Errors
    /// `AppError::InvalidInput` when an argument is out of bounds, or `AppError::Json`
    /// when a body cannot be serialized.
    pub fn prepare(&self) -> Result<PreparedRequest, AppError> {
        match self {
            Command::GetCampaigns { page } => paged(rest_path("campaigns.json"), page),
            Command::GetCampaign { id } => Ok(PreparedRequest::get(rest_path(&format!(
                "campaigns/{id}.json"
            )))),
            Command::GetLists { page } => paged(rest_path("lists.json"), page),
            Command::GetList { id } => Ok(PreparedRequest::get(rest_path(&format!(
                "lists/{id}.json"
            )))),
            Command::GetLeadPartitions => {
                Ok(PreparedRequest::get(rest_path("leads/partitions.json")))
            }
            Command::GetPagingToken { since } => Ok(paging_token(since)),
            Command::GetActivityTypes => {
                Ok(PreparedRequest::get(rest_path("activities/types.json")))
            }
            Command::GetLeadActivity(query) => {
                query.validate()?;
                Ok(PreparedRequest::get(rest_path("activities.json")).with_query(query.to_query()))
            }
            Command::GetLead { id, fields } => {
                let mut query = Vec::new();
                append_fields(&mut query, fields);
                Ok(PreparedRequest::get(rest_path(&format!("lead/{id}.json"))).with_query(query))
            }
            Command::GetLeadsByFilter {
                filter_type,
                filter_values,
                fields,
                page,
            } => leads_by_filter(filter_type, filter_values, fields, page),
            Command::GetLeadsByList {
                list_id,
                fields,
                page,
            } => {
                let mut request = paged(rest_path(&format!("list/{list_id}/leads.json")), page)?;
                append_fields(&mut request.query, fields);
                Ok(request)
            }
            Command::CreateOrUpdateLeads(body) => {
                body.validate()?;
                Ok(PreparedRequest {
                    method: Method::POST,
                    path: rest_path("leads.json"),
                    query: Vec::new(),
                    body: Some(serde_json::to_value(body)?),
                })
            }
            Command::AddLeadsToList { list_id, lead_ids } => {
                validate_record_count("add leads to list", lead_ids.len())?;
                Ok(PreparedRequest {
                    method: Method::POST,
                    path: rest_path(&format!("lists/{list_id}/leads.json")),
                    query: Vec::new(),
                    body: Some(serde_json::to_value(ListMembershipRequest::from_ids(
                        lead_ids,
                    ))?),
                })
            }
            Command::RemoveLeadsFromList { list_id, lead_ids } => {
                validate_record_count("remove leads from list", lead_ids.len())?;
                Ok(PreparedRequest {
                    method: Method::DELETE,
                    path: rest_path(&format!("lists/{list_id}/leads.json")),
                    query: vec![("id", join_ids(lead_ids))],
                    body: None,
                })
            }
        }
    }
}

fn rest_path(resource: &str) -> String {
    format!("{REST_PREFIX}/{resource}")
}

fn paged(path: String, page: &PageRequest) -> Result<PreparedRequest, AppError> {
    page.validate()?;
    let mut query = Vec::new();
    page.append_query(&mut query);
    Ok(PreparedRequest::get(path).with_query(query))
}

fn paging_token(since: &DateTime<Utc>) -> PreparedRequest {
    PreparedRequest::get(rest_path("activities/pagingtoken.json")).with_query(vec![(
        "sinceDatetime",
        since.to_rfc3339_opts(SecondsFormat::Secs, true),
    )])
}

fn leads_by_filter(
    filter_type: &str,
    filter_values: &[String],
    fields: &[String],
    page: &PageRequest,
) -> Result<PreparedRequest, AppError> {
    if filter_type.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "lead filter requires a filter type".to_string(),
        ));
    }
    validate_record_count("lead filter", filter_values.len())?;
    let mut request = paged(rest_path("leads.json"), page)?;
    request.query.insert(0, ("filterType", filter_type.to_string()));
    request.query.insert(1, ("filterValues", filter_values.join(",")));
    append_fields(&mut request.query, fields);
    Ok(request)
}

fn append_fields(query: &mut Vec<(&'static str, String)>, fields: &[String]) {
    if !fields.is_empty() {
        query.push(("fields", fields.join(",")));
    }
}
