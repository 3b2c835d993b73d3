/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Marketo Client Prelude
//!
//! Re-exports the types and traits needed for most Marketo API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use marketo_client::prelude::*;
//!
//! let config = Config::with_credentials(
//!     "https://123-ABC-456.mktorest.com",
//!     Credentials::new("client-id", "client-secret", "123-ABC-456"),
//! );
//! let client = Client::new(config).expect("valid configuration");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Marketo API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, MarketoResult};

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Command dispatcher
pub use crate::application::client::Client;

/// Token manager and token
pub use crate::application::auth::Auth;
pub use crate::model::auth::Token;

/// Enumerated operations
pub use crate::model::command::Command;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::activity::ActivityService;
pub use crate::application::interfaces::campaign::CampaignService;
pub use crate::application::interfaces::lead::LeadService;
pub use crate::application::interfaces::list::ListService;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

pub use crate::model::requests::{
    CreateOrUpdateLeadsRequest, LeadAction, LeadActivityQuery, PageRequest,
};
pub use crate::model::responses::{ApiResponse, ResponseError};

// ============================================================================
// RECORDS
// ============================================================================

pub use crate::presentation::activity::{ActivityAttribute, ActivityType, LeadActivity};
pub use crate::presentation::campaign::{Campaign, CampaignType};
pub use crate::presentation::lead::{Lead, LeadPartition, LeadStatus};
pub use crate::presentation::list::StaticList;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
