/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Marketo Client
//!
//! A typed client for the Marketo REST API.
//!
//! The client owns an OAuth2 client-credentials token which is acquired lazily on the
//! first call, reused while it is valid and replaced transparently once it expires.
//! Every operation is one variant of [`model::command::Command`]; the replies are
//! wrapped in [`model::responses::ApiResponse`], whose `success` flag is the
//! authoritative business outcome.
//!
//! ## Usage
//!
//! ```ignore
//! use marketo_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let campaigns = client.get_campaigns(PageRequest::default()).await?;
//! if campaigns.is_success() {
//!     for campaign in campaigns.result() {
//!         info!("{} ({})", campaign.name, campaign.id);
//!     }
//! }
//! ```

/// Application layer: configuration, token management and the command dispatcher
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by every operation
pub mod error;
/// Wire models: commands, requests, responses and the HTTP exchange
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Typed Marketo records
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
