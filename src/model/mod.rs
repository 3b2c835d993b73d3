/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Token models
pub mod auth;
/// Enumerated operations and their request builders
pub mod command;
/// Single HTTP exchange and envelope parsing
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Serde helpers for Marketo specific encodings
pub mod utils;
