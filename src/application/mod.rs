/// OAuth2 token management
pub mod auth;
/// Command dispatcher and service implementations
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces grouped by Marketo resource
pub mod interfaces;
