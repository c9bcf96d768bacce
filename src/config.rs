//! Endpoint configuration for the Spotify Web API.
//!
//! Values are read from environment variables with production defaults,
//! which keeps the library usable without any setup while letting tests
//! and staging environments point the client somewhere else.

use std::env;

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to
/// the production endpoint when it is not set.
///
/// # Example
///
/// ```
/// let api_url = api_url(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the base URL of the Spotify accounts service.
///
/// Retrieves the `SPOTIFY_ACCOUNTS_URL` environment variable, falling back
/// to the production endpoint when it is not set. The accounts service
/// hosts the authorization page the login flow sends users to.
///
/// # Example
///
/// ```
/// let accounts = accounts_url(); // e.g., "https://accounts.spotify.com"
/// ```
pub fn accounts_url() -> String {
    env::var("SPOTIFY_ACCOUNTS_URL").unwrap_or_else(|_| "https://accounts.spotify.com".to_string())
}
