//! Spotify Web API Client Library
//!
//! This library wraps the Spotify Web API for applications that sign
//! users in through the OAuth implicit-grant flow. It holds the bearer
//! token in memory, decodes API responses into lenient, fully-optional
//! model records, and exposes one async operation per endpoint.
//!
//! # Modules
//!
//! - `config` - Endpoint base URLs, overridable via environment variables
//! - `error` - The error taxonomy surfaced by every operation
//! - `spotify` - Client, login flow, and HTTP transport seam
//! - `types` - Model records and the OAuth scope enumeration
//!
//! # Example
//!
//! ```
//! use spotweb::spotify::{LoginFlow, SpotifyClient};
//! use spotweb::types::Scope;
//!
//! #[tokio::main]
//! async fn main() -> spotweb::Res<()> {
//!     let client = SpotifyClient::new();
//!     let mut login = LoginFlow::new();
//!
//!     // Load this URL in a web view; feed the redirect back in.
//!     let url = login.begin("client-key", "myapp", &[Scope::UserReadPrivate], |ok, _| {
//!         println!("signed in: {ok}");
//!     });
//!
//!     # let _ = url;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod spotify;
pub mod types;

/// Result alias used by every fallible operation in the crate.
///
/// Failures always arrive as [`error::SpotifyError`], whether a guard
/// fired before the request was built or the request itself failed, so
/// callers have exactly one place to check.
///
/// # Example
///
/// ```
/// use spotweb::Res;
///
/// async fn display_name(client: &spotweb::spotify::SpotifyClient) -> Res<Option<String>> {
///     Ok(client.get_current_user().await?.display_name)
/// }
/// ```
pub type Res<T> = std::result::Result<T, error::SpotifyError>;
