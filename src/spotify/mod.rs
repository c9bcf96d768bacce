//! # Spotify Integration Module
//!
//! This module is the integration layer between an application and the
//! Spotify Web API. It owns the access token obtained through the
//! implicit-grant login flow, dispatches authenticated HTTP requests, and
//! decodes responses into the model records in [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (host UI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Login Flow (implicit grant, redirect parsing)
//!     ├── Client (token + user state, endpoint operations)
//!     └── Transport (trait seam over HTTP)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Client
//!
//! [`client`] provides [`SpotifyClient`], an explicitly constructed and
//! explicitly passed object holding the shared state behind a mutex:
//!
//! - **Current User**: `GET /me`, cached permanently after the first
//!   successful fetch
//! - **Tracks**: `GET /tracks` with a comma-joined id list
//! - **Playlists**: first page of the signed-in user's playlists,
//!   playlist creation, and full track replacement
//!
//! ### Login Flow
//!
//! [`login`] implements the redirect side of the OAuth implicit grant:
//! building the authorization URL, recognizing the redirect callback by
//! scheme, extracting the token or error from the URL fragment, and
//! settling a completion callback exactly once. Rendering the
//! authorization page is the host's job; this module only trades URLs.
//!
//! ### Transport
//!
//! [`transport`] defines the [`Transport`] trait the client dispatches
//! through, plus the production [`HttpTransport`] backed by reqwest.
//! Substituting the trait lets tests observe every request and replay
//! canned responses without a network.
//!
//! ## Error Handling
//!
//! Every operation reports failure through [`crate::Res`] and the
//! [`crate::error::SpotifyError`] taxonomy. Guard failures (no token, no
//! signed-in user) are returned before the transport is invoked, through
//! the same channel as HTTP failures, so callers have exactly one place
//! to check. There are no retries; each operation runs once per call.

pub mod client;
pub mod login;
pub mod transport;

pub use client::SpotifyClient;
pub use login::{AUTH_STATE, LoginCallback, LoginFlow, LoginState};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
