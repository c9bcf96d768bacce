use std::sync::Arc;

use reqwest::Method;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
    Res, config,
    error::SpotifyError,
    types::{Playlist, Track, User},
};

use super::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

// Shared mutable client state. All writes go through the client's mutex,
// so the token hand-off from the login flow and the user cache fill are
// serialized.
#[derive(Default)]
struct ClientState {
    access_token: Option<String>,
    user: Option<User>,
}

/// Client for the Spotify Web API.
///
/// Holds the bearer token obtained from the login flow and, once fetched,
/// the signed-in user. Construct one per application and pass it to the
/// code that needs it; every endpoint operation is an async method
/// returning [`Res`].
///
/// # Example
///
/// ```
/// use spotweb::spotify::SpotifyClient;
///
/// let client = SpotifyClient::new();
/// client.set_access_token("BQC...").await;
/// let user = client.get_current_user().await?;
/// ```
pub struct SpotifyClient {
    transport: Arc<dyn Transport>,
    state: Mutex<ClientState>,
}

impl SpotifyClient {
    /// Creates a client backed by the default HTTP transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()))
    }

    /// Creates a client on top of a caller-supplied transport. Tests use
    /// this to substitute a scripted transport for the HTTP layer.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        SpotifyClient {
            transport,
            state: Mutex::new(ClientState::default()),
        }
    }

    /// Stores the access token used to authenticate subsequent requests.
    ///
    /// Called by the login flow once a redirect has been parsed. The token
    /// is held in memory only and is never refreshed or cleared for the
    /// lifetime of the client.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.access_token = Some(token.into());
    }

    /// Returns the cached signed-in user without a network call, if one
    /// has been fetched.
    pub async fn cached_user(&self) -> Option<User> {
        self.state.lock().await.user.clone()
    }

    /// Drops the cached user so the next [`Self::get_current_user`] call
    /// fetches a fresh profile. Nothing invalidates the cache implicitly.
    pub async fn clear_cached_user(&self) {
        self.state.lock().await.user = None;
    }

    /// Fetches the signed-in user's profile.
    ///
    /// The first successful call caches the user for the lifetime of the
    /// client; later calls return the cached record without touching the
    /// network. The state lock is held across the fetch, so concurrent
    /// first calls collapse into a single request.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Authentication`] when no access token is set
    /// - [`SpotifyError::Api`] / [`SpotifyError::Transport`] on HTTP failure
    pub async fn get_current_user(&self) -> Res<User> {
        let mut state = self.state.lock().await;
        if let Some(user) = &state.user {
            return Ok(user.clone());
        }

        let token = state
            .access_token
            .clone()
            .ok_or(SpotifyError::Authentication)?;

        let response = self
            .dispatch(ApiRequest {
                method: Method::GET,
                url: format!("{api}/me", api = config::api_url()),
                bearer: Some(token),
                body: None,
            })
            .await?;

        let user = User::from_value(&response.json());
        state.user = Some(user.clone());
        Ok(user)
    }

    /// Fetches full track records for the given ids.
    ///
    /// The API accepts at most 100 ids per request; the limit is not
    /// checked here, and an oversized list surfaces whatever error the
    /// API returns. A response without a `tracks` array yields an empty
    /// list rather than an error.
    pub async fn get_tracks(&self, ids: &[&str]) -> Res<Vec<Track>> {
        let token = self.bearer().await?;
        let response = self
            .dispatch(ApiRequest {
                method: Method::GET,
                url: format!(
                    "{api}/tracks?ids={ids}",
                    api = config::api_url(),
                    ids = ids.join(",")
                ),
                bearer: Some(token),
                body: None,
            })
            .await?;

        let body = response.json();
        let tracks = body
            .get("tracks")
            .and_then(Value::as_array)
            .map(|tracks| tracks.iter().map(Track::from_value).collect())
            .unwrap_or_default();

        Ok(tracks)
    }

    /// Lists playlists of the signed-in user.
    ///
    /// Only the first page of 50 playlists is requested; continuation
    /// pages are not followed. The `user` argument is accepted for parity
    /// with the host application's call sites, but the request path is
    /// always built from the signed-in user's id.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::NotSignedIn`] when no user is cached or the cached
    /// user has no id.
    pub async fn get_playlists_for_user(&self, user: &User) -> Res<Vec<Playlist>> {
        debug!(requested = ?user.id, "listing playlists for the signed-in user");
        let (token, user_id) = self.signed_in().await?;

        let response = self
            .dispatch(ApiRequest {
                method: Method::GET,
                url: format!(
                    "{api}/users/{user_id}/playlists?limit=50&offset=0",
                    api = config::api_url()
                ),
                bearer: Some(token),
                body: None,
            })
            .await?;

        let body = response.json();
        let playlists = body
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Playlist::from_value).collect())
            .unwrap_or_default();

        Ok(playlists)
    }

    /// Creates a playlist owned by the signed-in user and returns it.
    pub async fn create_playlist(&self, name: &str, public: bool) -> Res<Playlist> {
        let (token, user_id) = self.signed_in().await?;

        let response = self
            .dispatch(ApiRequest {
                method: Method::POST,
                url: format!(
                    "{api}/users/{user_id}/playlists",
                    api = config::api_url()
                ),
                bearer: Some(token),
                body: Some(json!({ "name": name, "public": public })),
            })
            .await?;

        Ok(Playlist::from_value(&response.json()))
    }

    /// Replaces the entire contents of `playlist` with `tracks`.
    ///
    /// Track URIs are built as `spotify:track:<id>`; tracks without an id
    /// are skipped. A 2xx response means the replacement was applied.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::NotSignedIn`] when no user is cached
    /// - [`SpotifyError::MissingPlaylistId`] when `playlist` has no id
    pub async fn replace_tracks(&self, tracks: &[Track], playlist: &Playlist) -> Res<()> {
        let (token, user_id) = self.signed_in().await?;
        let playlist_id = playlist
            .id
            .clone()
            .ok_or(SpotifyError::MissingPlaylistId)?;

        let uris: Vec<String> = tracks
            .iter()
            .filter_map(|track| track.id.as_ref())
            .map(|id| format!("spotify:track:{id}"))
            .collect();

        self.dispatch(ApiRequest {
            method: Method::PUT,
            url: format!(
                "{api}/users/{user_id}/playlists/{playlist_id}/tracks",
                api = config::api_url()
            ),
            bearer: Some(token),
            body: Some(json!({ "uris": uris })),
        })
        .await?;

        Ok(())
    }

    // Access token for operations that only need authentication.
    async fn bearer(&self) -> Res<String> {
        self.state
            .lock()
            .await
            .access_token
            .clone()
            .ok_or(SpotifyError::Authentication)
    }

    // Token plus the cached user's id, for operations that address the
    // signed-in user. Fails before any network activity when either is
    // missing; the user guard is checked first.
    async fn signed_in(&self) -> Res<(String, String)> {
        let state = self.state.lock().await;
        let user_id = state
            .user
            .as_ref()
            .and_then(|user| user.id.clone())
            .ok_or(SpotifyError::NotSignedIn)?;
        let token = state
            .access_token
            .clone()
            .ok_or(SpotifyError::Authentication)?;
        Ok((token, user_id))
    }

    // Sends one request and maps any non-success status to an error with
    // the response body attached. No retries; every operation is a single
    // attempt.
    async fn dispatch(&self, request: ApiRequest) -> Res<ApiResponse> {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let response = self.transport.execute(request).await?;
        if !response.status.is_success() {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            warn!(status = %response.status, body = %body, "request failed");
            return Err(SpotifyError::Api {
                status: response.status,
                body,
            });
        }

        Ok(response)
    }
}

impl Default for SpotifyClient {
    fn default() -> Self {
        Self::new()
    }
}
