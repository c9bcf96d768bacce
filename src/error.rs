use reqwest::StatusCode;

/// Errors surfaced by the client and the login flow.
///
/// There is no decode variant: model decoding is lenient, so a partial or
/// malformed body degrades to a partially-populated record instead of
/// failing.
#[derive(Debug, thiserror::Error)]
pub enum SpotifyError {
    /// An operation that needs a signed-in user ran before one was cached.
    #[error("no user is signed in")]
    NotSignedIn,

    /// A request was attempted before an access token was set.
    #[error("no access token available")]
    Authentication,

    /// The authorization server ended the login flow with an error
    /// parameter instead of a token.
    #[error("authorization failed: {0}")]
    Authorization(String),

    /// A track operation was given a playlist that carries no id.
    #[error("playlist is missing an id")]
    MissingPlaylistId,

    /// Connection-level failure before any HTTP status was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success response from the API. The body is kept for diagnostics.
    #[error("spotify returned status {status}")]
    Api { status: StatusCode, body: String },
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        SpotifyError::Transport(err.to_string())
    }
}
