use tracing::debug;
use url::Url;

use crate::{Res, config, error::SpotifyError, types::Scope};

use super::client::SpotifyClient;

/// Fixed `state` parameter sent with every authorization request and
/// echoed back in the redirect.
pub const AUTH_STATE: &str = "34fFs29kd09";

/// Completion callback for the login flow, invoked at most once with the
/// outcome and the error that ended the flow, if any.
pub type LoginCallback = Box<dyn FnOnce(bool, Option<SpotifyError>) + Send>;

/// Where the login flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    AwaitingRedirect,
    TokenExtracted,
    ErrorExtracted,
}

/// Drives the implicit-grant login flow around a host-provided web view.
///
/// The flow is a straight-line sequence rather than a general state
/// machine: [`LoginFlow::begin`] hands the host an authorization URL to
/// load, the host watches navigation for the configured redirect scheme
/// with [`LoginFlow::is_redirect`] and feeds the matching URL to
/// [`LoginFlow::handle_redirect`], which extracts the token or the
/// provider's error and settles the completion callback. There is no
/// timeout; an abandoned flow stays in `AwaitingRedirect`.
pub struct LoginFlow {
    state: LoginState,
    redirect_uri: Option<String>,
    callback: Option<LoginCallback>,
}

impl LoginFlow {
    pub fn new() -> Self {
        LoginFlow {
            state: LoginState::Idle,
            redirect_uri: None,
            callback: None,
        }
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    /// Starts the flow and returns the authorization URL for the host to
    /// load.
    ///
    /// `redirect_uri` is the bare URI scheme registered with the
    /// authorization server; the `://` suffix is appended on the wire.
    /// Scopes are joined with an encoded space, as the authorization
    /// endpoint expects.
    pub fn begin(
        &mut self,
        client_key: &str,
        redirect_uri: &str,
        scopes: &[Scope],
        callback: impl FnOnce(bool, Option<SpotifyError>) + Send + 'static,
    ) -> String {
        let scope = scopes
            .iter()
            .map(Scope::as_str)
            .collect::<Vec<_>>()
            .join("%20");

        let authorize_url = format!(
            "{accounts}/authorize/?client_id={client_key}&response_type=token&redirect_uri={redirect_uri}://&state={state}&scope={scope}",
            accounts = config::accounts_url(),
            state = AUTH_STATE,
        );

        self.redirect_uri = Some(redirect_uri.to_string());
        self.callback = Some(Box::new(callback));
        self.state = LoginState::AwaitingRedirect;

        authorize_url
    }

    /// Whether `url` is the configured redirect callback, judged by a
    /// case-insensitive scheme match.
    pub fn is_redirect(&self, url: &str) -> bool {
        let Some(redirect_uri) = &self.redirect_uri else {
            return false;
        };

        Url::parse(url)
            .map(|parsed| parsed.scheme().eq_ignore_ascii_case(redirect_uri))
            .unwrap_or(false)
    }

    /// Consumes the redirect callback URL and settles the flow.
    ///
    /// The provider returns its parameters in the URL fragment, which
    /// query parsing does not expose, so the first `#` is rewritten to
    /// `?` before the pairs are read. An `access_token` parameter is
    /// pushed into `client` and the completion callback fires with
    /// success; an `error` parameter fires it with failure. Either way
    /// the callback is taken and cannot fire a second time.
    ///
    /// A redirect carrying neither parameter leaves the flow in
    /// `AwaitingRedirect` and fires nothing.
    pub async fn handle_redirect(&mut self, url: &str, client: &SpotifyClient) -> Res<()> {
        let rewritten = url.replacen('#', "?", 1);
        let Ok(parsed) = Url::parse(&rewritten) else {
            debug!(url, "ignoring unparseable redirect");
            return Ok(());
        };

        let mut token: Option<String> = None;
        let mut denial: Option<String> = None;
        for (name, value) in parsed.query_pairs() {
            match name.as_ref() {
                "access_token" => token = Some(value.into_owned()),
                "error" => denial = Some(value.into_owned()),
                _ => {}
            }
        }

        if let Some(token) = token {
            client.set_access_token(token).await;
            self.state = LoginState::TokenExtracted;
            if let Some(callback) = self.callback.take() {
                callback(true, None);
            }
            return Ok(());
        }

        if let Some(reason) = denial {
            self.state = LoginState::ErrorExtracted;
            if let Some(callback) = self.callback.take() {
                callback(false, Some(SpotifyError::Authorization(reason.clone())));
            }
            return Err(SpotifyError::Authorization(reason));
        }

        Ok(())
    }
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}
