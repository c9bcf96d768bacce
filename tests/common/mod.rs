// Shared across the test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use spotweb::Res;
use spotweb::error::SpotifyError;
use spotweb::spotify::{ApiRequest, ApiResponse, SpotifyClient, Transport};

/// Transport that records every request and replays canned responses in
/// order. Once the script runs out, further requests fail.
pub struct ScriptedTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<Vec<ApiResponse>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<ApiResponse>) -> Arc<Self> {
        Arc::new(ScriptedTransport {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses),
        })
    }

    pub fn ok(body: Value) -> ApiResponse {
        ApiResponse {
            status: StatusCode::OK,
            body: body.to_string().into_bytes(),
        }
    }

    pub fn status(status: StatusCode, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> ApiRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Res<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(SpotifyError::Transport("no scripted response".to_string()));
        }
        Ok(responses.remove(0))
    }
}

/// Client with a token set and the user cache already filled from a
/// scripted `/me` response, followed by `responses`.
pub async fn signed_in_client(
    user_id: &str,
    responses: Vec<ApiResponse>,
) -> (SpotifyClient, Arc<ScriptedTransport>) {
    let mut script = vec![ScriptedTransport::ok(
        serde_json::json!({ "id": user_id, "display_name": "Test User" }),
    )];
    script.extend(responses);

    let transport = ScriptedTransport::new(script);
    let client = SpotifyClient::with_transport(transport.clone());
    client.set_access_token("token123").await;
    client
        .get_current_user()
        .await
        .expect("seeding the user cache should succeed");

    (client, transport)
}
