use async_trait::async_trait;
use gloo_net::http::Request;
use shared::{login_url, AuthApi, AuthFailure, LoginRequest, LoginResponse};

/// `AuthApi` over the browser's fetch.
pub struct GlooAuthApi {
    endpoint: String,
}

impl GlooAuthApi {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            endpoint: login_url(api_base_url),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for GlooAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthFailure> {
        let body = serde_json::to_string(request)?;

        let resp = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| AuthFailure::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthFailure::Transport(e.to_string()))?;

        if !resp.ok() {
            return Err(AuthFailure::Status(resp.status()));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| AuthFailure::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}
