use async_trait::async_trait;
use shared::{login_url, AuthApi, AuthFailure, LoginRequest, LoginResponse};

/// `AuthApi` over reqwest. No timeout or retry is configured.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAuthApi {
    pub fn new(api_base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), api_base_url)
    }

    pub fn with_client(client: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            client,
            endpoint: login_url(api_base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthFailure> {
        tracing::debug!(endpoint = %self.endpoint, username = %request.username, "posting login");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AuthFailure::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AuthFailure::Status(status.as_u16()));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| AuthFailure::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}
