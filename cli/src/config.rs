use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub token_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            token_file: std::env::var("ADMIN_TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".admin-session.json")),
        }
    }

    /// Applies command line overrides on top of the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, token_file: Option<PathBuf>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(token_file) = token_file {
            self.token_file = token_file;
        }
        self
    }
}
