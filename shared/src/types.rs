use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Storage key the admin token is written under.
pub const ADMIN_TOKEN_KEY: &str = "authTokenAdmin";

/// Path of the authentication endpoint, relative to the API base URL.
pub const ADMIN_LOGIN_ENDPOINT: &str = "/admin/login";

/// Client-side route of the login page.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Client-side route the user lands on after a successful login.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Joins the configured API base URL with the login endpoint.
///
/// An empty base yields a same-origin path.
pub fn login_url(api_base_url: &str) -> String {
    format!(
        "{}{}",
        api_base_url.trim_end_matches('/'),
        ADMIN_LOGIN_ENDPOINT
    )
}

// ============================================================================
// API Request Types
// ============================================================================

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// API Response Types
// ============================================================================

/// Body of a successful login. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
