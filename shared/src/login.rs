//! Login state machine and the flow that drives it.
//!
//! [`LoginAttempt`] holds what the form shows. [`LoginFlow`] performs the
//! side effects of a submission: one call to the authentication endpoint,
//! one token write, one navigation.

use std::fmt;

use async_trait::async_trait;

use crate::error::{AuthFailure, LoginError};
use crate::navigation::Navigator;
use crate::storage::TokenStore;
use crate::types::{LoginRequest, LoginResponse, ADMIN_DASHBOARD_PATH};

/// Client for the `/admin/login` endpoint.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthFailure>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Error(String),
    Success { redirect: String },
}

/// The form's fields plus where the current submission stands.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
    state: LoginState,
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("state", &self.state)
            .finish()
    }
}

impl LoginAttempt {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            state: LoginState::Idle,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoginState::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoginState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Starts a submission.
    ///
    /// Clears any previous error, then validates the fields. On success the
    /// attempt is left `Submitting` and the request to send is returned.
    /// A submission while one is already in flight is refused without
    /// touching the state.
    pub fn begin(&mut self) -> Result<LoginRequest, LoginError> {
        if self.is_loading() {
            return Err(LoginError::AlreadySubmitting);
        }
        self.state = LoginState::Submitting;

        if self.username.is_empty() || self.password.is_empty() {
            self.finish(Err(LoginError::MissingCredentials));
            return Err(LoginError::MissingCredentials);
        }

        Ok(LoginRequest::new(
            self.username.clone(),
            self.password.clone(),
        ))
    }

    /// Settles the in-flight submission.
    pub fn finish(&mut self, outcome: Result<(), LoginError>) {
        match outcome {
            Ok(()) => {
                self.state = LoginState::Success {
                    redirect: ADMIN_DASHBOARD_PATH.to_string(),
                };
            }
            Err(err) => {
                if let Some(message) = err.user_message() {
                    self.state = LoginState::Error(message.to_string());
                }
            }
        }
    }
}

pub struct LoginFlow<A, S, N> {
    api: A,
    store: S,
    navigator: N,
}

impl<A, S, N> LoginFlow<A, S, N>
where
    A: AuthApi,
    S: TokenStore,
    N: Navigator,
{
    pub fn new(api: A, store: S, navigator: N) -> Self {
        Self {
            api,
            store,
            navigator,
        }
    }

    /// Calls the endpoint, stores the token and navigates to the dashboard.
    ///
    /// Every failure is reported as [`LoginError::Rejected`]; the cause is
    /// only logged.
    pub async fn authenticate(&self, request: LoginRequest) -> Result<(), LoginError> {
        let response = match self.api.login(&request).await {
            Ok(response) => response,
            Err(cause) => {
                log::warn!("admin login failed for {}: {}", request.username, cause);
                return Err(cause.into());
            }
        };

        if let Err(cause) = self.store.set(&response.token) {
            log::warn!("admin login for {} not persisted: {}", request.username, cause);
            return Err(cause.into());
        }

        log::info!("admin login successful for {}", request.username);
        self.navigator.navigate(ADMIN_DASHBOARD_PATH);
        Ok(())
    }

    /// Runs a whole submission against `attempt`.
    pub async fn submit(&self, attempt: &mut LoginAttempt) -> Result<(), LoginError> {
        let request = attempt.begin()?;
        let outcome = self.authenticate(request).await;
        attempt.finish(outcome.clone());
        outcome
    }

    /// Submits a fresh attempt built from the given credentials.
    pub async fn login(&self, username: &str, password: &str) -> LoginAttempt {
        let mut attempt = LoginAttempt::new(username, password);
        // The outcome is recorded in the attempt's state.
        let _ = self.submit(&mut attempt).await;
        attempt
    }
}
