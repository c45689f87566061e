use shared::routes::Route;
use thiserror::Error;
use tracing::{info, warn};

use crate::{navigation::Navigator, session::Authenticator};

/// Operator credential accepted by the stub sign-in gate.
pub const STUB_OPERATOR_USERNAME: &str = "admin";
pub const STUB_OPERATOR_PASSWORD: &str = "admin123";

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Sign-in failed: {0}")]
    Provider(anyhow::Error),
}

#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(
        &mut self,
        session: &mut dyn Authenticator,
        navigator: &mut dyn Navigator,
    ) -> Result<(), LoginError> {
        self.error = None;
        match self.try_sign_in(session).await {
            Ok(()) => {
                navigator.navigate(Route::Dashboard);
                Ok(())
            }
            Err(err) => {
                warn!(username = %self.username, error = %err, "login: sign-in rejected");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    async fn try_sign_in(&self, session: &mut dyn Authenticator) -> Result<(), LoginError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        if self.username != STUB_OPERATOR_USERNAME || self.password != STUB_OPERATOR_PASSWORD {
            return Err(LoginError::InvalidCredentials);
        }
        session.login().await.map_err(LoginError::Provider)?;
        info!(username = %self.username, "login: operator signed in");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/login_tests.rs"]
mod tests;
