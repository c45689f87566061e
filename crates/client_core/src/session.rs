use anyhow::Result;
use async_trait::async_trait;
use shared::domain::Identity;
use tracing::info;

/// Authentication capability consumed by the screens. A real identity
/// provider integration replaces [`SessionState`] behind this trait.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&mut self) -> Result<()>;
    fn logout(&mut self);
    fn is_authenticated(&self) -> bool;
    fn identity(&self) -> &Identity;
}

#[derive(Debug, Clone)]
pub struct SessionState {
    authenticated: bool,
    identity: Identity,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_identity(Identity::stub_admin())
    }

    pub fn with_identity(identity: Identity) -> Self {
        Self {
            authenticated: false,
            identity,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Authenticator for SessionState {
    async fn login(&mut self) -> Result<()> {
        self.authenticated = true;
        info!(given_name = %self.identity.given_name, "session: operator signed in");
        Ok(())
    }

    fn logout(&mut self) {
        self.authenticated = false;
        info!(given_name = %self.identity.given_name, "session: operator signed out");
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
