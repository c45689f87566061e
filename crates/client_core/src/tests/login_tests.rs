use anyhow::anyhow;
use async_trait::async_trait;
use shared::domain::Identity;

use super::*;
use crate::{navigation::NavigationHistory, session::SessionState};

fn form(username: &str, password: &str) -> LoginForm {
    LoginForm::with_credentials(username, password)
}

#[tokio::test]
async fn stub_credentials_sign_in_and_open_dashboard() {
    let mut session = SessionState::new();
    let mut nav = NavigationHistory::new();
    let mut login = form("admin", "admin123");

    login.submit(&mut session, &mut nav).await.expect("sign in");

    assert!(session.is_authenticated());
    assert_eq!(nav.current(), Route::Dashboard);
    assert_eq!(login.error(), None);
}

#[tokio::test]
async fn empty_fields_are_reported_before_checking_credentials() {
    let mut session = SessionState::new();
    let mut nav = NavigationHistory::new();
    let mut login = form("admin", "");

    let err = login.submit(&mut session, &mut nav).await.expect_err("missing");

    assert!(matches!(err, LoginError::MissingFields));
    assert_eq!(login.error(), Some("Please fill in all fields"));
    assert!(!session.is_authenticated());
    assert_eq!(nav.current(), Route::Login);
}

#[tokio::test]
async fn wrong_credentials_keep_operator_on_login() {
    let mut session = SessionState::new();
    let mut nav = NavigationHistory::new();
    let mut login = form("admin", "wrong");

    let err = login.submit(&mut session, &mut nav).await.expect_err("invalid");

    assert!(matches!(err, LoginError::InvalidCredentials));
    assert_eq!(login.error(), Some("Invalid username or password"));
    assert!(!session.is_authenticated());
    assert_eq!(nav.visited(), [Route::Login]);
}

#[tokio::test]
async fn error_is_cleared_on_the_next_attempt() {
    let mut session = SessionState::new();
    let mut nav = NavigationHistory::new();
    let mut login = form("", "");
    let _ = login.submit(&mut session, &mut nav).await;
    assert!(login.error().is_some());

    login.username = "admin".to_string();
    login.password = "admin123".to_string();
    login.submit(&mut session, &mut nav).await.expect("sign in");
    assert_eq!(login.error(), None);
}

struct FailingProvider {
    identity: Identity,
}

#[async_trait]
impl Authenticator for FailingProvider {
    async fn login(&mut self) -> anyhow::Result<()> {
        Err(anyhow!("identity provider unreachable"))
    }

    fn logout(&mut self) {}

    fn is_authenticated(&self) -> bool {
        false
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }
}

#[tokio::test]
async fn provider_failure_is_surfaced_and_does_not_navigate() {
    let mut provider = FailingProvider {
        identity: Identity::stub_admin(),
    };
    let mut nav = NavigationHistory::new();
    let mut login = form("admin", "admin123");

    let err = login.submit(&mut provider, &mut nav).await.expect_err("provider");

    assert!(matches!(err, LoginError::Provider(_)));
    assert_eq!(
        login.error(),
        Some("Sign-in failed: identity provider unreachable")
    );
    assert_eq!(nav.current(), Route::Login);
}
