use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Deliberately vague, the detail of which credential was wrong is only
    /// logged, never shown to the user.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Could not reach the authentication service: {0}")]
    Unreachable(String),
}

impl AuthError {
    /// Fixed text for the user-facing notification. The underlying detail
    /// only goes to the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Invalid username or password",
            AuthError::Unreachable(_) => "Could not reach the authentication service",
        }
    }
}

/// Seam between the screens and the authentication backend.
///
/// Session storage is synchronous, only the credential check itself goes
/// through an await point.
#[async_trait]
pub trait AuthService: std::fmt::Debug + Send + Sync {
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<UserRecord, AuthError>;
    fn is_authenticated(&self) -> bool;
    fn user_data(&self) -> Option<UserRecord>;
    fn store_user_data(&self, user: UserRecord);
    fn sign_out(&self);
}

/// In-memory stand-in for the real backend.
///
/// A single default account exists, `admin` with password `admin123`. The
/// artificial latency keeps the in-flight states of the screens observable.
#[derive(Debug)]
pub struct StubAuthClient {
    latency: Duration,
    session: RwLock<Option<UserRecord>>,
}

impl StubAuthClient {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(800),
            session: RwLock::new(None),
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            session: RwLock::new(None),
        }
    }

    fn admin_user() -> UserRecord {
        UserRecord {
            id: 1,
            name: "Administrador".to_string(),
            username: "admin".to_string(),
            email: "admin@system.com".to_string(),
            is_admin: true,
        }
    }
}

impl Default for StubAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthService for StubAuthClient {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, AuthError> {
        tokio::time::sleep(self.latency).await;
        if username == "admin" && password == "admin123" {
            tracing::info!("user '{}' authenticated", username);
            Ok(Self::admin_user())
        } else {
            tracing::warn!("authentication rejected for user '{}'", username);
            Err(AuthError::InvalidCredentials)
        }
    }

    fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .map(|s| s.is_some())
            .unwrap_or(false)
    }

    fn user_data(&self) -> Option<UserRecord> {
        self.session.read().ok().and_then(|s| s.clone())
    }

    fn store_user_data(&self, user: UserRecord) {
        if let Ok(mut session) = self.session.write() {
            *session = Some(user);
        }
    }

    fn sign_out(&self) {
        if let Ok(mut session) = self.session.write() {
            *session = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StubAuthClient {
        StubAuthClient::with_latency(Duration::from_millis(0))
    }

    #[tokio::test]
    async fn valid_credentials_return_the_admin_account() {
        let user = client().authenticate("admin", "admin123").await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "admin");
        assert_eq!(user.email, "admin@system.com");
        assert!(user.is_admin);
    }

    #[tokio::test]
    async fn wrong_credentials_are_rejected_with_a_generic_error() {
        let client = client();
        assert_eq!(
            client.authenticate("admin", "wrong").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            client.authenticate("someone", "admin123").await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn user_message_hides_the_detail() {
        let err = AuthError::Unreachable("10.0.0.5 timed out".to_string());
        assert_eq!(
            err.user_message(),
            "Could not reach the authentication service"
        );
        assert!(!err.user_message().contains("10.0.0.5"));
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let client = client();
        assert!(!client.is_authenticated());
        assert_eq!(client.user_data(), None);

        let user = client.authenticate("admin", "admin123").await.unwrap();
        client.store_user_data(user.clone());
        assert!(client.is_authenticated());
        assert_eq!(client.user_data(), Some(user));

        client.sign_out();
        assert!(!client.is_authenticated());
        assert_eq!(client.user_data(), None);
    }
}
