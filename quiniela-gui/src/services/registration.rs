use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub password: String,
}

/// What the backend acknowledges once an account request was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpReceipt {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("An account already exists for {0}")]
    AlreadyRegistered(String),
    #[error("Could not reach the registration service: {0}")]
    Unreachable(String),
}

impl RegistrationError {
    /// Fixed text for the user-facing notification. The underlying detail
    /// only goes to the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            RegistrationError::AlreadyRegistered(_) => {
                "An account already exists for this email"
            }
            RegistrationError::Unreachable(_) => "Could not reach the registration service",
        }
    }
}

#[async_trait]
pub trait RegistrationService: std::fmt::Debug + Send + Sync {
    async fn register(&self, request: SignUpRequest) -> Result<SignUpReceipt, RegistrationError>;
}

/// Accepts any well-formed request after a short artificial delay. No
/// account is actually created anywhere.
#[derive(Debug)]
pub struct SimulatedRegistration {
    delay: Duration,
}

impl SimulatedRegistration {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(1500),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedRegistration {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationService for SimulatedRegistration {
    async fn register(&self, request: SignUpRequest) -> Result<SignUpReceipt, RegistrationError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!("simulated account creation for '{}'", request.email);
        Ok(SignUpReceipt {
            email: request.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_hides_the_detail() {
        let err = RegistrationError::AlreadyRegistered("ada@example.com".to_string());
        assert_eq!(err.user_message(), "An account already exists for this email");
        assert!(!err.user_message().contains("ada@example.com"));
    }

    #[tokio::test]
    async fn simulated_registration_echoes_the_email() {
        let service = SimulatedRegistration::with_delay(Duration::from_millis(0));
        let receipt = service
            .register(SignUpRequest {
                given_name: "Ada".to_string(),
                family_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(receipt.email, "ada@example.com");
    }
}
