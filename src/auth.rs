//! Pluggable authentication.
//!
//! The order core never authenticates anyone itself. Transports ask an
//! [`Authenticator`] to turn a bearer token into a [`Principal`].
//! [`MockAuthenticator`] is the development stand-in: any non-empty
//! credentials log in as the same mock user.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::clock::Clock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: u64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

struct Session {
    principal: Principal,
    expires_at: DateTime<Utc>,
}

pub struct MockAuthenticator {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl MockAuthenticator {
    const MOCK_USER_ID: u64 = 1;

    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Issue a bearer token. Credentials are not checked beyond being present.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        if username.is_empty() || password.is_empty() {
            warn!("Login rejected: missing credentials");
            return Err(AuthError::InvalidCredentials("username and password are required".to_string()));
        }

        let token = AccessToken {
            access_token: Uuid::new_v4().to_string(),
            expires_at: self.clock.now() + self.ttl,
        };
        let session = Session {
            principal: Principal {
                user_id: Self::MOCK_USER_ID,
                username: username.to_string(),
            },
            expires_at: token.expires_at,
        };
        self.sessions.write().await.insert(token.access_token.clone(), session);

        info!(expires_at = %token.expires_at, "Session issued");
        Ok(token)
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    #[instrument(skip_all)]
    async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let now = self.clock.now();
        let sessions = self.sessions.read().await;
        match sessions.get(token) {
            Some(session) if session.expires_at > now => {
                debug!(user_id = session.principal.user_id, "Token verified");
                Ok(session.principal.clone())
            }
            Some(_) => {
                debug!("Token expired");
                Err(AuthError::Unauthenticated)
            }
            None => {
                debug!("Unknown token");
                Err(AuthError::Unauthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[tokio::test]
    async fn test_login_then_verify() {
        let auth = MockAuthenticator::new(Duration::minutes(30), Arc::new(FixedClock::default()));
        let token = auth.login("test", "secret").await.unwrap();

        let principal = auth.verify(&token.access_token).await.unwrap();
        assert_eq!(principal, Principal { user_id: 1, username: "test".to_string() });
    }

    #[tokio::test]
    async fn test_rejects_unknown_expired_and_empty() {
        let clock = FixedClock::default();
        let auth = MockAuthenticator::new(Duration::minutes(30), Arc::new(clock.clone()));

        assert_eq!(auth.verify("not-a-token").await, Err(AuthError::Unauthenticated));
        assert!(matches!(auth.login("", "secret").await, Err(AuthError::InvalidCredentials(_))));

        let token = auth.login("test", "secret").await.unwrap();
        clock.advance(Duration::minutes(30));
        assert_eq!(auth.verify(&token.access_token).await, Err(AuthError::Unauthenticated));
    }
}
