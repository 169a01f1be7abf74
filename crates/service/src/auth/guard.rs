use configs::AuthConfig;
use tracing::warn;

use super::domain::{LoginInput, LoginOutput};
use crate::errors::ServiceError;

const BEARER_PREFIX: &str = "Bearer ";

/// Single shared-secret gate.
///
/// One configured username/password pair unlocks one constant token. There
/// are no sessions and the token never expires.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    username: String,
    password: String,
    token: String,
}

impl AccessGuard {
    pub fn new(cfg: &AuthConfig) -> Self {
        Self {
            username: cfg.username.clone(),
            password: cfg.password.clone(),
            token: cfg.token.clone(),
        }
    }

    /// Check a login attempt; on success returns the constant token.
    pub fn login(&self, input: &LoginInput) -> Result<LoginOutput, ServiceError> {
        let user_ok = input.username.as_deref() == Some(self.username.as_str());
        let pass_ok = input.password.as_deref() == Some(self.password.as_str());
        if !(user_ok && pass_ok) {
            warn!(username = ?input.username, "login rejected");
            return Err(ServiceError::InvalidCredentials);
        }
        Ok(LoginOutput { token: self.token.clone() })
    }

    /// Validate an `Authorization` header value: `Bearer <token>` with an exact token match.
    pub fn authorize(&self, header: Option<&str>) -> Result<(), ServiceError> {
        let presented = header
            .and_then(|h| h.strip_prefix(BEARER_PREFIX))
            .ok_or(ServiceError::Unauthorized)?;
        if presented != self.token {
            return Err(ServiceError::Unauthorized);
        }
        Ok(())
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}
