// src/services/auth_service/issue_token.rs

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{encode, Header};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use super::session::{Claims, SessionIssuer};
use crate::error::AuthError;

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionIssuer {
    pub fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AuthError> {
        self.login_at(email, password, Utc::now())
    }

    /// Issues a token as of `now`, truncated to whole seconds.
    pub fn login_at(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        // Both comparisons always run.
        let email_ok = email.as_bytes().ct_eq(self.admin_email.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.admin_password.as_bytes());
        if !bool::from(email_ok & password_ok) {
            tracing::warn!(email, "admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let issued_at = now.timestamp();
        let expires_at = issued_at
            .checked_add(self.ttl.num_seconds())
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single())
            .ok_or_else(|| AuthError::Signing("expiry out of range".to_string()))?;
        let claims = Claims {
            sub: email.to_string(),
            exp: expires_at.timestamp(),
            iat: issued_at,
            jti: Uuid::new_v4().to_string(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        tracing::info!(email, jti = %claims.jti, %expires_at, "admin session issued");
        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }
}
