use chrono::{DateTime, Utc};
use jsonwebtoken::decode;

use super::session::{Claims, SessionIssuer};
use crate::error::AuthError;

impl SessionIssuer {
    /// Returns the admin email the token was issued to.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// A token is valid while `now` is before its `exp` second.
    ///
    /// `login_at` truncates the issue time to a whole second before adding the
    /// TTL, so the accepted window is `[iat, iat + ttl)` measured from that
    /// truncated `iat`, not from the sub-second instant of the login call.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "token rejected");
                AuthError::InvalidToken
            })?
            .claims;

        if now.timestamp() >= claims.exp {
            tracing::debug!(jti = %claims.jti, "token expired");
            return Err(AuthError::InvalidToken);
        }
        if claims.sub != self.admin_email {
            tracing::debug!(jti = %claims.jti, "token subject is not the admin");
            return Err(AuthError::InvalidToken);
        }

        Ok(claims.sub)
    }
}
