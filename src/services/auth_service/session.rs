use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// JWT payload. `exp` and `iat` are Unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// Checks the admin credential and issues/validates HS256 session tokens.
pub struct SessionIssuer {
    pub(super) admin_email: String,
    pub(super) admin_password: String,
    pub(super) encoding_key: EncodingKey,
    pub(super) decoding_key: DecodingKey,
    pub(super) validation: Validation,
    pub(super) ttl: Duration,
}

impl SessionIssuer {
    pub fn new(admin_email: String, admin_password: String, secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller's clock in verify_at.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        SessionIssuer {
            admin_email,
            admin_password,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.admin_email.clone(),
            config.admin_password.clone(),
            config.jwt_secret.as_bytes(),
            config.token_ttl,
        )
    }
}
