//! HMAC-signed access tokens.
//!
//! Token layout: `v1.<payload>.<signature>` where payload is the base64url
//! encoding of `<user_id>:<expiry_unix>` and the signature is HMAC-SHA256
//! over the raw payload bytes. Verification is keyed-MAC constant time.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use kl_core::ids::UserId;

use crate::usecases::auth::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: UserId,
    /// Unix seconds.
    pub expires_at: i64,
}

pub struct TokenSigner {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    pub fn mint(&self, user_id: &UserId, now: DateTime<Utc>) -> Result<String, AuthError> {
        let expires_at = (now + self.ttl).timestamp();
        let payload = format!("{}:{}", user_id, expires_at);
        let signature = self.sign(payload.as_bytes())?;
        Ok(format!(
            "{TOKEN_VERSION}.{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthError> {
        let mut parts = token.split('.');
        let (version, payload_b64, signature_b64) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(v), Some(p), Some(s), None) => (v, p, s),
                _ => return Err(AuthError::InvalidToken),
            };
        if version != TOKEN_VERSION {
            return Err(AuthError::InvalidToken);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::InvalidToken)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::InvalidToken)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AuthError::Other(anyhow::anyhow!("HMAC key setup failed: {e}")))?;
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidToken)?;

        let claims = Self::parse_claims(&payload)?;
        if claims.expires_at <= now.timestamp() {
            return Err(AuthError::ExpiredToken);
        }
        Ok(claims)
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, AuthError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AuthError::Other(anyhow::anyhow!("HMAC key setup failed: {e}")))?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn parse_claims(payload: &[u8]) -> Result<TokenClaims, AuthError> {
        let text = std::str::from_utf8(payload).map_err(|_| AuthError::InvalidToken)?;
        let (user_part, expiry_part) = text.split_once(':').ok_or(AuthError::InvalidToken)?;
        let user_id = user_part
            .parse::<i64>()
            .map_err(|_| AuthError::InvalidToken)?;
        let expires_at = expiry_part
            .parse::<i64>()
            .map_err(|_| AuthError::InvalidToken)?;
        Ok(TokenClaims {
            user_id: UserId::new(user_id),
            expires_at,
        })
    }
}
