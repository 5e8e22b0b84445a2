//! Session tokens: HS256-signed JWTs carrying identity and role claims.
//!
//! Tokens are stateless. Validity is decided by the signature and the claim
//! structure alone; nothing is stored server-side and nothing is revoked.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use common::{AppError, JwtConfig};
use domain::{UserId, UserRole, TOKEN_TYPE_BEARER};

/// JWT claims payload.
///
/// Decoding is typed: a missing claim, a non-integer `user_id` or an unknown
/// `role` fails the parse instead of producing partial claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: UserId,
    pub role: UserRole,
    /// Email at login time; not refreshed by later profile updates
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token parse and signing failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is malformed: {0}")]
    Malformed(String),

    #[error("token has expired")]
    Expired,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(msg) => AppError::internal(msg),
            _ => AppError::Unauthenticated,
        }
    }
}

/// Token returned after a successful login
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// JWT access token
    pub token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    /// Claims encoded in the token
    #[serde(skip)]
    pub claims: Claims,
}

/// Issues and parses session tokens with a process-wide signing secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenService {
    /// Create a token service from a raw secret and token lifetime.
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            lifetime,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret_bytes(), Duration::hours(config.expiration_hours))
    }

    /// Sign a token for the given identity.
    pub fn issue(
        &self,
        user_id: UserId,
        role: UserRole,
        email: &str,
    ) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + self.lifetime;

        let claims = Claims {
            user_id,
            role,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.lifetime.num_seconds(),
            claims,
        })
    }

    /// Verify the signature, then decode and type-check the claims.
    pub fn parse_claims(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}
