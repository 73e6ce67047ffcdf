use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues, validates, and refreshes signed bearer tokens.
///
/// Tokens are HS256 JWTs over [`Claims`]. The scheme is stateless: validity
/// is purely a function of the signature and the embedded expiry, nothing is
/// looked up or stored per token, and a token cannot be revoked early.
///
/// The signing secret and time-to-live are injected at construction and
/// fixed for the provider's lifetime.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

/// A freshly signed token together with its decoded essentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Encoded token string (header.payload.signature)
    pub token: String,

    /// Subject the token was issued for
    pub subject: String,

    /// When the token stops validating
    pub expires_at: DateTime<Utc>,
}

impl TokenProvider {
    /// Create a provider signing with `secret` and issuing tokens that
    /// expire `ttl` after issuance.
    ///
    /// Expiry is checked with zero leeway, so a token is rejected the
    /// moment `exp` passes.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Sign a new token asserting `subject`, expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - signing failed
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        let claims = Claims::for_subject(subject, self.ttl);
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| TokenError::EncodingFailed("expiry out of range".to_string()))?;

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            subject: claims.sub,
            expires_at,
        })
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Errors
    /// * `InvalidSignature` - MAC does not match (tampering or wrong key)
    /// * `Expired` - current time is past the embedded expiry
    /// * `Malformed` - string does not decode into the expected structure
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Validate `token` and, if it still validates, sign a brand-new token
    /// for the same subject with a freshly computed expiry.
    ///
    /// The old token is not revoked; it keeps validating until its own
    /// expiry passes.
    ///
    /// # Errors
    /// Same as [`validate`](Self::validate), plus `EncodingFailed` from
    /// re-issuance.
    pub fn refresh(&self, token: &str) -> Result<IssuedToken, TokenError> {
        let claims = self.validate(token)?;
        self.issue(&claims.sub)
    }
}
