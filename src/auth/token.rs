// JWT session token issuing and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// JWT claims carried by a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // subject user id
    pub iat: i64, // issued at (unix seconds)
    pub exp: i64, // expiry (unix seconds)
}

/// Token service for issuing and verifying session tokens.
///
/// The signing keys are derived from the process-wide secret once at
/// construction and shared read-only for the process lifetime. Tokens are
/// self-contained: nothing is stored server-side and expiry is the only
/// termination mechanism.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    /// Session tokens live for 7 days unless configured otherwise.
    pub const DEFAULT_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

    /// Create a new TokenService from the signing secret.
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Issue a signed session token for a user.
    pub fn issue(&self, user_id: i32) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Verify a session token and return the subject user id.
    ///
    /// Bad signature, malformed payload and expiry all collapse into the
    /// single `InvalidToken` kind; callers cannot tell them apart.
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims.sub)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Configured token lifetime, used for the session cookie max-age.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Helper to create a test token service
    fn test_token_service() -> TokenService {
        TokenService::new(
            "test_secret_key_for_testing_purposes",
            TokenService::DEFAULT_TTL_SECONDS,
        )
    }

    #[test]
    fn issue_and_verify_roundtrip() {
        let service = test_token_service();
        let token = service.issue(42).unwrap();
        assert_eq!(service.verify(&token).unwrap(), 42);
    }

    #[test]
    fn default_lifetime_is_7_days() {
        let service = test_token_service();
        let token = service.issue(1).unwrap();

        let mut validation = Validation::default();
        validation.validate_exp = false;
        let claims = decode::<Claims>(
            &token,
            &DecodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
            &validation,
        )
        .unwrap()
        .claims;

        assert_eq!(claims.exp - claims.iat, 604800);
    }

    #[test]
    fn expired_token_is_rejected_as_invalid() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            iat: now - 1000,
            exp: now - 500, // past the default leeway
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        let err = test_token_service().verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = test_token_service();
        let token = service.issue(7).unwrap();

        // Flip one character in the middle of the payload
        let mid = token.len() / 2;
        let replacement = if token.as_bytes()[mid] == b'x' { "y" } else { "x" };
        let tampered = format!("{}{}{}", &token[..mid], replacement, &token[mid + 1..]);

        let err = service.verify(&tampered).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let service = test_token_service();
        let other = TokenService::new("another-secret", TokenService::DEFAULT_TTL_SECONDS);

        let token = other.issue(1).unwrap();
        let err = service.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.verify("").is_err());
        assert!(service.verify("not.a.token").is_err());
        assert!(service.verify("invalid_token_format").is_err());
        assert!(service
            .verify("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    proptest! {
        #[test]
        fn prop_roundtrip_preserves_subject(user_id in 1i32..1_000_000) {
            let service = test_token_service();
            let token = service.issue(user_id)?;
            prop_assert_eq!(service.verify(&token)?, user_id);
        }

        #[test]
        fn prop_random_strings_are_rejected(garbage in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.verify(&garbage).is_err());
        }
    }
}
