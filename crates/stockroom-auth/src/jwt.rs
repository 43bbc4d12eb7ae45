//! JWT issuance and verification.
//!
//! Tokens are HS256-signed with the secret from [`JwtConfig`] and carry
//! [`Claims`]. Verification distinguishes why a token was rejected so callers
//! can log it, though the HTTP layer reports every failure the same way.
//!
//! Expiry is checked on the decoded payload before the signature, so an
//! expired token is always reported as [`TokenError::Expired`] whatever key
//! signed it. The boundary is strict: a token is expired once `now >= exp`,
//! with no leeway.
//!
//! # Example
//!
//! ```ignore
//! use stockroom_auth::{issue_token, verify_token};
//!
//! let token = issue_token(&identity, &jwt_config)?;
//! let claims = verify_token(&token, &jwt_config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use stockroom_config::JwtConfig;

use crate::claims::{Claims, Identity};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
    #[error("failed to encode token: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

/// Issues a token for `identity` valid for `jwt_config.token_expiry` seconds
/// from now.
pub fn issue_token(identity: &Identity, jwt_config: &JwtConfig) -> Result<String, TokenError> {
    issue_token_at(identity, Utc::now().timestamp(), jwt_config)
}

/// Issues a token as if the current time were `issued_at`.
pub fn issue_token_at(
    identity: &Identity,
    issued_at: i64,
    jwt_config: &JwtConfig,
) -> Result<String, TokenError> {
    let claims = Claims::new(identity, issued_at, jwt_config.token_expiry);

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verifies a token and returns its claims.
///
/// # Errors
///
/// - [`TokenError::Malformed`] if the string is not a decodable token
/// - [`TokenError::Expired`] if the current time is at or past `exp`
/// - [`TokenError::InvalidSignature`] if it was not signed with this secret
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    verify_token_at(token, Utc::now().timestamp(), jwt_config)
}

/// Verifies a token as if the current time were `now`.
pub fn verify_token_at(
    token: &str,
    now: i64,
    jwt_config: &JwtConfig,
) -> Result<Claims, TokenError> {
    let unverified = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &unverified_validation())
        .map_err(|_| TokenError::Malformed)?
        .claims;

    if unverified.is_expired_at(now) {
        return Err(TokenError::Expired);
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &signature_validation(),
    )
    .map(|data| data.claims)
    .map_err(|_| TokenError::InvalidSignature)
}

fn unverified_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    validation
}

// Expiry was already checked against the caller's clock.
fn signature_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn config() -> JwtConfig {
        JwtConfig::new("test-secret")
    }

    fn admin() -> Identity {
        Identity {
            id: 1,
            username: "admin".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let token = issue_token(&admin(), &config()).unwrap();
        let claims = verify_token(&token, &config()).unwrap();

        assert_eq!(claims.identity(), admin());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_has_three_segments() {
        let token = issue_token(&admin(), &config()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_valid_until_just_before_expiry() {
        let token = issue_token_at(&admin(), 1_000, &config()).unwrap();

        assert!(verify_token_at(&token, 1_000, &config()).is_ok());
        assert!(verify_token_at(&token, 4_599, &config()).is_ok());
        assert!(matches!(
            verify_token_at(&token, 4_600, &config()),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_wrong_secret_is_invalid_signature() {
        let token = issue_token(&admin(), &JwtConfig::new("other-secret")).unwrap();
        assert!(matches!(
            verify_token(&token, &config()),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_wins_over_bad_signature() {
        let token = issue_token_at(&admin(), 1_000, &JwtConfig::new("other-secret")).unwrap();
        assert!(matches!(
            verify_token_at(&token, 10_000, &config()),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(
            verify_token("not-a-token", &config()),
            Err(TokenError::Malformed)
        ));
        assert!(matches!(
            verify_token("", &config()),
            Err(TokenError::Malformed)
        ));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let token = issue_token(&admin(), &config()).unwrap();
        let user_token = issue_token(
            &Identity {
                role: Role::User,
                ..admin()
            },
            &config(),
        )
        .unwrap();

        // Admin payload spliced onto a user token's signature.
        let admin_parts: Vec<&str> = token.split('.').collect();
        let user_parts: Vec<&str> = user_token.split('.').collect();
        let forged = format!("{}.{}.{}", admin_parts[0], admin_parts[1], user_parts[2]);

        assert!(matches!(
            verify_token(&forged, &config()),
            Err(TokenError::InvalidSignature)
        ));
    }
}
