//! Bearer token verification.
//!
//! Tokens are HS256 JWTs signed with a shared secret. Verification is a pure
//! yes/no decision: a missing header, a malformed header, a bad signature, an
//! expired token, and an unusable subject all produce the same 401 response,
//! so a caller can never probe which check failed. The specific cause is
//! still recorded server-side at debug level.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use noteworthy_core::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT claims this service reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id as a UUID string.
    pub sub: String,
    /// Expiration time (unix timestamp). Tokens without one are rejected.
    pub exp: usize,
}

/// Why a token failed verification.
///
/// Never leaves the server: the HTTP layer logs it and answers with the
/// uniform 401.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header, or an empty token.
    #[error("missing or malformed bearer token")]
    MissingBearer,

    /// Signature, expiry, or structural validation failed.
    #[error("token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token verified but its subject is not a UUID.
    #[error("token subject is not a user id: {0}")]
    BadSubject(#[from] uuid::Error),
}

/// Verifies a bearer token and resolves it to a user.
///
/// Handlers depend on this trait rather than a concrete algorithm, so tests
/// can substitute a verifier and the signing scheme can change without
/// touching routes.
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and return the user it authenticates.
    fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}

/// HS256 verifier over a shared secret.
pub struct HmacTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl HmacTokenVerifier {
    /// Create a verifier from the shared secret.
    ///
    /// `Validation::default()` pins the algorithm to HS256 and requires a
    /// valid `exp` claim, with the library's standard clock leeway.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }
}

impl TokenVerifier for HmacTokenVerifier {
    fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        let user_id = data.claims.sub.parse()?;
        Ok(user_id)
    }
}

/// The verified caller, extracted from the Authorization header.
///
/// A handler that takes this argument is authenticated by construction: the
/// request never reaches it without a token the configured verifier accepts.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub UserId);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            tracing::debug!(error = %AuthError::MissingBearer, "authentication failed");
            return Err(ApiError::Unauthorized);
        };

        match state.verifier().verify(token) {
            Ok(user_id) => Ok(Self(user_id)),
            Err(e) => {
                tracing::debug!(error = %e, "authentication failed");
                Err(ApiError::Unauthorized)
            }
        }
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// Returns None for a missing header, a different scheme, or an empty token.
fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret-0123456789";

    fn mint(secret: &str, claims: &serde_json::Value) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn valid_claims(sub: &str) -> serde_json::Value {
        let exp = chrono::Utc::now().timestamp() + 3600;
        serde_json::json!({ "sub": sub, "exp": exp })
    }

    #[test]
    fn test_verify_accepts_valid_token() {
        let user = UserId::new();
        let token = mint(SECRET, &valid_claims(&user.to_string()));
        let verifier = HmacTokenVerifier::new(SECRET);
        assert_eq!(verifier.verify(&token).unwrap(), user);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = mint("other-secret", &valid_claims(&UserId::new().to_string()));
        let verifier = HmacTokenVerifier::new(SECRET);
        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // Two hours past beats the default 60s leeway.
        let exp = chrono::Utc::now().timestamp() - 7200;
        let claims = serde_json::json!({ "sub": UserId::new().to_string(), "exp": exp });
        let token = mint(SECRET, &claims);
        let verifier = HmacTokenVerifier::new(SECRET);
        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_rejects_missing_exp() {
        let claims = serde_json::json!({ "sub": UserId::new().to_string() });
        let token = mint(SECRET, &claims);
        let verifier = HmacTokenVerifier::new(SECRET);
        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let verifier = HmacTokenVerifier::new(SECRET);
        assert!(verifier.verify("not.a.token").is_err());
        assert!(verifier.verify("").is_err());
    }

    #[test]
    fn test_verify_rejects_non_uuid_subject() {
        let token = mint(SECRET, &valid_claims("alice"));
        let verifier = HmacTokenVerifier::new(SECRET);
        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::BadSubject(_))
        ));
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = axum::http::Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&parts_with_auth(None)), None);
        assert_eq!(
            bearer_token(&parts_with_auth(Some("Bearer abc.def.ghi"))),
            Some("abc.def.ghi")
        );
        assert_eq!(bearer_token(&parts_with_auth(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&parts_with_auth(Some("Bearer "))), None);
        assert_eq!(bearer_token(&parts_with_auth(Some("Bearer    "))), None);
    }
}
