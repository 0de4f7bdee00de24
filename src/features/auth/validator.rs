use super::model::VerifiedIdentity;
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use super::jwks::JwksClient;

/// Verifies RS256 ID tokens issued by the identity provider
pub struct JwtValidator {
    jwks_client: Arc<JwksClient>,
    issuer: String,
    audience: String,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    // Standard claims, checked by jsonwebtoken
    sub: String,
    #[serde(rename = "iss")]
    _iss: String,
    #[serde(rename = "aud")]
    _aud: String,
    #[serde(rename = "iat")]
    _iat: u64,
    #[serde(rename = "exp")]
    _exp: u64,

    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
    /// Provider-specific uid; equals `sub` when present
    #[serde(default)]
    user_id: Option<String>,
}

impl JwtValidator {
    pub fn new(
        jwks_client: Arc<JwksClient>,
        issuer: String,
        audience: String,
        leeway: Duration,
    ) -> Self {
        Self {
            jwks_client,
            issuer,
            audience,
            leeway: leeway.as_secs(),
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<VerifiedIdentity, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only RS256 is allowed",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AppError::Auth("Missing kid in token header".to_string()))?;

        let decoding_key = self
            .jwks_client
            .get_key(&kid)
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;

        let claims = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?
            .claims;

        identity_from_claims(claims)
    }
}

fn identity_from_claims(claims: Claims) -> Result<VerifiedIdentity, AppError> {
    if claims.sub.trim().is_empty() {
        return Err(AppError::Auth("Token has an empty subject".to_string()));
    }

    if let Some(user_id) = &claims.user_id {
        if user_id != &claims.sub {
            return Err(AppError::Auth(
                "Token user_id does not match its subject".to_string(),
            ));
        }
    }

    Ok(VerifiedIdentity {
        uid: claims.sub,
        email: claims.email.filter(|e| !e.is_empty()),
        email_verified: claims.email_verified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: serde_json::Value) -> Claims {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_identity_from_claims() {
        let identity = identity_from_claims(claims(json!({
            "sub": "uid-1", "user_id": "uid-1", "email": "a@b.com", "email_verified": true,
            "iss": "https://securetoken.google.com/p", "aud": "p", "iat": 1, "exp": 2
        })))
        .unwrap();

        assert_eq!(
            identity,
            VerifiedIdentity {
                uid: "uid-1".to_string(),
                email: Some("a@b.com".to_string()),
                email_verified: true,
            }
        );
        assert_eq!(identity.verified_email(), Some("a@b.com"));
    }

    #[test]
    fn test_unverified_email_is_withheld() {
        let identity = identity_from_claims(claims(json!({
            "sub": "attacker", "email": "boss@example.com",
            "iss": "i", "aud": "a", "iat": 1, "exp": 2
        })))
        .unwrap();

        assert!(!identity.email_verified);
        assert_eq!(identity.email.as_deref(), Some("boss@example.com"));
        assert_eq!(identity.verified_email(), None);
    }

    #[test]
    fn test_mismatched_or_empty_subject_is_rejected() {
        let mismatched = claims(json!({
            "sub": "uid-1", "user_id": "uid-2",
            "iss": "i", "aud": "a", "iat": 1, "exp": 2
        }));
        assert!(matches!(
            identity_from_claims(mismatched),
            Err(AppError::Auth(_))
        ));

        let empty = claims(json!({"sub": " ", "iss": "i", "aud": "a", "iat": 1, "exp": 2}));
        assert!(matches!(identity_from_claims(empty), Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected_before_key_lookup() {
        let validator = JwtValidator::new(
            Arc::new(JwksClient::new(
                "http://127.0.0.1:9/unreachable",
                Duration::from_secs(60),
            )),
            "issuer".to_string(),
            "audience".to_string(),
            Duration::from_secs(0),
        );

        let err = validator.validate_token("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }
}
