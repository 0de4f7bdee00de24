use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::config::IdentityConfig;
use crate::core::error::{AppError, Result};

/// Tokens and identity returned by a successful password sign-in
#[derive(Debug, Clone)]
pub struct IdentitySession {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// Credential operations of the external identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentitySession>;

    async fn send_password_reset(&self, email: &str) -> Result<()>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
    /// Seconds, sent as a string
    #[serde(default)]
    expires_in: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Client for Identity Toolkit compatible REST APIs
pub struct IdentityToolkitClient {
    api_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl IdentityToolkitClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            api_url: config.api_url,
            api_key: config.api_key,
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{}?key={}", self.api_url, method, self.api_key)
    }

    async fn post<B: Serialize + ?Sized>(&self, method: &str, body: &B) -> Result<reqwest::Response> {
        let response = self
            .http_client
            .post(self.endpoint(method))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach identity provider: {}", e);
                AppError::ServiceUnavailable(
                    "Could not reach the authentication service. Check your connection and try again."
                        .to_string(),
                )
            })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let code = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_default();

        tracing::warn!("Identity provider rejected '{}': HTTP {} {}", method, status, code);
        Err(map_provider_error(&code))
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentitySession> {
        let request = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = self.post("signInWithPassword", &request).await?;
        let body = response.json::<SignInResponse>().await.map_err(|e| {
            tracing::error!("Failed to parse sign-in response: {}", e);
            AppError::ExternalServiceError(format!("Failed to parse sign-in response: {}", e))
        })?;

        Ok(IdentitySession {
            uid: body.local_id,
            email: if body.email.is_empty() {
                email.to_string()
            } else {
                body.email
            },
            id_token: body.id_token,
            refresh_token: body.refresh_token,
            expires_in: body.expires_in.parse().unwrap_or(3600),
        })
    }

    async fn send_password_reset(&self, email: &str) -> Result<()> {
        let request = OobCodeRequest {
            request_type: "PASSWORD_RESET",
            email,
        };

        self.post("sendOobCode", &request).await?;
        tracing::info!("Password reset email requested for {}", email);
        Ok(())
    }
}

/// Translate provider error codes into user-facing errors.
///
/// Codes may carry a detail suffix (`TOO_MANY_ATTEMPTS_TRY_LATER : ...`).
fn map_provider_error(message: &str) -> AppError {
    let code = message
        .split(|c: char| c == ':' || c.is_whitespace())
        .next()
        .unwrap_or_default();

    match code {
        "EMAIL_NOT_FOUND" => {
            AppError::Unauthorized("No account exists for this email address".to_string())
        }
        "INVALID_PASSWORD" => AppError::Unauthorized("Incorrect password".to_string()),
        "INVALID_LOGIN_CREDENTIALS" => {
            AppError::Unauthorized("Incorrect email or password".to_string())
        }
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AppError::Unauthorized(
            "Too many failed attempts. Try again later or reset your password.".to_string(),
        ),
        "USER_DISABLED" => AppError::Forbidden("This account has been disabled".to_string()),
        "INVALID_EMAIL" | "MISSING_EMAIL" => {
            AppError::Validation("Invalid email address".to_string())
        }
        "" => AppError::ExternalServiceError("Authentication service error".to_string()),
        other => AppError::ExternalServiceError(format!("Authentication service error: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    /// Minimal stand-in for the provider with one valid account
    async fn fake_provider(
        Path(method): Path<String>,
        Query(query): Query<HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let error = |code: &str| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": {"code": 400, "message": code}})),
            )
        };

        if query.get("key").map(String::as_str) != Some("test-key") {
            return error("API_KEY_INVALID");
        }

        match method.as_str() {
            "accounts:signInWithPassword" => match (body["email"].as_str(), body["password"].as_str()) {
                (Some("owner@example.com"), Some("correct-horse")) => (
                    StatusCode::OK,
                    Json(json!({
                        "localId": "uid-owner",
                        "email": "owner@example.com",
                        "idToken": "id-token",
                        "refreshToken": "refresh-token",
                        "expiresIn": "3600"
                    })),
                ),
                (Some("owner@example.com"), _) => error("INVALID_PASSWORD"),
                (Some("locked@example.com"), _) => {
                    error("TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled")
                }
                _ => error("EMAIL_NOT_FOUND"),
            },
            "accounts:sendOobCode" => {
                if body["requestType"] == "PASSWORD_RESET" {
                    (StatusCode::OK, Json(json!({"email": body["email"]})))
                } else {
                    error("INVALID_REQUEST_TYPE")
                }
            }
            _ => (StatusCode::NOT_FOUND, Json(json!({}))),
        }
    }

    async fn spawn_provider() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/v1/{method}", post(fake_provider));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1", addr)
    }

    fn client(api_url: String) -> IdentityToolkitClient {
        IdentityToolkitClient::new(IdentityConfig {
            api_url,
            api_key: "test-key".to_string(),
        })
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let client = client(spawn_provider().await);
        let session = client
            .sign_in("owner@example.com", "correct-horse")
            .await
            .unwrap();

        assert_eq!(session.uid, "uid-owner");
        assert_eq!(session.id_token, "id-token");
        assert_eq!(session.expires_in, 3600);
    }

    #[tokio::test]
    async fn test_sign_in_errors_are_mapped() {
        let client = client(spawn_provider().await);

        let wrong_password = client
            .sign_in("owner@example.com", "nope")
            .await
            .unwrap_err();
        assert!(matches!(wrong_password, AppError::Unauthorized(msg) if msg == "Incorrect password"));

        let unknown = client.sign_in("ghost@example.com", "x").await.unwrap_err();
        assert!(matches!(unknown, AppError::Unauthorized(msg) if msg.contains("No account")));

        let locked = client.sign_in("locked@example.com", "x").await.unwrap_err();
        assert!(matches!(locked, AppError::Unauthorized(msg) if msg.contains("Too many")));
    }

    #[tokio::test]
    async fn test_password_reset_request() {
        let client = client(spawn_provider().await);
        client
            .send_password_reset("owner@example.com")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_service_unavailable() {
        // Port 9 (discard) is not listening on test hosts
        let client = client("http://127.0.0.1:9/v1".to_string());
        let err = client.sign_in("a@b.com", "pw").await.unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_map_provider_error() {
        assert!(matches!(
            map_provider_error("USER_DISABLED"),
            AppError::Forbidden(_)
        ));
        assert!(matches!(
            map_provider_error("INVALID_LOGIN_CREDENTIALS"),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            map_provider_error("INVALID_EMAIL"),
            AppError::Validation(_)
        ));
        assert!(matches!(
            map_provider_error("OPERATION_NOT_ALLOWED"),
            AppError::ExternalServiceError(_)
        ));
    }
}
