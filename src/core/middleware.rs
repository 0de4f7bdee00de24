use crate::core::error::AppError;
use crate::features::auth::AdminAuthenticator;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// True when an `Authorization: Basic ...` header carries exactly `credentials`
fn basic_credentials_match(auth_header: Option<&str>, credentials: &str) -> bool {
    auth_header
        .and_then(|h| h.strip_prefix("Basic "))
        .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
        .and_then(|decoded| String::from_utf8(decoded).ok())
        .is_some_and(|creds| creds == credentials)
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if basic_credentials_match(auth_header, &credentials) {
                return Ok(next.run(req).await);
            }

            Err((
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
                "Unauthorized",
            )
                .into_response())
        })
    }
}

/// Token of an `Authorization: Bearer <token>` header
fn bearer_token(auth_header: &str) -> Result<&str, AppError> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))
}

/// Rejects requests without an admin bearer token and attaches the
/// [`AuthenticatedAdmin`](crate::features::auth::model::AuthenticatedAdmin)
/// to the request for handlers to extract
pub async fn admin_auth_middleware(
    State(authenticator): State<Arc<AdminAuthenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = bearer_token(auth_header)?;
    let admin = authenticator.authenticate(token).await?;

    req.extensions_mut().insert(admin);
    Ok(next.run(req).await)
}

/// Fallback for every route while platform credentials are missing
pub async fn platform_unavailable(State(reason): State<Arc<String>>) -> AppError {
    AppError::ServiceUnavailable(format!(
        "The catalog is not configured: {}",
        reason.as_str()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use axum_test::TestServer;
    use serde_json::Value;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(assert_ok!(bearer_token("Bearer abc.def")), "abc.def");
        assert_err!(bearer_token("Basic abc"));
        assert_err!(bearer_token("Bearer "));
        assert_err!(bearer_token("bearer abc"));
    }

    #[test]
    fn test_basic_credentials_match() {
        let header = format!("Basic {}", BASE64_STANDARD.encode("docs:secret"));
        assert!(basic_credentials_match(Some(header.as_str()), "docs:secret"));
        assert!(!basic_credentials_match(Some(header.as_str()), "docs:other"));
        assert!(!basic_credentials_match(Some("Basic !!!"), "docs:secret"));
        assert!(!basic_credentials_match(None, "docs:secret"));
    }

    #[test]
    fn test_request_ids_are_generated() {
        let request = axum::http::Request::new(());
        let id = MakeRequestUuid.make_request_id(&request);
        assert!(id.is_some());
    }

    #[tokio::test]
    async fn test_swagger_basic_auth_challenge() {
        let credentials = Arc::new("docs:secret".to_string());
        let router = Router::new()
            .route("/docs", get(|| async { "docs" }))
            .layer(axum::middleware::from_fn(basic_auth_middleware(credentials)));
        let server = TestServer::new(router).unwrap();

        let response = server.get("/docs").await;
        response.assert_status_unauthorized();
        assert_eq!(
            response.header(header::WWW_AUTHENTICATE),
            "Basic realm=\"Swagger UI\""
        );

        let header_value = format!("Basic {}", BASE64_STANDARD.encode("docs:secret"));
        server
            .get("/docs")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&header_value).unwrap(),
            )
            .await
            .assert_status_ok();
    }

    fn admin_router() -> Router {
        use crate::features::auth::{JwksClient, JwtValidator};
        use crate::features::users::UserService;
        use crate::shared::test_helpers::memory_repository;
        use std::time::Duration;

        let validator = Arc::new(JwtValidator::new(
            Arc::new(JwksClient::new(
                "http://127.0.0.1:9/unreachable",
                Duration::from_secs(60),
            )),
            "issuer".to_string(),
            "audience".to_string(),
            Duration::from_secs(0),
        ));
        let authenticator = Arc::new(AdminAuthenticator::new(
            validator,
            Arc::new(UserService::new(memory_repository())),
        ));

        Router::new()
            .route("/api/admin/ping", get(|| async { "pong" }))
            .route_layer(axum::middleware::from_fn_with_state(
                authenticator,
                admin_auth_middleware,
            ))
    }

    #[tokio::test]
    async fn test_admin_routes_reject_missing_or_malformed_tokens() {
        use axum::body::Body;
        use tower::ServiceExt;

        let missing = admin_router()
            .oneshot(
                axum::http::Request::get("/api/admin/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

        let malformed = admin_router()
            .oneshot(
                axum::http::Request::get("/api/admin/ping")
                    .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(malformed.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unconfigured_platform_answers_503_everywhere() {
        let router = Router::new()
            .fallback(platform_unavailable)
            .with_state(Arc::new("DATABASE_URL is not set".to_string()));
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/products").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("DATABASE_URL is not set"));
    }
}
