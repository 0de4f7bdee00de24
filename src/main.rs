mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{Config, PlatformConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::auth::clients::IdentityToolkitClient;
use crate::features::auth::routes as auth_routes;
use crate::features::auth::{AdminAuthenticator, AuthService, JwksClient, JwtValidator};
use crate::features::categories::{routes as categories_routes, CategoryService, CategoryViewModel};
use crate::features::clients::{routes as clients_routes, ClientService, ClientViewModel};
use crate::features::contacts::{routes as contacts_routes, ContactService, ContactViewModel};
use crate::features::content::{routes as content_routes, ContentService, ContentViewModel};
use crate::features::dashboard::{
    routes as dashboard_routes, DashboardService, DashboardViewModel,
};
use crate::features::media::{routes as media_routes, MediaService};
use crate::features::products::{routes as products_routes, ProductService, ProductViewModel};
use crate::features::reviews::{routes as reviews_routes, ReviewService, ReviewViewModel};
use crate::features::users::UserService;
use crate::modules::document_store::{
    DocumentStore, InMemoryDocumentStore, PgDocumentStore, Repository,
};
use crate::modules::query_cache::QueryClient;
use crate::modules::storage::MinIOClient;
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Missing platform credentials degrade the API to 503 instead of aborting
    let api_routes = match PlatformConfig::from_env() {
        Ok(platform) => catalog_routes(&config, platform).await?,
        Err(reason) => {
            tracing::warn!("Catalog disabled: {}", reason);
            // /health and Swagger are merged separately and stay reachable
            Router::new()
                .fallback(middleware::platform_unavailable)
                .with_state(Arc::new(reason))
        }
    };

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(swagger)
        .merge(health_route)
        .merge(api_routes)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Connect the platform clients and mount every catalog route
async fn catalog_routes(config: &Config, platform: PlatformConfig) -> anyhow::Result<Router> {
    let store: Arc<dyn DocumentStore> = if platform.database.is_in_memory() {
        tracing::warn!("Using the in-memory document store; data is lost on restart");
        Arc::new(InMemoryDocumentStore::new())
    } else {
        let store = PgDocumentStore::connect(&platform.database)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to the document store: {}", e))?;
        tracing::info!("Document store connection pool created");

        tracing::info!("Running document store migrations...");
        store
            .migrate()
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        tracing::info!("Document store migrations completed successfully");
        Arc::new(store)
    };
    let repository = Repository::new(store);

    let cache = QueryClient::new(config.cache.stale_time);
    tracing::info!(
        "Query cache initialized (stale time: {:?})",
        config.cache.stale_time
    );

    // Auth: token verification plus admin directory lookup
    let jwks_client = Arc::new(JwksClient::new(
        &platform.auth.jwks_url,
        platform.auth.jwks_cache_ttl,
    ));
    let jwt_validator = Arc::new(JwtValidator::new(
        jwks_client,
        platform.auth.issuer.clone(),
        platform.auth.audience.clone(),
        platform.auth.jwt_leeway,
    ));
    let user_service = Arc::new(UserService::new(repository.clone()));
    let admin_authenticator = Arc::new(AdminAuthenticator::new(
        jwt_validator,
        Arc::clone(&user_service),
    ));
    let identity_client = Arc::new(IdentityToolkitClient::new(platform.identity.clone()));
    let auth_service = Arc::new(AuthService::new(identity_client, user_service));
    tracing::info!("Auth services initialized");

    let minio_client = Arc::new(
        MinIOClient::new(platform.minio.clone())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to initialize MinIO client: {}", e))?,
    );
    let media_service = Arc::new(MediaService::new(minio_client));
    tracing::info!("Media service initialized");

    let categories = Arc::new(CategoryViewModel::new(
        Arc::new(CategoryService::new(repository.clone())),
        cache.clone(),
    ));
    let products = Arc::new(ProductViewModel::new(
        Arc::new(ProductService::new(repository.clone())),
        cache.clone(),
    ));
    let reviews = Arc::new(ReviewViewModel::new(
        Arc::new(ReviewService::new(repository.clone())),
        cache.clone(),
    ));
    let contacts = Arc::new(ContactViewModel::new(
        Arc::new(ContactService::new(repository.clone())),
        cache.clone(),
    ));
    let content = Arc::new(ContentViewModel::new(
        Arc::new(ContentService::new(repository.clone())),
        cache.clone(),
    ));
    let clients = Arc::new(ClientViewModel::new(
        Arc::new(ClientService::new(repository.clone())),
        cache.clone(),
    ));
    let dashboard = Arc::new(DashboardViewModel::new(
        Arc::new(DashboardService::new(repository)),
        cache,
    ));
    tracing::info!("Catalog services initialized");

    // Admin routes (require an admin bearer token)
    let admin_routes = Router::new()
        .merge(categories_routes::admin_routes(Arc::clone(&categories)))
        .merge(products_routes::admin_routes(Arc::clone(&products)))
        .merge(reviews_routes::admin_routes(Arc::clone(&reviews)))
        .merge(contacts_routes::admin_routes(Arc::clone(&contacts)))
        .merge(content_routes::admin_routes(Arc::clone(&content)))
        .merge(clients_routes::admin_routes(Arc::clone(&clients)))
        .merge(dashboard_routes::admin_routes(dashboard))
        .merge(media_routes::admin_routes(media_service));

    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&auth_service)))
        .nest("/api/admin", admin_routes)
        .route_layer(axum::middleware::from_fn_with_state(
            admin_authenticator,
            middleware::admin_auth_middleware,
        ));

    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(categories_routes::public_routes(categories))
        .merge(products_routes::public_routes(products))
        .merge(reviews_routes::public_routes(reviews))
        .merge(contacts_routes::public_routes(contacts))
        .merge(content_routes::public_routes(content))
        .merge(clients_routes::public_routes(clients));

    Ok(Router::new().merge(protected_routes).merge(public_routes))
}
