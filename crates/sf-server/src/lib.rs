//! Web server module
//!
//! Provides the HTTP surface for sketchforge using Axum: the landing page,
//! the `/generate` endpoint, a health probe, and the OpenAPI document.

pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod types;

use std::net::SocketAddr;

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use self::state::AppState;

/// Web server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

/// Start the web server and serve until the process exits.
pub async fn start_server(config: ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_app(state, config.enable_cors);

    let host_ip = config.host.parse::<std::net::IpAddr>()?;
    let addr = SocketAddr::from((host_ip, config.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Web server listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Build the Axum app with all routes and middleware
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/openapi.json", get(serve_openapi_json))
        .route("/generate", post(routes::generate))
        .with_state(state);

    router = router.layer(axum::middleware::from_fn(logging_middleware));

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);

        router = router.layer(cors);
    }

    router
}

/// Landing page
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html")
    )
)]
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Server is healthy")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Serve the OpenAPI specification as JSON
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "system",
    responses(
        (status = 200, description = "OpenAPI specification in JSON format", content_type = "application/json"),
        (status = 500, description = "Failed to generate specification")
    )
)]
pub async fn serve_openapi_json() -> impl IntoResponse {
    match openapi::get_openapi_json() {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to generate OpenAPI spec: {}", e),
        )
            .into_response(),
    }
}

/// Logging middleware to log all requests
async fn logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    let status = response.status();

    if status.is_success() {
        info!("{} {} - {} ({:?})", method, uri, status, elapsed);
    } else {
        error!("{} {} - {} ({:?})", method, uri, status, elapsed);
    }

    response
}
