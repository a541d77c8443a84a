use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
    pub max_sessions: usize,
    pub session_timeout_minutes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
            max_sessions: 1000,
            session_timeout_minutes: 60,
        }
    }
}

/// Builds the application router for `config`
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::with_limits(config.max_sessions, config.session_timeout_minutes);

    let app = Router::new()
        // API routes
        .merge(create_router())
        // Static file serving for the web frontend
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server with default configuration on `port`
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Floyd Paths web server starting on http://{}", addr);
    info!("Serving static files from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
