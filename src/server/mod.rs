use crate::config::Config;
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use submarine_parser::{ParseError, Protocol, ProtocolParser, ProtocolRelease};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub parser: Arc<ProtocolParser>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            parser: Arc::new(ProtocolParser::new(config.parser.to_parser_config())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReleaseQuery {
    pub title: String,
    pub protocol: String,
}

/// Parse failure rendered as a JSON body.
#[derive(Debug)]
pub struct ApiError(ParseError);

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ParseError::NotParsable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ParseError::UnsupportedProtocol(_) => StatusCode::NOT_IMPLEMENTED,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Create the Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(health_check))
        .route("/release", get(parse_release))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn parse_release(
    State(state): State<AppState>,
    Query(query): Query<ReleaseQuery>,
) -> Result<Json<ProtocolRelease>, ApiError> {
    let protocol: Protocol = query.protocol.parse()?;

    match state.parser.parse(&query.title, protocol) {
        Ok(release) => Ok(Json(release)),
        Err(err) => {
            tracing::debug!("Failed to parse {:?}: {}", query.title, err);
            Err(err.into())
        }
    }
}

/// Start the HTTP server
pub async fn start_server(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let app = create_router(AppState::new(&config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
