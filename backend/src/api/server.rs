//! HTTP Server for the ROTTEN API.
//!
//! Implements the request/response contract the frontend speaks.
//!
//! # API Endpoints
//!
//! | Method | Path         | Description                                  |
//! |--------|--------------|----------------------------------------------|
//! | GET    | `/health`    | Health check                                 |
//! | POST   | `/userinput` | Trim an uploaded archive                     |
//! | POST   | `/`          | Same as `/userinput` (older frontends)       |
//! | GET    | `/*`         | Built frontend, when a static dir is given   |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post, MethodRouter},
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use uuid::Uuid;

use super::logs::{log_info, log_request, log_request_indent, LogLevel};
use super::types::{error_response, UserInputRequest, UserInputResponse};
use crate::archive::encode_payload;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::trim::{trim_payload, PassThroughTrimmer, Trimmer};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub trimmer: Arc<dyn Trimmer>,
}

impl AppState {
    pub fn new(config: ServerConfig, trimmer: Arc<dyn Trimmer>) -> Self {
        Self { config: Arc::new(config), trimmer }
    }

    /// State with the pass-through trimmer.
    pub fn pass_through(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(PassThroughTrimmer))
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    // CORS permissif pour le développement
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let root: MethodRouter<AppState> = match &state.config.static_dir {
        Some(dir) => post(user_input).fallback_service(ServeDir::new(dir)),
        None => get(health).post(user_input),
    };

    let mut app = Router::new()
        .route("/", root)
        .route("/health", get(health))
        .route("/userinput", post(user_input));

    if let Some(dir) = &state.config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    let body_limit = state.config.body_limit();
    app.layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}

/// Serve the router on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let static_dir = config.static_dir.clone();
    let state = AppState::pass_through(config);

    println!("🚀 ROTTEN server running on http://localhost:{}", addr.port());
    println!("   POST /userinput - Trim an archive");
    println!("   POST /          - Same, for older frontends");
    println!("   GET  /health    - Health check");
    if let Some(dir) = static_dir {
        println!("   GET  /*         - Frontend from {}", dir.display());
    }
    println!();
    log_info(format!(
        "Trimmer: {} • max archive {} bytes",
        state.trimmer.name(),
        state.config.limits.max_archive_bytes
    ));

    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "rotten",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "trim": "POST /userinput",
            "legacy": "POST /"
        }
    }))
}

fn reject(id: Uuid, err: ServerError) -> (StatusCode, Json<Value>) {
    let status = err.status_code();
    log_request(id, LogLevel::Error, format!("{} ({})", err, status));
    (status, Json(error_response(&err.to_string())))
}

/// Body that could not be read or parsed; keeps axum's status (400, 413, 415 or 422).
fn reject_body(id: Uuid, rejection: JsonRejection) -> (StatusCode, Json<Value>) {
    let status = rejection.status();
    let err = ServerError::BadRequest(rejection.body_text());
    log_request(id, LogLevel::Error, format!("{} ({})", err, status));
    (status, Json(error_response(&err.to_string())))
}

/// Trim endpoint
async fn user_input(
    State(state): State<AppState>,
    body: Result<Json<UserInputRequest>, JsonRejection>,
) -> Result<Json<UserInputResponse>, (StatusCode, Json<Value>)> {
    let id = Uuid::new_v4();
    let Json(request) = body.map_err(|rejection| reject_body(id, rejection))?;
    let file_name = request.file_name.clone();
    let declared_size = request.file_size;

    log_request(
        id,
        LogLevel::Info,
        format!("📄 NEW REQUEST: {} ({} bytes declared)", file_name, declared_size),
    );

    let query = request.query().map_err(|e| reject(id, e.into()))?;
    log_request_indent(id, LogLevel::Info, format!("Query: {}", query.describe()), 1);

    let trimmer = state.trimmer.clone();
    let limits = state.config.limits.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        trim_payload(&request.zip_file, &query, trimmer.as_ref(), &limits)
    })
    .await
    .map_err(|e| reject(id, ServerError::Internal(e.to_string())))?
    .map_err(|e| reject(id, e.into()))?;

    if outcome.input_bytes != declared_size {
        log_request_indent(
            id,
            LogLevel::Warning,
            format!(
                "Declared size {} differs from decoded size {}",
                declared_size, outcome.input_bytes
            ),
            1,
        );
    }

    log_request(
        id,
        LogLevel::Success,
        format!(
            "{}: kept {} file(s), dropped {}, {} bytes out",
            file_name,
            outcome.count(),
            outcome.dropped,
            outcome.archive.len()
        ),
    );

    Ok(Json(UserInputResponse {
        output_file: encode_payload(&outcome.archive),
        count: outcome.count(),
    }))
}
