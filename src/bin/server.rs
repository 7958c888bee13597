use std::net::SocketAddr;

use anyhow::Context;
use axum::{Json, Router, http::StatusCode, routing::post};
use env_logger::Env;
use log::{error, info};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use mazegen::MazeError;
use mazegen::config::Params;
use mazegen::maze::Maze;

#[derive(Deserialize)]
struct GenerateRequest {
    cells: Option<usize>,
    seed: Option<u64>,
}

#[derive(Serialize)]
struct GenerateResponse {
    #[serde(flatten)]
    maze: Maze,
    timings: Vec<TimingEntry>,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl ToString) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

async fn generate_handler(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let defaults = Params::default();
    let params = Params {
        cells: req.cells.unwrap_or(defaults.cells),
        seed: req.seed.or(defaults.seed),
    };

    let result = tokio::task::spawn_blocking(move || mazegen::generate(&params))
        .await
        .map_err(|e| {
            error!("generation task failed: {e}");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "generation task failed")
        })?;

    let (maze, timings) = result.map_err(|e| match e {
        MazeError::InvalidSize { .. } => api_error(StatusCode::BAD_REQUEST, e),
        other => {
            error!("generation failed: {other}");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, other)
        }
    })?;

    let timings = timings
        .iter()
        .map(|t| TimingEntry {
            name: t.name.to_string(),
            ms: t.ms,
        })
        .collect();

    Ok(Json(GenerateResponse { maze, timings }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/generate", post(generate_handler))
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("mazegen server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
