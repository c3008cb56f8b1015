use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use topboard_core::ScoreEntry;
use tracing::info;

use crate::board::Leaderboard;
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;
use crate::validation::SubmitScore;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let board = state.board.lock().await;
    Json(json!({
        "name": "topboard-server",
        "version": env!("CARGO_PKG_VERSION"),
        "capacity": board.capacity(),
        "count": board.len(),
    }))
}

/// Current standings, highest score first. Never touches the snapshot.
pub async fn list_scores(State(state): State<AppState>) -> Json<Vec<ScoreEntry>> {
    Json(state.board.lock().await.standings())
}

pub async fn submit_score(
    State(state): State<AppState>,
    payload: Result<Json<SubmitScore>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Vec<ScoreEntry>>)> {
    let Json(request) = payload.map_err(|rejection| ServerError::invalid(rejection.body_text()))?;
    let entry = request.validate()?;
    info!(name = %entry.name, score = entry.score, "score submitted");

    let standings = state.mutate(move |board| board.submit(entry)).await?;
    Ok((StatusCode::CREATED, Json(standings)))
}

pub async fn clear_scores(State(state): State<AppState>) -> ServerResult<StatusCode> {
    state.mutate(Leaderboard::clear).await?;
    Ok(StatusCode::NO_CONTENT)
}
