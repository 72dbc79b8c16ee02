//! Axum route handlers for the humanization API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::humanize::pipeline::humanize_paragraph;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Missing field is treated as empty so validation returns 400 rather
    /// than a deserialization rejection.
    #[serde(default)]
    pub paragraph: String,
    #[serde(default)]
    pub human_seed: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub humanized_text: String,
}

/// POST /api/generate
///
/// Humanizes a paragraph: chunked model rewrite plus local post-processing.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.paragraph.trim().is_empty() {
        return Err(AppError::Validation("Paragraph is required".to_string()));
    }

    let humanized_text =
        humanize_paragraph(&state.llm, &request.paragraph, &request.human_seed).await?;

    Ok(Json(GenerateResponse { humanized_text }))
}
