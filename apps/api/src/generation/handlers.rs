//! Axum route handler for the resume-generation API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::generator::generate_resume;
use crate::models::resume::ResumeData;
use crate::state::AppState;

/// Request body for resume generation. Both fields are required; a missing
/// field or a blank job description is rejected before any work happens.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeRequest {
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
}

/// POST /api/generate-resume
///
/// Generates a LaTeX resume tailored to a job description. The description
/// may be raw text or a posting URL on a supported job board. Responds with
/// the LaTeX source as plain text.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<GenerateResumeRequest>,
) -> Result<String, AppError> {
    let job_description = request
        .job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or(AppError::MissingFields)?;
    let resume_data = request.resume_data.ok_or(AppError::MissingFields)?;

    generate_resume(
        state.llm.as_ref(),
        &state.extractor,
        &job_description,
        &resume_data,
    )
    .await
}
