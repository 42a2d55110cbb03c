//! Axum route handlers for the analysis endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::schema::analysis_response_schema;
use crate::errors::AppError;
use crate::state::AppState;

/// OPTIONS /api/analyze
///
/// Pre-flight handshake: browsers probe here before a cross-origin POST.
/// Always 200 with an empty body, never reaching validation or the provider.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

/// POST /api/analyze
///
/// The passthrough core: validate the resume/JD pair, build the instruction
/// prompt, invoke the schema-constrained model call, validate the shape of
/// the completion, and return the parsed JSON unmodified.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::Validation(format!("unreadable request body: {e}")))?;

    if request.resume_text.trim().is_empty() || request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeText and jobDescription must both be non-empty".to_string(),
        ));
    }

    let prompt = build_analysis_prompt(&request.job_description, &request.resume_text);
    let completion = state
        .analyzer
        .generate(&prompt, &analysis_response_schema())
        .await?;

    // Empty and malformed completions are both terminal, but logged apart.
    if completion.trim().is_empty() {
        return Err(AppError::EmptyCompletion);
    }

    let value: Value = serde_json::from_str(&completion)
        .map_err(|e| AppError::MalformedCompletion(format!("invalid JSON: {e}")))?;

    // Shape check only. The raw parsed value is what goes back out, not a
    // re-serialization of the typed struct, so extra fields survive and
    // scores pass through unclamped.
    AnalysisResult::deserialize(&value)
        .map_err(|e| AppError::MalformedCompletion(format!("missing or mistyped field: {e}")))?;

    Ok(Json(value))
}
