#![allow(dead_code)]

//! Caller-side contract for the analysis endpoint.
//!
//! The interactive surface talks to the service exclusively through
//! `submit_analysis`: POST the pair, surface the body's `error` message on
//! any non-success status, fall back to a generic message when the body
//! itself is unparsable.

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::errors::MISSING_CONTENT;

/// Shown when the server is unreachable or its error body is unparsable.
pub const FALLBACK_ERROR: &str = "Failed to connect to analysis server";

/// Submits a resume / job-description pair to a running analysis endpoint
/// and returns the structured report.
pub async fn submit_analysis(
    base_url: &str,
    resume_text: &str,
    job_description: &str,
) -> Result<AnalysisResult> {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return Err(anyhow!(MISSING_CONTENT));
    }

    let response = reqwest::Client::new()
        .post(format!("{base_url}/api/analyze"))
        .json(&AnalysisRequest {
            resume_text: resume_text.to_string(),
            job_description: job_description.to_string(),
        })
        .send()
        .await
        .map_err(|_| anyhow!(FALLBACK_ERROR))?;

    if !response.status().is_success() {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("error")?.as_str().map(str::to_string))
            .unwrap_or_else(|| FALLBACK_ERROR.to_string());
        return Err(anyhow!(message));
    }

    Ok(response.json::<AnalysisResult>().await?)
}
