//! Boundary types for the analysis endpoint. Wire format is camelCase.

use serde::{Deserialize, Serialize};

/// The two free-text inputs to one analysis. Both must be non-empty after
/// trimming whitespace; absent fields deserialize to empty strings and fail
/// validation before any provider call is made.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// Skill taxonomy the model is constrained to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    Tool,
    Certification,
}

/// A single skill extracted by the model. The endpoint never constructs
/// these itself, only validates their shape in the response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsMatch {
    pub matched: Vec<Skill>,
    pub missing: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceAlignment {
    pub score: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRelevance {
    pub score: f64,
    pub top_keywords: Vec<String>,
}

/// The full compatibility report produced by the model.
///
/// All six fields are required: a completion missing any of them fails the
/// whole request, no partial results. Scores are model-trusted; the intended
/// range is 0-100 but values are passed through unclamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub match_score: f64,
    pub skills_match: SkillsMatch,
    pub experience_alignment: ExperienceAlignment,
    pub keyword_relevance: KeywordRelevance,
    pub suggestions: Vec<String>,
    pub ats_optimization: Vec<String>,
}
