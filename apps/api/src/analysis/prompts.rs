// Prompt constants for the analysis endpoint.

/// Analysis prompt template. Replace `{job_description}` and `{resume_text}`
/// before sending. The schema constraint travels separately in the
/// generation config, so the prompt carries role, task, and rules only.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"System Context: You are a world-class Recruitment AI specializing in ATS (Applicant Tracking Systems) and professional career coaching.

Task: Compare the provided Resume against the Job Description. Be extremely precise, objective, and constructive.

Job Description Content:
{job_description}

Resume Content:
{resume_text}

Rules:
1. Focus on semantic relevance, not just exact keyword matches.
2. Identify specific skill gaps that would prevent a candidate from passing an initial screening.
3. Suggest specific action-oriented phrasing for ATS optimization."#;

/// Builds the full instruction block for one analysis call, embedding both
/// texts verbatim.
pub fn build_analysis_prompt(job_description: &str, resume_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
}
