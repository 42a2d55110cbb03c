//! Shared test doubles and fixtures for endpoint tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value};

use crate::llm_client::{AnalysisProvider, LlmError};
use crate::routes::build_router;
use crate::state::AppState;

enum Script {
    Completion(String),
    Failure,
}

/// Scripted stand-in for the Gemini client: returns a fixed completion (or
/// fails), counts calls, and records the last prompt and schema it was given.
pub struct ScriptedProvider {
    script: Script,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_schema: Mutex<Option<Value>>,
}

impl ScriptedProvider {
    pub fn completion(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            script: Script::Completion(text.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_schema: Mutex::new(None),
        })
    }

    pub fn failure() -> Arc<Self> {
        Arc::new(Self {
            script: Script::Failure,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_schema: Mutex::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_schema(&self) -> Option<Value> {
        self.last_schema.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisProvider for ScriptedProvider {
    async fn generate(&self, prompt: &str, response_schema: &Value) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_schema.lock().unwrap() = Some(response_schema.clone());
        match &self.script {
            Script::Completion(text) => Ok(text.clone()),
            Script::Failure => Err(LlmError::Api {
                status: 503,
                message: "scripted provider failure".to_string(),
            }),
        }
    }
}

/// Builds a router wired to a scripted provider, the way `main` wires the
/// real Gemini client.
pub fn test_app(provider: Arc<ScriptedProvider>) -> Router {
    build_router(AppState { analyzer: provider })
}

/// A complete, contract-conforming analysis result.
pub fn sample_result() -> Value {
    json!({
        "matchScore": 78,
        "skillsMatch": {
            "matched": [
                {"name": "Python", "category": "Technical"},
                {"name": "AWS", "category": "Tool"}
            ],
            "missing": [
                {"name": "Kubernetes", "category": "Tool"}
            ]
        },
        "experienceAlignment": {
            "score": 72,
            "feedback": "Strong backend alignment; limited evidence of production ownership."
        },
        "keywordRelevance": {
            "score": 85,
            "topKeywords": ["Python", "AWS", "microservices"]
        },
        "suggestions": [
            "Quantify the impact of the migration project.",
            "Mirror the posting's 'Senior Python Engineer' title in the summary."
        ],
        "atsOptimization": [
            "Spell out 'Amazon Web Services (AWS)' on first use.",
            "Move the skills section above work history."
        ]
    })
}
