//! The output schema declared to Gemini on every analysis call, constraining
//! the completion to JSON matching `AnalysisResult` instead of free prose.

use serde_json::{json, Value};

/// Builds the `responseSchema` for the analysis call. Field names, types,
/// nesting, and required sets mirror `AnalysisResult` exactly; the
/// `propertyOrdering` entries pin the emission order of each object.
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "matchScore": {
                "type": "NUMBER",
                "description": "Overall match percentage (0-100)"
            },
            "skillsMatch": {
                "type": "OBJECT",
                "properties": {
                    "matched": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": { "type": "STRING" },
                                "category": {
                                    "type": "STRING",
                                    "description": "Technical, Soft, Tool, or Certification"
                                }
                            },
                            "propertyOrdering": ["name", "category"]
                        }
                    },
                    "missing": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": { "type": "STRING" },
                                "category": { "type": "STRING" }
                            },
                            "propertyOrdering": ["name", "category"]
                        }
                    }
                },
                "propertyOrdering": ["matched", "missing"]
            },
            "experienceAlignment": {
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "NUMBER" },
                    "feedback": { "type": "STRING" }
                },
                "propertyOrdering": ["score", "feedback"]
            },
            "keywordRelevance": {
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "NUMBER" },
                    "topKeywords": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    }
                },
                "propertyOrdering": ["score", "topKeywords"]
            },
            "suggestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "atsOptimization": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": [
            "matchScore",
            "skillsMatch",
            "experienceAlignment",
            "keywordRelevance",
            "suggestions",
            "atsOptimization"
        ],
        "propertyOrdering": [
            "matchScore",
            "skillsMatch",
            "experienceAlignment",
            "keywordRelevance",
            "suggestions",
            "atsOptimization"
        ]
    })
}
