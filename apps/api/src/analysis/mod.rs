// Resume-versus-job-description analysis: the passthrough core.
// Implements: request validation, prompt construction, schema-constrained
// model invocation, response validation. All LLM calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod schema;
