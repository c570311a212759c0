// Resume analysis: AI path with a deterministic keyword fallback.
// Remote calls go through llm_client; everything else here is pure.

pub mod detector;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod prompts;
pub mod remote;
pub mod taxonomy;
pub mod validation;
