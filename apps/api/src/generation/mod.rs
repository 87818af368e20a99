// Resume generation engine: request validation, job-description resolution,
// prompt assembly, one completion call.
// All LLM traffic goes through llm_client — no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
