//! Resume generation — orchestrates the pipeline behind the generate endpoint.
//!
//! Flow: resolve job description (verbatim text, or extracted when the input
//! is a URL) → fill prompt template → single completion call → strip fences.
//! Nothing is persisted; the LaTeX goes straight back to the client.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::extractor::JobDescriptionExtractor;
use crate::generation::prompts::{LATEX_TEMPLATE, RESUME_PROMPT_TEMPLATE};
use crate::llm_client::CompletionBackend;
use crate::models::resume::ResumeData;

/// Resolves the job-description input: anything starting with `http` is
/// treated as a posting URL and extracted; everything else passes through
/// verbatim, untrimmed.
pub async fn resolve_job_description(
    input: &str,
    extractor: &JobDescriptionExtractor,
) -> Result<String, AppError> {
    if !input.starts_with("http") {
        return Ok(input.to_string());
    }

    match extractor.extract(input).await {
        Some(description) => {
            debug!(
                "Extracted job description ({} chars) from {input}",
                description.len()
            );
            Ok(description)
        }
        None => Err(AppError::ExtractionFailed),
    }
}

/// Fills the prompt template in one left-to-right pass. Payload content is
/// never rescanned, so placeholder lookalikes inside the job description or
/// the serialized resume stay literal.
pub fn build_prompt(job_description: &str, resume_data: &ResumeData) -> Result<String, AppError> {
    let resume_json = serde_json::to_string(resume_data)
        .map_err(|e| AppError::Generation(format!("Failed to serialize resume data: {e}")))?;

    Ok(fill_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("{latexTemplate}", LATEX_TEMPLATE),
            ("{resumeData}", resume_json.as_str()),
            ("{jobDescription}", job_description),
        ],
    ))
}

/// Single-pass template fill: at each step the earliest placeholder
/// occurrence in the remaining template is spliced out and its payload
/// copied in verbatim.
fn fill_template(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while !rest.is_empty() {
        let next = substitutions
            .iter()
            .filter_map(|&(key, value)| rest.find(key).map(|pos| (pos, key, value)))
            .min_by_key(|&(pos, _, _)| pos);

        match next {
            Some((pos, key, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + key.len()..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }

    out
}

/// Runs the full generation pipeline and returns the final LaTeX text.
pub async fn generate_resume(
    llm: &dyn CompletionBackend,
    extractor: &JobDescriptionExtractor,
    job_description: &str,
    resume_data: &ResumeData,
) -> Result<String, AppError> {
    let job_description = resolve_job_description(job_description, extractor).await?;

    let prompt = build_prompt(&job_description, resume_data)?;

    let completion = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    info!("Generated resume ({} chars of LaTeX)", completion.len());

    Ok(strip_latex_fences(&completion).to_string())
}

/// Strips a leading ```latex fence line and a trailing ``` fence line from
/// completion output. Each end is handled independently and interior content
/// is left byte-for-byte intact.
pub fn strip_latex_fences(text: &str) -> &str {
    let text = text.strip_prefix("```latex\n").unwrap_or(text);
    text.strip_suffix("\n```").unwrap_or(text)
}
