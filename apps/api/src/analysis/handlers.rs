//! Axum route handlers for the analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;

use crate::analysis::extract::pdf_text;
use crate::analysis::prompts::{analysis_prompt, skill_info_prompt};
use crate::analysis::response::{extract_json, normalize_analysis, AnalysisResult};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::state::AppState;

const ANALYSIS_FAILED: &str = "An error occurred while processing the analysis.";
const SKILL_INFO_FAILED: &str = "Failed to get skill information from AI.";

#[derive(Debug, Deserialize)]
pub struct SkillInfoRequest {
    // Optional at the serde level so `{}` reaches the handler and gets the
    // specific 400 instead of a deserialization rejection.
    #[serde(default)]
    pub skill: Option<String>,
}

/// One side of the analysis input (resume or job description), collected from
/// the multipart form before resolution.
#[derive(Debug, Default)]
struct SideInput {
    pdf: Option<Bytes>,
    text: Option<String>,
}

impl SideInput {
    /// Resolves the collected parts to usable text. A PDF upload wins over
    /// the text field when both are present.
    fn resolve(self, missing_msg: &str, unreadable_msg: &str) -> Result<String, AppError> {
        let text = match (self.pdf, self.text) {
            (Some(bytes), _) => pdf_text(&bytes),
            (None, Some(text)) => Some(text),
            (None, None) => return Err(AppError::Validation(missing_msg.to_string())),
        };

        match text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(AppError::Validation(unreadable_msg.to_string())),
        }
    }
}

fn require_llm(state: &AppState) -> Result<&LlmClient, AppError> {
    state.llm.as_ref().ok_or(AppError::Uninitialized)
}

/// POST /api/analyze
///
/// Multipart form: `resume_pdf` or `resume_text`, and `jd_pdf` or `jd_text`.
/// Returns the normalized skill-match result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    // Checked before touching the body, so a missing credential fails
    // uniformly without doing any extraction work.
    let llm = require_llm(&state)?;

    let mut resume = SideInput::default();
    let mut jd = SideInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume_pdf") => {
                resume.pdf = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read resume_pdf: {e}"))
                })?);
            }
            Some("resume_text") => {
                resume.text = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read resume_text: {e}"))
                })?);
            }
            Some("jd_pdf") => {
                jd.pdf = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Could not read jd_pdf: {e}")))?,
                );
            }
            Some("jd_text") => {
                jd.text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Could not read jd_text: {e}")))?,
                );
            }
            _ => {} // ignore unknown fields
        }
    }

    let resume_text = resume.resolve(
        "Resume (either PDF or text) is required.",
        "Could not get text from the resume input.",
    )?;
    let jd_text = jd.resolve(
        "Job description (either PDF or text) is required.",
        "Could not get text from the job description input.",
    )?;

    let prompt = analysis_prompt(&resume_text, &jd_text);
    let raw = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::llm(ANALYSIS_FAILED, e))?;
    let value = extract_json(&raw).map_err(|e| AppError::llm(ANALYSIS_FAILED, e))?;

    Ok(Json(normalize_analysis(&value)))
}

/// POST /api/skill_info
///
/// JSON body `{"skill": "..."}`. Relays the model's decoded object as-is:
/// unlike `/api/analyze`, missing keys are not defaulted.
pub async fn handle_skill_info(
    State(state): State<AppState>,
    Json(request): Json<SkillInfoRequest>,
) -> Result<Json<Value>, AppError> {
    let llm = require_llm(&state)?;

    let skill = match request.skill {
        Some(ref skill) if !skill.trim().is_empty() => skill.as_str(),
        _ => return Err(AppError::Validation("Skill name is required.".to_string())),
    };

    let prompt = skill_info_prompt(skill);
    let raw = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::llm(SKILL_INFO_FAILED, e))?;
    let value = extract_json(&raw).map_err(|e| AppError::llm(SKILL_INFO_FAILED, e))?;

    Ok(Json(value))
}
