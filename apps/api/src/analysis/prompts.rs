// All LLM prompt constants for the analysis module.
// Templates are fixed strings with `{placeholder}` substitution; the embedded
// resume/JD text is passed through verbatim (no sanitization).

/// Analysis prompt template. Replace `{jd_text}` and `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the provided resume against the job description. Your task is to return ONLY a single, minified JSON object with three keys: "matched_skills", "missing_skills", and "score".
- "matched_skills": A list of skills present in BOTH the resume and the job description.
- "missing_skills": A list of skills required by the job description but MISSING from the resume.
- "score": An integer match score from 0 to 100.
Do not include any other text, explanations, or markdown formatting like ```json.

JOB DESCRIPTION:
{jd_text}
---
RESUME:
{resume_text}
---
"#;

/// Skill-info prompt template. Replace `{skill}` before sending.
pub const SKILL_INFO_PROMPT_TEMPLATE: &str = r#"Provide a concise, one-sentence description for the technical skill "{skill}".
Then, provide one high-quality, free tutorial link for it (preferably from YouTube, official documentation, or a well-known educational site).
Return ONLY a single minified JSON object with this exact structure:
{
  "description": "<one-sentence description>",
  "link": "<url>"
}
Do not include any other text or markdown.
"#;

/// Builds the resume-vs-JD analysis prompt.
pub fn analysis_prompt(resume_text: &str, jd_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text)
}

/// Builds the prompt requesting a description and tutorial link for one skill.
pub fn skill_info_prompt(skill: &str) -> String {
    SKILL_INFO_PROMPT_TEMPLATE.replace("{skill}", skill)
}
