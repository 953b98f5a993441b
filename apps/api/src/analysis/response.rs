//! Parsing of raw model output into structured results.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in the model response")]
    NoJsonObject,

    #[error("model response contained invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Normalized output of the resume-vs-JD analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: i64,
}

/// Extracts the JSON object embedded in a free-form model response.
///
/// Strategy: take the substring from the first `{` to the last `}` (inclusive)
/// and decode it. This assumes the model emits at most one JSON object and
/// that no stray braces appear in surrounding prose; multiple or nested
/// objects are not disambiguated. Callers only see this function, so a
/// stricter strategy can replace it without touching them.
pub fn extract_json(raw: &str) -> Result<Value, ParseError> {
    let start = raw.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = raw.rfind('}').ok_or(ParseError::NoJsonObject)?;
    if end < start {
        return Err(ParseError::NoJsonObject);
    }
    Ok(serde_json::from_str(&raw[start..=end])?)
}

/// Shapes a decoded analysis object into an `AnalysisResult`, defaulting
/// missing or malformed keys rather than erroring on partial output.
/// The skill-info path deliberately has no equivalent: its decoded object is
/// relayed as-is, absent keys included.
pub fn normalize_analysis(value: &Value) -> AnalysisResult {
    AnalysisResult {
        matched_skills: string_list(value.get("matched_skills")),
        missing_skills: string_list(value.get("missing_skills")),
        score: value.get("score").and_then(Value::as_i64).unwrap_or(0),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_object_surrounded_by_prose() {
        let raw = r#"Sure! {"matched_skills":["Python"],"missing_skills":["Go"],"score":75} Thanks!"#;

        let value = extract_json(raw).unwrap();
        assert_eq!(
            value,
            json!({"matched_skills": ["Python"], "missing_skills": ["Go"], "score": 75})
        );
    }

    #[test]
    fn test_bare_object_parses() {
        let value = extract_json(r#"{"score": 10}"#).unwrap();
        assert_eq!(value["score"], 10);
    }

    #[test]
    fn test_no_opening_brace_is_an_error() {
        let err = extract_json("I could not produce a result.").unwrap_err();
        assert!(matches!(err, ParseError::NoJsonObject));
    }

    #[test]
    fn test_closing_brace_before_opening_is_an_error() {
        let err = extract_json("} oops {").unwrap_err();
        assert!(matches!(err, ParseError::NoJsonObject));
    }

    #[test]
    fn test_invalid_substring_is_an_error() {
        // Two objects: first-{ to last-} spans both, which is not valid JSON.
        let err = extract_json(r#"{"a": 1} and {"b": 2}"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson(_)));
    }

    #[test]
    fn test_nested_object_survives_first_to_last_span() {
        let value = extract_json(r#"note: {"outer": {"inner": 1}} done"#).unwrap();
        assert_eq!(value["outer"]["inner"], 1);
    }

    #[test]
    fn test_normalize_defaults_missing_keys() {
        let result = normalize_analysis(&json!({}));

        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_normalize_keeps_present_fields() {
        let result = normalize_analysis(&json!({
            "matched_skills": ["Python", "SQL"],
            "missing_skills": ["Go"],
            "score": 75
        }));

        assert_eq!(result.matched_skills, vec!["Python", "SQL"]);
        assert_eq!(result.missing_skills, vec!["Go"]);
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_normalize_drops_non_string_list_entries() {
        let result = normalize_analysis(&json!({
            "matched_skills": ["Python", 42, null],
            "score": "not a number"
        }));

        assert_eq!(result.matched_skills, vec!["Python"]);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_analysis_result_serializes_with_exact_keys() {
        let result = AnalysisResult {
            matched_skills: vec!["Python".to_string()],
            missing_skills: vec![],
            score: 75,
        };

        let value = serde_json::to_value(&result).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["matched_skills", "missing_skills", "score"]);
    }
}
