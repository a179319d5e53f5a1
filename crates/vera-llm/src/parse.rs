//! Turning a chat-completion response body into a [`VerdictResult`].

use serde::Deserialize;
use vera_core::VerdictResult;

use crate::error::LlmError;

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// Remove a surrounding markdown code fence, with or without a language tag.
///
/// The info string is everything after the opening fence up to the first
/// newline. Text without a leading fence is returned trimmed and otherwise
/// untouched.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.split_once('\n') {
        Some((info, body)) if is_info_string(info) => body,
        _ => rest,
    };
    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// A fence info string is a single token such as `json` or `json-ld`, not
/// the start of the payload itself.
fn is_info_string(line: &str) -> bool {
    let line = line.trim();
    !line.starts_with(['{', '[']) && !line.contains(char::is_whitespace)
}

/// Parse the model's message content as a verdict.
///
/// # Errors
///
/// Returns [`LlmError::Parse`] if the content is not a valid verdict object.
pub fn parse_verdict(content: &str) -> Result<VerdictResult, LlmError> {
    let body = strip_code_fences(content);
    let result: VerdictResult = serde_json::from_str(body)
        .map_err(|e| LlmError::Parse(format!("invalid verdict JSON: {e}")))?;
    result
        .validate()
        .map_err(|e| LlmError::Parse(e.to_string()))?;
    Ok(result)
}

/// Extract `choices[0].message.content` from a completion body and parse it.
///
/// # Errors
///
/// Returns [`LlmError::Parse`] if the envelope is malformed, carries no
/// content, or the content is not a valid verdict.
pub fn parse_completion(body: &str) -> Result<VerdictResult, LlmError> {
    let completion: ChatCompletion = serde_json::from_str(body)
        .map_err(|e| LlmError::Parse(format!("invalid completion envelope: {e}")))?;
    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::Parse("completion has no message content".into()))?;
    parse_verdict(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vera_core::Verdict;

    const BODY: &str = r#"{"verdict":"FALSE","score":8,"explanation":"No evidence.","citations":["WHO"]}"#;

    #[test]
    fn unfenced_text_is_trimmed_only() {
        assert_eq!(strip_code_fences("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn json_fence_is_removed() {
        let fenced = format!("```json\n{BODY}\n```");
        assert_eq!(strip_code_fences(&fenced), BODY);
    }

    #[test]
    fn bare_fence_is_removed() {
        let fenced = format!("```\n{BODY}\n```\n");
        assert_eq!(strip_code_fences(&fenced), BODY);
    }

    #[test]
    fn hyphenated_language_tag_is_removed() {
        let fenced = format!("```json-ld\n{BODY}\n```");
        assert_eq!(strip_code_fences(&fenced), BODY);
        assert_eq!(parse_verdict(&fenced).unwrap().score, 8);
    }

    #[test]
    fn payload_on_the_fence_line_is_kept() {
        let fenced = format!("```{BODY}```");
        assert_eq!(strip_code_fences(&fenced), BODY);
        let multiline = "```{\"verdict\":\"TRUE\",\n\"score\":1,\"explanation\":\"x\"}\n```";
        assert_eq!(parse_verdict(multiline).unwrap().score, 1);
    }

    #[test]
    fn unterminated_fence_still_yields_body() {
        let fenced = format!("```json\n{BODY}");
        assert_eq!(strip_code_fences(&fenced), BODY);
    }

    #[test]
    fn fenced_and_plain_parse_identically() {
        let plain = parse_verdict(BODY).unwrap();
        let fenced = parse_verdict(&format!("```json\n{BODY}\n```")).unwrap();
        assert_eq!(plain, fenced);
        assert_eq!(plain.verdict, Verdict::False);
        assert_eq!(plain.citations, vec!["WHO".to_string()]);
    }

    #[test]
    fn out_of_range_score_is_parse_error() {
        let err = parse_verdict(r#"{"verdict":"TRUE","score":150,"explanation":"x"}"#).unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn prose_is_parse_error() {
        let err = parse_verdict("I think this claim is false.").unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn completion_envelope_is_unwrapped() {
        let body = serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": format!("```json\n{BODY}\n```") } }]
        })
        .to_string();
        let result = parse_completion(&body).unwrap();
        assert_eq!(result.score, 8);
    }

    #[test]
    fn completion_without_choices_is_parse_error() {
        let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, LlmError::Parse(ref m) if m.contains("no message content")));
    }
}
