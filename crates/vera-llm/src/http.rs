//! Status-code classification for chat-completion responses.
//!
//! Maps 429 to [`LlmError::RateLimited`] (with `Retry-After` parsing) and any
//! other non-success status to [`LlmError::Api`], so the transport only deals
//! with request construction.

use crate::error::LlmError;

/// Used when a 429 carries no usable `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Error bodies longer than this are cut before being stored in the error.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Return the response unchanged on success, or the matching [`LlmError`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = parse_retry_after(&resp);
        tracing::debug!(retry_after_secs, "chat endpoint rate limited");
        return Err(LlmError::RateLimited { retry_after_secs });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            status: status.as_u16(),
            message: truncate_body(&body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as whole seconds.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let mut cut: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    cut.push_str("...");
    cut
}
