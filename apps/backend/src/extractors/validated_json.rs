use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpRequest};
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// JSON body extractor that reports failures as problem+json.
///
/// The body is read through actix's `Bytes` extractor, so the app's
/// `PayloadConfig` limit applies. Parse failures become 400 BAD_REQUEST with
/// a sanitized message.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body_fut = Bytes::from_request(req, payload);

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let body = body_fut.await.map_err(|e| {
                warn!(trace_id = %trace_id, error = %e, "Failed to read request body");
                AppError::bad_request(
                    ErrorCode::BadRequest,
                    "Request body is unreadable or too large",
                )
            })?;

            let parsed = parse_body::<T>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    category = ?e.classify(),
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e))
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, JsonError> {
    serde_json::from_slice::<T>(body)
}

/// Sanitized description of a JSON failure; never echoes body content.
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            format!("Invalid JSON at line {}", error.line())
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: wrong types for one or more fields".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::domain::ScoreSheet;

    #[derive(Debug, Deserialize)]
    struct NewTour {
        #[allow(dead_code)]
        name: String,
    }

    #[test]
    fn syntax_error_reports_line_only() {
        let err = parse_body::<NewTour>(br#"{"name": }"#).unwrap_err();
        let detail = classify_json_error(&err);
        assert!(detail.starts_with("Invalid JSON at line"));
    }

    #[test]
    fn truncated_body_is_eof() {
        let err = parse_body::<NewTour>(br#"{"name": "Summer"#).unwrap_err();
        assert!(classify_json_error(&err).contains("unexpected end of input"));
    }

    #[test]
    fn wrong_type_does_not_echo_value() {
        let err = parse_body::<NewTour>(br#"{"name": 12345}"#).unwrap_err();
        let detail = classify_json_error(&err);
        assert!(detail.contains("wrong types"));
        assert!(!detail.contains("12345"));
    }

    #[test]
    fn score_sheet_body_with_garbage_values_still_parses() {
        let sheet = parse_body::<ScoreSheet>(
            br#"{"entries": {"3": {"raw_score": "abc", "c2": null, "ctp": "on"}}}"#,
        )
        .unwrap();
        let entry = sheet.entry(3);
        assert_eq!(entry.raw_score, 0);
        assert_eq!(entry.c2, 0);
        assert!(entry.ctp);
        assert!(!entry.ace);
    }
}
