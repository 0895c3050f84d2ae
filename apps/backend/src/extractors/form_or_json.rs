use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

const MAX_BODY_BYTES: usize = 16 * 1024;

/// Body extractor accepting either `application/json` or URL-encoded forms.
///
/// Anything that is not declared JSON is read as a form, which is what a
/// plain HTML `<form>` posts. An empty body yields `T::default()`. Parse
/// failures become a 400 with a sanitized message.
#[derive(Debug)]
pub struct FormOrJson<T>(pub T);

impl<T> FormOrJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for FormOrJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn is_json(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
}

fn parse_body<T>(content_type: &str, body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    if is_json(content_type) {
        return serde_json::from_slice::<T>(body).map_err(|e| {
            debug!(error = %Redacted(&e.to_string()), "JSON parsing failed");
            AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e))
        });
    }

    let text = std::str::from_utf8(body).map_err(|_| {
        AppError::bad_request(ErrorCode::BadRequest, "Form body is not valid UTF-8")
    })?;
    web::Query::<T>::from_query(text)
        .map(web::Query::into_inner)
        .map_err(|e| {
            debug!(error = %Redacted(&e.to_string()), "Form parsing failed");
            AppError::bad_request(ErrorCode::BadRequest, "Invalid form body")
        })
}

impl<T> FromRequest for FormOrJson<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Copy the header out before the future so nothing borrows `req` across awaits.
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(
                        trace_id = %trace_ctx::trace_id(),
                        error = %e,
                        "Failed to read request body chunk"
                    );
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Request body too large",
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            parse_body::<T>(&content_type, &body).map(FormOrJson)
        })
    }
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: wrong types for one or more fields".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
