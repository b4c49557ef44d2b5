//! HTTP client for the PxlProof backend.
//!
//! One best-effort POST per user action: no retries, no client-side
//! timeout, no backoff.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::API_BASE_URL;
use crate::types::{ApiResponse, AppError, AppResult, Mode};

/// Upload an image to the endpoint selected by `mode`.
///
/// The file travels as a multipart form field named `file`. A 2xx status
/// yields the parsed body; a non-2xx status yields [`AppError::Api`] with
/// the server-provided message when the body carries one.
pub async fn upload_image(mode: Mode, file: &File) -> AppResult<ApiResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create form data: {:?}", e)))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

    let url = format!("{}/{}", API_BASE_URL, mode.endpoint());
    log::info!("📤 POST {} ({})", url, file.name());

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(api_error(status, &body));
    }

    response
        .json::<ApiResponse>()
        .await
        .map_err(|e| AppError::Network(format!("Failed to parse response: {}", e)))
}

/// Convert a non-2xx response into an [`AppError::Api`].
///
/// Error bodies usually carry a `message` field; fall back to a
/// status-code-derived message when they don't.
fn api_error(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiResponse>(body)
        .ok()
        .map(|r| r.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status));
    AppError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_surfaces_verbatim() {
        let err = api_error(400, r#"{"message": "bad file"}"#);
        assert_eq!(err.to_string(), "bad file");
    }

    #[test]
    fn non_json_error_body_falls_back_to_status() {
        let err = api_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn error_body_without_message_falls_back_to_status() {
        let err = api_error(500, r#"{"detail": "boom"}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn error_keeps_status_code() {
        match api_error(404, "") {
            AppError::Api { status, .. } => assert_eq!(status, 404),
            other => panic!("unexpected error variant: {:?}", other),
        }
    }
}
