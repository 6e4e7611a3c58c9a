//! Helpers for frontend-backend communication.

use gloo_net::http::Response;
use serde::Deserialize;

/// Failure body the server attaches to any non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Get the base URL for API requests.
///
/// The backend serves this app itself, so requests go back to the page
/// origin. Returns an empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path starting with "/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Pull the human-readable `detail` message out of a failed response.
///
/// Falls back to `fallback` when the body is missing, not JSON, or has
/// no `detail` field, so a failure always produces some message.
pub async fn error_detail(response: Response, fallback: &str) -> String {
    match response.json::<ErrorBody>().await {
        Ok(body) => body.detail.unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}
