use contracts::config::{LabelConfig, SaveConfigResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_detail};

/// Fetch the current configuration record.
pub async fn fetch_config() -> Result<LabelConfig, String> {
    let response = Request::get(&api_url("/config"))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Failed to load configuration").await);
    }

    response
        .json::<LabelConfig>()
        .await
        .map_err(|e| format!("Failed to parse configuration: {}", e))
}

/// Persist an updated record. Returns the server's authoritative copy,
/// which may differ from what was sent (the server normalizes values).
pub async fn save_config(config: &LabelConfig) -> Result<LabelConfig, String> {
    let response = Request::post(&api_url("/config"))
        .json(config)
        .map_err(|e| format!("Failed to serialize configuration: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Failed to save configuration").await);
    }

    let saved: SaveConfigResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(saved.config)
}

/// Ask the server to restore its built-in defaults. Takes no body; the
/// caller re-fetches the record afterwards.
pub async fn reset_config() -> Result<(), String> {
    let response = Request::post(&api_url("/config/reset"))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Failed to reset configuration").await);
    }

    Ok(())
}
