use contracts::export::GenerateRequest;
use contracts::upload::{UploadSummary, UploadedFiles};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_detail};

/// Upload a spreadsheet as multipart form data under the `file` field.
pub async fn upload_workbook(file: web_sys::File) -> Result<UploadSummary, String> {
    let form = web_sys::FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob("file", &file)
        .map_err(|_| "Failed to attach file".to_string())?;

    let response = Request::post(&api_url("/upload"))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Upload failed").await);
    }

    response
        .json::<UploadSummary>()
        .await
        .map_err(|e| format!("Failed to parse upload summary: {}", e))
}

/// Files the server is still holding from earlier uploads.
pub async fn list_uploads() -> Result<Vec<String>, String> {
    let response = Request::get(&api_url("/files"))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Failed to list uploaded files").await);
    }

    let listing: UploadedFiles = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse file listing: {}", e))?;

    Ok(listing.files)
}

/// Request the filtered spreadsheet; the success body is the file.
pub async fn export_filtered(request: &GenerateRequest) -> Result<Vec<u8>, String> {
    post_for_bytes("/export-filtered", request, "Export failed").await
}

/// Request the label PDF; the success body is the file.
pub async fn generate_labels(request: &GenerateRequest) -> Result<Vec<u8>, String> {
    post_for_bytes("/generate", request, "Generation failed").await
}

async fn post_for_bytes(
    path: &str,
    request: &GenerateRequest,
    fallback: &str,
) -> Result<Vec<u8>, String> {
    let response = Request::post(&api_url(path))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, fallback).await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read file body: {}", e))
}
