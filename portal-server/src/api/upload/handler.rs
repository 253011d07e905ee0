//! PDF upload API handlers

use axum::{Json, extract::State};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult};
use shared::notify::{StorageHealthResponse, UploadPdfRequest, UploadPdfResponse};

/// POST /api/upload-pdf - store a ticket registration PDF
///
/// The connection test runs first so a broken bucket surfaces as
/// "Storage connection failed" rather than a misleading upload error.
pub async fn upload(
    State(state): State<ServerState>,
    Json(payload): Json<UploadPdfRequest>,
) -> AppResult<Json<AppResponse<UploadPdfResponse>>> {
    let ticket_number = payload
        .ticket_number
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::validation("ticketNumber is required"))?;
    let pdf_base64 = payload
        .pdf_base64
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::validation("pdfBase64 is required"))?;

    let pdf_bytes = BASE64
        .decode(pdf_base64.as_bytes())
        .map_err(|_| AppError::validation("Invalid base64 PDF data"))?;

    state.storage.test_connection().await?;

    let uploaded = state
        .storage
        .upload_pdf(ticket_number.trim(), pdf_bytes)
        .await?;

    Ok(Json(AppResponse::success(UploadPdfResponse {
        success: true,
        pdf_url: uploaded.url,
        key: uploaded.key,
        message: "PDF uploaded successfully".to_string(),
    })))
}

/// GET /api/upload-pdf - storage connection self-test
pub async fn storage_health(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<StorageHealthResponse>>> {
    state.storage.test_connection().await?;

    Ok(Json(AppResponse::success(StorageHealthResponse {
        success: true,
        message: "Storage connection OK".to_string(),
        bucket: state.storage.bucket().to_string(),
        folder: state.storage.folder_prefix().to_string(),
    })))
}
