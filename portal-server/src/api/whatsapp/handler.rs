//! WhatsApp notification handler

use axum::{Json, extract::State};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::core::ServerState;
use crate::db::repository::ComplaintRepository;
use crate::services::WhatsAppService;
use crate::utils::{AppError, AppResponse, AppResult};
use shared::notify::{SendWhatsAppRequest, SendWhatsAppResponse};

/// POST /api/send-whatsapp - send the registration confirmation
///
/// A PDF attachment is best effort: when its upload fails the message
/// degrades to text-only. Gateway delivery failure is reported in the
/// response body, never as an HTTP error, so record registration is
/// unaffected by messaging outages.
pub async fn send(
    State(state): State<ServerState>,
    Json(payload): Json<SendWhatsAppRequest>,
) -> AppResult<Json<AppResponse<SendWhatsAppResponse>>> {
    let phone = payload
        .phone_number
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| AppError::validation("phoneNumber is required"))?;
    let ticket_number = payload
        .ticket_number
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::validation("ticketNumber is required"))?;
    let ticket_number = ticket_number.trim().to_string();

    let to = WhatsAppService::normalize_phone(&phone)?;

    // The complaint record supplies the complainant's name when it
    // exists; notifications may also precede record creation.
    let repo = ComplaintRepository::new(state.get_db());
    let record = repo.find_by_ticket(&ticket_number).await?;
    let name = record.as_ref().and_then(|r| r.name.as_deref());

    let body = match payload.message.filter(|m| !m.trim().is_empty()) {
        Some(custom) => custom,
        None => WhatsAppService::registration_message(&ticket_number, name),
    };

    // Best-effort attachment
    let mut document_url: Option<String> = None;
    if let Some(pdf_base64) = payload.pdf_base64.filter(|p| !p.is_empty()) {
        let pdf_bytes = BASE64
            .decode(pdf_base64.as_bytes())
            .map_err(|_| AppError::validation("Invalid base64 PDF data"))?;

        match state.storage.upload_pdf(&ticket_number, pdf_bytes).await {
            Ok(uploaded) => document_url = Some(uploaded.url),
            Err(e) => {
                tracing::warn!(
                    "PDF upload for ticket {} failed, sending text-only: {}",
                    ticket_number,
                    e
                );
            }
        }
    }

    let filename = format!("ticket_{ticket_number}.pdf");
    let document = document_url.as_deref().map(|url| (url, filename.as_str()));

    let response = match state.whatsapp.send_message(&to, &body, document).await {
        Ok(message_id) => SendWhatsAppResponse {
            success: true,
            message_id,
            message: Some("WhatsApp message sent".to_string()),
            error: None,
        },
        Err(e) => {
            tracing::warn!("WhatsApp dispatch for ticket {} failed: {}", ticket_number, e);
            SendWhatsAppResponse {
                success: false,
                message_id: None,
                message: None,
                error: Some(e.to_string()),
            }
        }
    };

    Ok(Json(AppResponse::success(response)))
}
