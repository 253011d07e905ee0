//! Complaint record API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::core::ServerState;
use crate::db::models::{ComplaintCreate, ComplaintRecord, ComplaintUpdate};
use crate::db::repository::ComplaintRepository;
use crate::tickets::{SCAN_LIMIT, next_ticket_number};
use crate::translate::normalize_problem;
use crate::utils::{AppError, AppResponse, AppResult};

/// GET /api/complaint-records - all complaints, newest first
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<ComplaintRecord>>>> {
    let repo = ComplaintRepository::new(state.get_db());
    let records = repo.find_all().await?;
    Ok(Json(AppResponse::success(records)))
}

/// GET /api/complaint-records/:ticketNumber
pub async fn get_by_ticket(
    State(state): State<ServerState>,
    Path(ticket_number): Path<String>,
) -> AppResult<Json<AppResponse<ComplaintRecord>>> {
    let repo = ComplaintRepository::new(state.get_db());
    let record = repo
        .find_by_ticket(&ticket_number)
        .await?
        .ok_or_else(|| AppError::not_found("Not found"))?;
    Ok(Json(AppResponse::success(record)))
}

/// POST /api/complaint-records - register a complaint
///
/// The ticket number is normally pre-allocated by the client via
/// `GET /api/ticket-number`; a payload without one gets a fresh
/// allocation here. The department is stored in canonical English.
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<ComplaintCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<ComplaintRecord>>)> {
    let repo = ComplaintRepository::new(state.get_db());

    let ticket_number = match payload.ticket_number.take().filter(|t| !t.trim().is_empty()) {
        Some(t) => t.trim().to_string(),
        None => {
            let recent = repo
                .recent_ticket_numbers(&state.config.ticket.prefix, SCAN_LIMIT)
                .await?;
            next_ticket_number(&recent, &state.config.ticket)
        }
    };

    payload.problem = normalize_problem(payload.problem);

    let record = payload.into_record(ticket_number, Utc::now());
    let created = repo.create(record).await?;

    tracing::info!("📋 Complaint registered: {}", created.ticket_number);

    Ok((StatusCode::CREATED, Json(AppResponse::success(created))))
}

/// PUT /api/complaint-records/:ticketNumber - allow-listed update
pub async fn update(
    State(state): State<ServerState>,
    Path(ticket_number): Path<String>,
    Json(payload): Json<ComplaintUpdate>,
) -> AppResult<Json<AppResponse<ComplaintRecord>>> {
    if payload.is_empty() {
        return Err(AppError::validation("No updatable fields provided"));
    }

    let repo = ComplaintRepository::new(state.get_db());
    let updated = repo.update(&ticket_number, payload).await?;

    tracing::info!("📋 Complaint updated: {}", updated.ticket_number);

    Ok(Json(AppResponse::success(updated)))
}

/// DELETE /api/complaint-records/:ticketNumber - unconditional delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(ticket_number): Path<String>,
) -> AppResult<Json<AppResponse<bool>>> {
    let repo = ComplaintRepository::new(state.get_db());
    repo.delete(&ticket_number).await?;

    tracing::info!("🗑️ Complaint deleted: {}", ticket_number);

    Ok(Json(AppResponse::success(true)))
}
