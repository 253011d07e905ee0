//! Ticket number allocation handler

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::ComplaintRepository;
use crate::tickets::{SCAN_LIMIT, next_ticket_number};
use crate::utils::{AppResponse, AppResult};
use shared::dashboard::TicketNumberResponse;

/// GET /api/ticket-number - allocate the next ticket number
///
/// Scans the most recent tickets and returns max+1. A scan failure is
/// a 500; an empty scan legitimately starts the sequence at 1.
pub async fn next(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<TicketNumberResponse>>> {
    let repo = ComplaintRepository::new(state.get_db());
    let recent = repo
        .recent_ticket_numbers(&state.config.ticket.prefix, SCAN_LIMIT)
        .await?;

    let ticket_number = next_ticket_number(&recent, &state.config.ticket);

    tracing::debug!("Allocated ticket number {}", ticket_number);

    Ok(Json(AppResponse::success(TicketNumberResponse {
        ticket_number,
    })))
}
