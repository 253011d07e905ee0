//! Complaint record API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/complaint-records | GET | list all, newest first |
//! | /api/complaint-records | POST | register a complaint |
//! | /api/complaint-records/{ticketNumber} | GET | fetch one |
//! | /api/complaint-records/{ticketNumber} | PUT | update allow-listed fields |
//! | /api/complaint-records/{ticketNumber} | DELETE | remove |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/complaint-records", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{ticket_number}",
            get(handler::get_by_ticket)
                .put(handler::update)
                .delete(handler::delete),
        )
}
