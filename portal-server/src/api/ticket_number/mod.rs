//! Ticket number allocation API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/ticket-number | GET | next sequential ticket number |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/ticket-number", get(handler::next))
}
