//! WhatsApp notification API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/send-whatsapp | POST | send the registration confirmation |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/send-whatsapp", post(handler::send))
}
