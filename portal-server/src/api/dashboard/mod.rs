//! Dashboard API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/dashboard/stats | GET | aggregated statistics, optional date range |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/dashboard/stats", get(handler::stats))
}
