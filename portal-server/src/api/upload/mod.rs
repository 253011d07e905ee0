//! PDF upload API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/upload-pdf | POST | upload a ticket registration PDF |
//! | /api/upload-pdf | GET | storage connection self-test |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/upload-pdf",
        post(handler::upload).get(handler::storage_health),
    )
}
