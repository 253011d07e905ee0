//! Authentication API module
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /api/login | POST | credential login | none |
//! | /api/login | GET | bearer token verification | token in header |
//! | /api/register | POST | officer account registration | none |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/login", post(handler::login).get(handler::verify))
        .route("/api/register", post(handler::register))
}
