//! Jansunavani Portal Server - public grievance registration service
//!
//! # Architecture overview
//!
//! - **Record store** (`db`): embedded SurrealDB holding complaint and
//!   credential tables
//! - **Ticket allocator** (`tickets`): sequential ticket numbers derived
//!   from the most recent records
//! - **Authentication** (`auth`): JWT + bcrypt credential checks
//! - **Translation** (`translate`): canonical English department lookup
//!   for Hindi/Marathi input
//! - **Dashboard** (`dashboard`): summary aggregation over complaints
//! - **Notifications** (`services`): object-storage PDF upload and
//!   WhatsApp dispatch
//! - **HTTP API** (`api`): RESTful endpoints
//!
//! # Module structure
//!
//! ```text
//! portal-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT auth, middleware
//! ├── db/            # models, repositories
//! ├── tickets/       # ticket number allocation
//! ├── translate/     # department translation dictionary
//! ├── dashboard/     # statistics aggregation
//! ├── services/      # storage + whatsapp clients
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod dashboard;
pub mod db;
pub mod services;
pub mod tickets;
pub mod translate;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, setup_environment};
pub use tickets::TicketPolicy;
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

pub fn print_banner() {
    println!(
        r#"
       __                                                    _
      / /___ _____  _______  ______  ____ __   ______ _____ (_)
 __  / / __ `/ __ \/ ___/ / / / __ \/ __ `/ | / / __ `/ __ \/ /
/ /_/ / /_/ / / / (__  ) /_/ / / / / /_/ /| |/ / /_/ / / / / /
\____/\__,_/_/ /_/____/\__,_/_/ /_/\__,_/ |___/\__,_/_/ /_/_/
    "#
    );
}
