//! Core module - server configuration, state, and lifecycle
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared server state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, StorageConfig, WhatsAppConfig, setup_environment};
pub use server::Server;
pub use state::ServerState;
