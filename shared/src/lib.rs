//! Shared types for the Jansunavani grievance portal
//!
//! Wire DTOs used by the portal server and its clients: authentication
//! payloads, dashboard statistics, and notification requests.

pub mod auth;
pub mod dashboard;
pub mod notify;

// Re-exports
pub use serde::{Deserialize, Serialize};
