//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - login, token verification, registration
//! - [`complaints`] - complaint record CRUD
//! - [`ticket_number`] - sequential ticket allocation
//! - [`dashboard`] - aggregated statistics
//! - [`upload`] - ticket PDF upload to object storage
//! - [`whatsapp`] - WhatsApp notification dispatch

pub mod auth;
pub mod health;

pub mod complaints;
pub mod dashboard;
pub mod ticket_number;

pub mod upload;
pub mod whatsapp;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
