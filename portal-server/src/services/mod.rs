//! External collaborators
//!
//! HTTP clients for the object storage holding ticket PDFs and the
//! WhatsApp messaging gateway. Both are plain reqwest clients owned by
//! the server state; neither holds connections open between requests.

pub mod storage;
pub mod whatsapp;

pub use storage::StorageService;
pub use whatsapp::WhatsAppService;
