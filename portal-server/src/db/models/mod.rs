//! Database models

pub mod complaint;
pub mod credential;

pub use complaint::{ComplaintCreate, ComplaintRecord, ComplaintStatus, ComplaintUpdate};
pub use credential::{Credential, CredentialCreate};
