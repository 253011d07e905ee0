//! Notification DTOs — PDF upload and WhatsApp dispatch

use serde::{Deserialize, Serialize};

/// PDF upload request: a base64-encoded PDF tied to a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPdfRequest {
    #[serde(rename = "ticketNumber")]
    pub ticket_number: Option<String>,
    #[serde(rename = "pdfBase64")]
    pub pdf_base64: Option<String>,
}

/// PDF upload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPdfResponse {
    pub success: bool,
    #[serde(rename = "pdfUrl")]
    pub pdf_url: String,
    pub key: String,
    pub message: String,
}

/// Object-storage self-test response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageHealthResponse {
    pub success: bool,
    pub message: String,
    pub bucket: String,
    pub folder: String,
}

/// WhatsApp dispatch request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendWhatsAppRequest {
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "ticketNumber")]
    pub ticket_number: Option<String>,
    /// Custom message body; when absent the registration template is used
    pub message: Option<String>,
    #[serde(rename = "pdfBase64")]
    pub pdf_base64: Option<String>,
}

/// WhatsApp dispatch response
///
/// Delivery failure is reported in the body; it never fails the record
/// the notification is about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendWhatsAppResponse {
    pub success: bool,
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
