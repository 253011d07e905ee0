//! WhatsApp messaging gateway client
//!
//! Sends the registration confirmation to the complainant's phone. The
//! gateway accepts plain text and document messages; when a ticket PDF
//! is available we attach it, otherwise the text goes out alone.

use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

use crate::core::config::WhatsAppConfig;
use crate::utils::{AppError, AppResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// IST offset for timestamps shown to citizens
const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 1800;

#[derive(Debug, Clone)]
pub struct WhatsAppService {
    client: reqwest::Client,
    config: WhatsAppConfig,
}

/// Gateway acknowledgement
#[derive(Debug, Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "messageId")]
    message_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl WhatsAppService {
    pub fn new(config: WhatsAppConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Normalize a phone number to international digits-only form
    ///
    /// Bare 10-digit numbers get the 91 country code; numbers already
    /// carrying a country code pass through. Fewer than 10 digits is
    /// rejected.
    pub fn normalize_phone(phone: &str) -> AppResult<String> {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < 10 {
            return Err(AppError::validation("Invalid phone number"));
        }
        if digits.len() == 10 {
            return Ok(format!("91{digits}"));
        }
        Ok(digits)
    }

    /// Registration confirmation body
    pub fn registration_message(ticket_number: &str, name: Option<&str>) -> String {
        let ist = FixedOffset::east_opt(IST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix());
        let now = Utc::now().with_timezone(&ist);
        format!(
            "Namaste {}! 🙏\n\nYour complaint has been registered.\n\n\
             Ticket Number: {}\nRegistered: {}\n\n\
             Please keep the ticket number for future reference. \
             You will be notified as your complaint progresses.\n\n\
             - Jansunavani Portal",
            name.unwrap_or("citizen"),
            ticket_number,
            now.format("%d-%m-%Y %H:%M IST")
        )
    }

    /// Send a message, optionally attaching a document by URL
    ///
    /// Returns the gateway message id when one is reported.
    pub async fn send_message(
        &self,
        to: &str,
        body: &str,
        document: Option<(&str, &str)>,
    ) -> AppResult<Option<String>> {
        if !self.is_configured() {
            return Err(AppError::validation(
                "WhatsApp gateway is not configured",
            ));
        }

        let payload = match document {
            Some((link, filename)) => serde_json::json!({
                "to": to,
                "type": "document",
                "document": {
                    "link": link,
                    "filename": filename,
                    "caption": body,
                },
            }),
            None => serde_json::json!({
                "to": to,
                "type": "text",
                "text": { "body": body },
            }),
        };

        let resp = self
            .client
            .post(&self.config.api_url)
            .header("x-api-key", self.config.api_key.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::storage(format!("WhatsApp request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            tracing::warn!("WhatsApp gateway error {}: {}", status, detail);
            return Err(AppError::storage(format!(
                "WhatsApp gateway returned status {status}"
            )));
        }

        let ack: GatewayResponse = resp
            .json()
            .await
            .map_err(|e| AppError::storage(format!("Invalid gateway response: {e}")))?;

        if !ack.success {
            return Err(AppError::storage(format!(
                "WhatsApp send failed: {}",
                ack.error.unwrap_or_else(|| "unknown error".to_string())
            )));
        }

        tracing::info!("📨 WhatsApp message sent to {}", to);
        Ok(ack.message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(
            WhatsAppService::normalize_phone("9876543210").unwrap(),
            "919876543210"
        );
        assert_eq!(
            WhatsAppService::normalize_phone("+91 98765-43210").unwrap(),
            "919876543210"
        );
        assert_eq!(
            WhatsAppService::normalize_phone("919876543210").unwrap(),
            "919876543210"
        );
        assert!(WhatsAppService::normalize_phone("12345").is_err());
        assert!(WhatsAppService::normalize_phone("abc").is_err());
    }

    #[test]
    fn test_registration_message_contains_ticket() {
        let body = WhatsAppService::registration_message("JD000042AP", Some("Asha"));
        assert!(body.contains("JD000042AP"));
        assert!(body.contains("Asha"));
        assert!(body.contains("IST"));

        let anonymous = WhatsAppService::registration_message("JD000042AP", None);
        assert!(anonymous.contains("citizen"));
    }

    #[test]
    fn test_unconfigured_gateway_detected() {
        let service = WhatsAppService::new(WhatsAppConfig {
            api_url: String::new(),
            api_key: String::new(),
        });
        assert!(!service.is_configured());
    }
}
