//! Object storage client
//!
//! Uploads ticket registration PDFs over the storage HTTP API. Objects
//! live under a fixed folder prefix with the key template
//! `ticket_<ticketNumber>_registration.pdf`; re-uploading the same
//! ticket overwrites the previous object.

use std::time::Duration;

use crate::core::config::StorageConfig;
use crate::utils::{AppError, AppResult};

/// Upload timeout; ticket PDFs are small
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Object key used by the connectivity probe
const PROBE_KEY: &str = "connection-test.txt";

#[derive(Debug, Clone)]
pub struct StorageService {
    client: reqwest::Client,
    config: StorageConfig,
}

/// Result of a successful PDF upload
#[derive(Debug, Clone)]
pub struct UploadedObject {
    /// Public URL of the stored object
    pub url: String,
    /// Full object key inside the bucket
    pub key: String,
}

impl StorageService {
    pub fn new(config: StorageConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }

    pub fn folder_prefix(&self) -> &str {
        &self.config.folder_prefix
    }

    /// Object key for a ticket's registration PDF
    pub fn object_key(&self, ticket_number: &str) -> String {
        format!(
            "{}ticket_{}_registration.pdf",
            self.config.folder_prefix, ticket_number
        )
    }

    /// Public URL of an object
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.config.endpoint, self.config.bucket, key)
    }

    /// Write-and-delete probe against the bucket
    ///
    /// Run before each upload so a broken bucket configuration surfaces
    /// as a connection error, not a misleading upload error.
    pub async fn test_connection(&self) -> AppResult<()> {
        let key = format!("{}{}", self.config.folder_prefix, PROBE_KEY);
        let url = self.object_url(&key);

        let resp = self
            .put(&url, b"connection test".to_vec(), "text/plain")
            .await
            .map_err(|e| AppError::storage(format!("Storage connection failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::storage(format!(
                "Storage connection failed: status {}",
                resp.status()
            )));
        }

        // Best effort: the probe object carries no information
        if let Err(e) = self.client.delete(&url).send().await {
            tracing::debug!("Failed to delete storage probe object: {}", e);
        }

        tracing::info!("✅ Storage connection verified (bucket={})", self.config.bucket);
        Ok(())
    }

    /// Upload a ticket registration PDF, overwriting any previous one
    pub async fn upload_pdf(
        &self,
        ticket_number: &str,
        pdf_bytes: Vec<u8>,
    ) -> AppResult<UploadedObject> {
        let key = self.object_key(ticket_number);
        let url = self.object_url(&key);
        let size = pdf_bytes.len();

        let resp = self
            .put(&url, pdf_bytes, "application/pdf")
            .await
            .map_err(|e| AppError::storage(format!("PDF upload failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::storage(format!(
                "PDF upload failed: status {}",
                resp.status()
            )));
        }

        tracing::info!(
            "📄 Uploaded PDF for ticket {} ({} bytes) -> {}",
            ticket_number,
            size,
            key
        );

        Ok(UploadedObject { url, key })
    }

    async fn put(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut req = self
            .client
            .put(url)
            .header("content-type", content_type)
            .body(body);
        if !self.config.api_key.is_empty() {
            req = req.header("x-api-key", self.config.api_key.clone());
        }
        req.send().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> StorageService {
        StorageService::new(StorageConfig {
            endpoint: "http://localhost:9000".into(),
            bucket: "jd-complaint-tickets".into(),
            folder_prefix: "CRM_Tickets/".into(),
            api_key: String::new(),
        })
    }

    #[test]
    fn test_object_key_template() {
        assert_eq!(
            service().object_key("JD000042AP"),
            "CRM_Tickets/ticket_JD000042AP_registration.pdf"
        );
    }

    #[test]
    fn test_object_url() {
        let s = service();
        let key = s.object_key("JD000042AP");
        assert_eq!(
            s.object_url(&key),
            "http://localhost:9000/jd-complaint-tickets/CRM_Tickets/ticket_JD000042AP_registration.pdf"
        );
    }
}
