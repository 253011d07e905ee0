use crate::auth::JwtConfig;
use crate::tickets::TicketPolicy;

/// Server configuration - every configurable item of the portal
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/jansunavani | working directory (database, files) |
/// | HTTP_PORT | 3000 | HTTP service port |
/// | ENVIRONMENT | development | runtime environment |
/// | JWT_SECRET | (dev fallback) | token signing secret |
/// | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |
/// | TICKET_PREFIX | JD | ticket number prefix |
/// | TICKET_SUFFIX | AP | ticket number suffix |
/// | TICKET_MAX_SEQUENCE | 100000 | sanity bound for scanned sequences |
/// | STORAGE_ENDPOINT | http://localhost:9000 | object storage base URL |
/// | STORAGE_BUCKET | jd-complaint-tickets | object storage bucket |
/// | STORAGE_FOLDER_PREFIX | CRM_Tickets/ | key prefix for ticket PDFs |
/// | STORAGE_API_KEY | (empty) | object storage API key |
/// | WHATSAPP_API_URL | (empty) | messaging gateway URL |
/// | WHATSAPP_API_KEY | (empty) | messaging gateway API key |
///
/// Built once at process start and passed by reference; components never
/// read the environment ad hoc.
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT authentication configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Ticket number allocation policy
    pub ticket: TicketPolicy,
    /// Object storage configuration
    pub storage: StorageConfig,
    /// WhatsApp messaging gateway configuration
    pub whatsapp: WhatsAppConfig,
}

/// Object storage collaborator settings
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Base URL of the object storage HTTP endpoint
    pub endpoint: String,
    /// Bucket holding ticket PDFs
    pub bucket: String,
    /// Key prefix under the bucket
    pub folder_prefix: String,
    /// API key sent with every request
    pub api_key: String,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("STORAGE_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9000".into()),
            bucket: std::env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "jd-complaint-tickets".into()),
            folder_prefix: std::env::var("STORAGE_FOLDER_PREFIX")
                .unwrap_or_else(|_| "CRM_Tickets/".into()),
            api_key: std::env::var("STORAGE_API_KEY").unwrap_or_default(),
        }
    }
}

/// WhatsApp messaging gateway settings
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    /// Messages endpoint of the gateway
    pub api_url: String,
    /// API key sent in the `x-api-key` header
    pub api_key: String,
}

impl WhatsAppConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("WHATSAPP_API_URL").unwrap_or_default(),
            api_key: std::env::var("WHATSAPP_API_KEY").unwrap_or_default(),
        }
    }

    /// Gateway is usable only when both URL and key are configured
    pub fn is_configured(&self) -> bool {
        !self.api_url.is_empty() && !self.api_key.is_empty()
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/jansunavani".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            ticket: TicketPolicy::from_env(),
            storage: StorageConfig::from_env(),
            whatsapp: WhatsAppConfig::from_env(),
        }
    }

    /// Override selected values, commonly used in tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Set up the process environment: dotenv, then logging
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    crate::utils::logger::init_logger();
    Ok(())
}
