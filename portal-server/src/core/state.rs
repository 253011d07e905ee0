use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::services::{StorageService, WhatsAppService};
use crate::utils::{AppError, AppResult};

/// Server state - shared handles for every request handler
///
/// Cloning is cheap: the database handle and services are reference
/// counted internally.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | configuration (immutable) |
/// | db | embedded database |
/// | jwt_service | JWT signing/verification |
/// | storage | object storage client |
/// | whatsapp | messaging gateway client |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT authentication service
    pub jwt_service: Arc<JwtService>,
    /// Object storage client
    pub storage: StorageService,
    /// WhatsApp gateway client
    pub whatsapp: WhatsAppService,
}

impl ServerState {
    /// Assemble server state from already-built parts
    ///
    /// Used by tests with an in-memory database; production code goes
    /// through [`ServerState::initialize`].
    pub fn new(config: Config, db: Surreal<Db>) -> AppResult<Self> {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let storage = StorageService::new(config.storage.clone());
        let whatsapp = WhatsAppService::new(config.whatsapp.clone());

        Ok(Self {
            config,
            db,
            jwt_service,
            storage,
            whatsapp,
        })
    }

    /// Initialize server state
    ///
    /// 1. Ensure the working directory exists
    /// 2. Open the database under `work_dir/database/`
    /// 3. Construct the JWT, storage, and messaging services
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db_dir = std::path::Path::new(&config.work_dir).join("database");
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = crate::db::init_db(&db_dir.join("portal.db")).await?;

        tracing::info!(work_dir = %config.work_dir, "Database initialized");

        Self::new(config.clone(), db)
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
