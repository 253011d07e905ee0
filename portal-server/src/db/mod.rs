//! Database Module
//!
//! Embedded SurrealDB storage for complaint and credential records.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::{AppError, AppResult};

const NAMESPACE: &str = "jansunavani";
const DATABASE: &str = "portal";

/// Open the embedded database at the given path
pub async fn init_db(path: &Path) -> AppResult<Surreal<Db>> {
    let db = Surreal::new::<RocksDb>(path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

    Ok(db)
}
