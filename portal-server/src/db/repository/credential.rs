//! Credential Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Credential, CredentialCreate};
use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct CredentialRepository {
    base: BaseRepository,
}

impl CredentialRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a credential by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Credential>> {
        let username = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM credential WHERE username = $username LIMIT 1")
            .bind(("username", username))
            .await?;
        let credentials: Vec<Credential> = result.take(0)?;
        Ok(credentials.into_iter().next())
    }

    /// Register a new credential with a hashed password
    pub async fn create(&self, data: CredentialCreate) -> RepoResult<Credential> {
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::Duplicate("Username already exists".to_string()));
        }

        let password_hash = Credential::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

        let credential = Credential {
            username: data.username,
            password: None,
            password_hash: Some(password_hash),
            email: data.email,
            full_name: data.full_name,
            role: "user".to_string(),
            is_active: true,
            created_at: Utc::now(),
        };

        let mut result = self
            .base
            .db()
            .query("CREATE credential CONTENT $credential")
            .bind(("credential", credential))
            .await?;

        let created: Option<Credential> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create credential".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_db;

    fn payload(username: &str) -> CredentialCreate {
        CredentialCreate {
            username: username.to_string(),
            password: "secret123".to_string(),
            email: Some("officer@example.in".to_string()),
            full_name: None,
        }
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let repo = CredentialRepository::new(test_db().await);

        let created = repo.create(payload("dbuser01")).await.unwrap();
        assert_eq!(created.username, "dbuser01");
        assert_eq!(created.role, "user");
        assert!(created.is_active);
        assert!(created.password.is_none());
        assert!(created.verify_password("secret123").unwrap());

        let found = repo.find_by_username("dbuser01").await.unwrap().unwrap();
        assert!(found.verify_password("secret123").unwrap());
        assert!(!found.verify_password("wrong").unwrap());

        assert!(repo.find_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = CredentialRepository::new(test_db().await);
        repo.create(payload("dbuser01")).await.unwrap();

        match repo.create(payload("dbuser01")).await {
            Err(RepoError::Duplicate(_)) => {}
            other => panic!("Expected Duplicate, got {:?}", other.map(|c| c.username)),
        }
    }
}
