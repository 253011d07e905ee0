//! Credential Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// bcrypt work factor for new registrations
pub const BCRYPT_COST: u32 = 12;

/// Stored user credential
///
/// Legacy rows carry a plaintext `password`; rows created through the
/// registration endpoint carry a bcrypt `password_hash`. The hash wins
/// when both are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_role() -> String {
    "user".to_string()
}

fn default_true() -> bool {
    true
}

/// Create credential payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialCreate {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl Credential {
    /// Verify a submitted password against the stored credential
    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        if let Some(hash) = &self.password_hash {
            bcrypt::verify(password, hash)
        } else if let Some(stored) = &self.password {
            Ok(stored == password)
        } else {
            Ok(false)
        }
    }

    /// Hash a password with bcrypt
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::hash(password, BCRYPT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(password: Option<&str>, hash: Option<&str>) -> Credential {
        Credential {
            username: "dbuser01".into(),
            password: password.map(String::from),
            password_hash: hash.map(String::from),
            email: None,
            full_name: None,
            role: default_role(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_legacy_plaintext_comparison() {
        let cred = credential(Some("secret123"), None);
        assert!(cred.verify_password("secret123").unwrap());
        assert!(!cred.verify_password("wrong").unwrap());
    }

    #[test]
    fn test_hashed_verification() {
        // Low cost keeps the test fast; BCRYPT_COST applies to real registrations
        let hash = bcrypt::hash("secret123", 4).unwrap();
        let cred = credential(None, Some(&hash));
        assert!(cred.verify_password("secret123").unwrap());
        assert!(!cred.verify_password("wrong").unwrap());
    }

    #[test]
    fn test_hash_wins_over_plaintext() {
        let hash = bcrypt::hash("hashed-pass", 4).unwrap();
        let cred = credential(Some("plain-pass"), Some(&hash));
        assert!(cred.verify_password("hashed-pass").unwrap());
        assert!(!cred.verify_password("plain-pass").unwrap());
    }

    #[test]
    fn test_no_credential_material() {
        let cred = credential(None, None);
        assert!(!cred.verify_password("anything").unwrap());
    }
}
