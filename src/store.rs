//! User Store
//!
//! Flat-file JSON persistence for user accounts, keyed by email.
//! Every operation loads `users.json`, modifies the full map, and
//! rewrites the file. There is no cross-process synchronization, so
//! concurrent writers can lose updates.
//!
//! Passwords are stored as unsalted SHA-256 digests. Lookup by user id
//! is a linear scan over all records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

use crate::recommender::ScoredCareer;

// ============================================================
// ERRORS
// ============================================================

/// Domain errors raised by the user store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User already exists")]
    UserExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage format error: {0}")]
    Format(#[from] serde_json::Error),
}

// ============================================================
// RECORDS
// ============================================================

/// A persisted user record, as written to `users.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Hex-encoded unsalted SHA-256 digest
    pub password: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Empty until the first profile update
    #[serde(default)]
    pub experience_level: String,
    /// Last saved recommendation list, mirrored from the per-user file
    #[serde(default)]
    pub recommendations: Vec<ScoredCareer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_recommendation: Option<DateTime<Utc>>,
}

/// Public view of a user, without the password digest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub experience_level: String,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            email: record.email.clone(),
            name: record.name.clone(),
            skills: record.skills.clone(),
            interests: record.interests.clone(),
            experience_level: record.experience_level.clone(),
        }
    }
}

/// Contents of the per-user `recommendations.json` file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecommendations {
    pub recommendations: Vec<ScoredCareer>,
    pub generated_at: DateTime<Utc>,
}

// ============================================================
// USER STORE
// ============================================================

/// Flat-file JSON user store
pub struct UserStore {
    data_dir: PathBuf,
    users_file: PathBuf,
}

impl UserStore {
    /// Open (or initialize) a store rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        let users_file = data_dir.join("users.json");
        if !users_file.exists() {
            fs::write(&users_file, "{}")?;
        }

        Ok(Self {
            data_dir,
            users_file,
        })
    }

    fn load_users(&self) -> Result<BTreeMap<String, UserRecord>, StoreError> {
        let raw = fs::read_to_string(&self.users_file)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save_users(&self, users: &BTreeMap<String, UserRecord>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(users)?;
        fs::write(&self.users_file, raw)?;
        Ok(())
    }

    /// Register a new user and return the generated user id
    pub fn register_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<String, StoreError> {
        let mut users = self.load_users()?;

        if users.contains_key(email) {
            return Err(StoreError::UserExists);
        }

        let user_id = Uuid::new_v4().to_string();
        let record = UserRecord {
            id: user_id.clone(),
            email: email.to_string(),
            name: name.to_string(),
            password: hash_password(password),
            created_at: Utc::now(),
            skills: Vec::new(),
            interests: Vec::new(),
            experience_level: String::new(),
            recommendations: Vec::new(),
            updated_at: None,
            last_recommendation: None,
        };

        users.insert(email.to_string(), record);
        self.save_users(&users)?;

        // Per-user directory for individual files
        fs::create_dir_all(self.data_dir.join(&user_id))?;

        log::info!("registered user {} ({})", user_id, email);
        Ok(user_id)
    }

    /// Verify credentials and return the user's public profile
    pub fn login(&self, email: &str, password: &str) -> Result<UserProfile, StoreError> {
        let users = self.load_users()?;

        let record = users.get(email).ok_or(StoreError::UserNotFound)?;
        if record.password != hash_password(password) {
            return Err(StoreError::InvalidPassword);
        }

        Ok(UserProfile::from(record))
    }

    /// Look up a user by id (linear scan over all records)
    pub fn get_user_by_id(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        let users = self.load_users()?;

        users
            .values()
            .find(|record| record.id == user_id)
            .map(UserProfile::from)
            .ok_or(StoreError::UserNotFound)
    }

    /// Replace the user's skills, interests, and experience level
    pub fn update_profile(
        &self,
        user_id: &str,
        skills: Vec<String>,
        interests: Vec<String>,
        experience_level: String,
    ) -> Result<(), StoreError> {
        let mut users = self.load_users()?;

        let record = users
            .values_mut()
            .find(|record| record.id == user_id)
            .ok_or(StoreError::UserNotFound)?;

        record.skills = skills;
        record.interests = interests;
        record.experience_level = experience_level;
        record.updated_at = Some(Utc::now());

        self.save_users(&users)
    }

    /// Persist a recommendation list for the user.
    ///
    /// The list is mirrored into the user's entry in `users.json` and
    /// written to the user's own `recommendations.json` with a
    /// generation timestamp.
    pub fn save_recommendations(
        &self,
        user_id: &str,
        recommendations: &[ScoredCareer],
    ) -> Result<(), StoreError> {
        let mut users = self.load_users()?;
        let now = Utc::now();

        let record = users
            .values_mut()
            .find(|record| record.id == user_id)
            .ok_or(StoreError::UserNotFound)?;

        record.recommendations = recommendations.to_vec();
        record.last_recommendation = Some(now);

        self.save_users(&users)?;

        let user_dir = self.data_dir.join(user_id);
        fs::create_dir_all(&user_dir)?;

        let saved = SavedRecommendations {
            recommendations: recommendations.to_vec(),
            generated_at: now,
        };
        let raw = serde_json::to_string_pretty(&saved)?;
        fs::write(user_dir.join("recommendations.json"), raw)?;

        log::info!(
            "saved {} recommendations for user {}",
            recommendations.len(),
            user_id
        );
        Ok(())
    }
}

/// Hex-encoded unsalted SHA-256 digest of the password
fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::{CareerRecommender, RecommenderConfig};

    fn temp_store() -> (tempfile::TempDir, UserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path().join("user_data")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_register_and_login() {
        let (_dir, store) = temp_store();

        let user_id = store
            .register_user("alice@example.com", "secret", "Alice")
            .unwrap();

        let profile = store.login("alice@example.com", "secret").unwrap();
        assert_eq!(profile.id, user_id);
        assert_eq!(profile.email, "alice@example.com");
        assert_eq!(profile.name, "Alice");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_level, "");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let (_dir, store) = temp_store();

        store
            .register_user("alice@example.com", "secret", "Alice")
            .unwrap();
        let err = store
            .register_user("alice@example.com", "other", "Alice Again")
            .unwrap_err();
        assert!(matches!(err, StoreError::UserExists));
    }

    #[test]
    fn test_login_failures() {
        let (_dir, store) = temp_store();

        store
            .register_user("alice@example.com", "secret", "Alice")
            .unwrap();

        let err = store.login("bob@example.com", "secret").unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound));

        let err = store.login("alice@example.com", "wrong").unwrap_err();
        assert!(matches!(err, StoreError::InvalidPassword));
    }

    #[test]
    fn test_password_stored_as_digest() {
        let (dir, store) = temp_store();

        store
            .register_user("alice@example.com", "secret", "Alice")
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("user_data").join("users.json")).unwrap();
        assert!(!raw.contains("\"secret\""));
        // SHA-256 of "secret"
        assert!(raw.contains("2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"));
    }

    #[test]
    fn test_update_profile_and_get_by_id() {
        let (_dir, store) = temp_store();

        let user_id = store
            .register_user("alice@example.com", "secret", "Alice")
            .unwrap();

        store
            .update_profile(
                &user_id,
                vec!["Python".to_string(), "SQL".to_string()],
                vec!["data".to_string()],
                "advanced".to_string(),
            )
            .unwrap();

        let profile = store.get_user_by_id(&user_id).unwrap();
        assert_eq!(profile.skills, vec!["Python", "SQL"]);
        assert_eq!(profile.interests, vec!["data"]);
        assert_eq!(profile.experience_level, "advanced");

        let err = store.get_user_by_id("missing-id").unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound));
    }

    #[test]
    fn test_update_profile_unknown_user() {
        let (_dir, store) = temp_store();
        let err = store
            .update_profile("missing-id", vec![], vec![], "beginner".to_string())
            .unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound));
    }

    #[test]
    fn test_save_recommendations_round_trip() {
        let (dir, store) = temp_store();

        let user_id = store
            .register_user("alice@example.com", "secret", "Alice")
            .unwrap();

        let engine = CareerRecommender::new(RecommenderConfig::default());
        let recs = engine.recommend(
            &["Python".to_string(), "SQL".to_string()],
            "advanced",
            &[],
        );
        assert!(!recs.is_empty());

        store.save_recommendations(&user_id, &recs).unwrap();

        // Mirrored into the monolithic users file
        let raw = std::fs::read_to_string(dir.path().join("user_data").join("users.json")).unwrap();
        let users: BTreeMap<String, UserRecord> = serde_json::from_str(&raw).unwrap();
        let record = &users["alice@example.com"];
        assert_eq!(record.recommendations.len(), recs.len());
        assert!(record.last_recommendation.is_some());

        // Written to the per-user file with a timestamp
        let per_user = dir
            .path()
            .join("user_data")
            .join(&user_id)
            .join("recommendations.json");
        let saved: SavedRecommendations =
            serde_json::from_str(&std::fs::read_to_string(per_user).unwrap()).unwrap();
        assert_eq!(saved.recommendations.len(), recs.len());
        assert_eq!(saved.recommendations[0].profile.title, recs[0].profile.title);
    }

    #[test]
    fn test_save_recommendations_unknown_user() {
        let (_dir, store) = temp_store();
        let err = store.save_recommendations("missing-id", &[]).unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound));
    }
}
