//! In-memory implementation of the credential store.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{CredentialRecord, NewCredential};
use crate::domain::repositories::CredentialRepository;
use crate::error::AppError;

/// Credential store held in process memory.
///
/// Applies the same uniqueness rule as the `console_users` table. Contents are
/// lost when the process exits.
#[derive(Default)]
pub struct InMemoryCredentialRepository {
    records: RwLock<HashMap<String, CredentialRecord>>,
    next_id: AtomicI64,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `(username, password, designation)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid fields and
    /// [`AppError::Conflict`] for repeated usernames.
    pub async fn with_records(records: &[(&str, &str, &str)]) -> Result<Self, AppError> {
        let store = Self::new();
        for (username, password, designation) in records {
            let credential = NewCredential::new(*username, *password, *designation)?;
            store.create(&credential).await?;
        }
        Ok(store)
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<CredentialRecord>, AppError> {
        Ok(self.records.read().await.get(username).cloned())
    }

    async fn create(&self, credential: &NewCredential) -> Result<CredentialRecord, AppError> {
        let mut records = self.records.write().await;

        if records.contains_key(&credential.username) {
            return Err(AppError::conflict(
                "Username already exists",
                json!({ "username": credential.username }),
            ));
        }

        let record = CredentialRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            username: credential.username.clone(),
            password: credential.password.clone(),
            designation: credential.designation.clone(),
            created_at: Utc::now(),
        };
        records.insert(record.username.clone(), record.clone());

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<CredentialRecord>, AppError> {
        let mut records: Vec<_> = self.records.read().await.values().cloned().collect();
        records.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(records)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
