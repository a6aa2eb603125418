//! PostgreSQL implementation of the credential store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{CredentialRecord, NewCredential};
use crate::domain::repositories::CredentialRepository;
use crate::error::AppError;

/// PostgreSQL repository backed by the `console_users` table.
///
/// Username uniqueness is enforced by the `console_users_username_key` constraint.
pub struct PgCredentialRepository {
    pool: Arc<PgPool>,
}

impl PgCredentialRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    username: String,
    password: String,
    designation: String,
    created_at: DateTime<Utc>,
}

impl From<CredentialRow> for CredentialRecord {
    fn from(row: CredentialRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password: row.password,
            designation: row.designation,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<CredentialRecord>, AppError> {
        if username.is_empty() {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, password, designation, created_at
            FROM console_users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CredentialRecord::from))
    }

    async fn create(&self, credential: &NewCredential) -> Result<CredentialRecord, AppError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            INSERT INTO console_users (username, password, designation)
            VALUES ($1, $2, $3)
            RETURNING id, username, password, designation, created_at
            "#,
        )
        .bind(&credential.username)
        .bind(&credential.password)
        .bind(&credential.designation)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<CredentialRecord>, AppError> {
        let rows = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, password, designation, created_at
            FROM console_users
            ORDER BY username
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CredentialRecord::from).collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
