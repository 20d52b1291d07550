//! Credential lookup for login
//!
//! Students and faculty authenticate against different tables; both
//! resolve to the same record shape for password verification.

use crate::error::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CredentialRecord {
    pub id: i64,
    pub name: Option<String>,
    pub password_hash: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn find_student(&self, id: i64) -> Result<Option<CredentialRecord>>;
    async fn find_faculty(&self, id: i64) -> Result<Option<CredentialRecord>>;
}

pub struct CredentialRepositoryImpl {
    pool: MySqlPool,
}

impl CredentialRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for CredentialRepositoryImpl {
    async fn find_student(&self, id: i64) -> Result<Option<CredentialRecord>> {
        let record = sqlx::query_as::<_, CredentialRecord>(
            "SELECT id, name, password_hash FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_faculty(&self, id: i64) -> Result<Option<CredentialRecord>> {
        let record = sqlx::query_as::<_, CredentialRecord>(
            "SELECT id, name, password_hash FROM faculty WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_mock_credential_repository() {
        let mut mock = MockCredentialRepository::new();

        mock.expect_find_faculty().with(eq(2)).returning(|_| {
            Ok(Some(CredentialRecord {
                id: 2,
                name: Some("Prof. Knuth".to_string()),
                password_hash: "$argon2id$stub".to_string(),
            }))
        });
        mock.expect_find_student().with(eq(99)).returning(|_| Ok(None));

        assert!(mock.find_faculty(2).await.unwrap().is_some());
        assert!(mock.find_student(99).await.unwrap().is_none());
    }
}
