//! Login business logic

use crate::domain::{AuthResponse, LoginRequest, Role};
use crate::error::{AppError, Result};
use crate::jwt::JwtManager;
use crate::repository::CredentialRepository;
use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use std::sync::Arc;
use validator::Validate;

// One message for every login failure mode so a caller cannot probe
// which ids exist.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub struct AuthService<R: CredentialRepository> {
    credential_repo: Arc<R>,
    jwt_manager: JwtManager,
}

impl<R: CredentialRepository> AuthService<R> {
    pub fn new(credential_repo: Arc<R>, jwt_manager: JwtManager) -> Self {
        Self {
            credential_repo,
            jwt_manager,
        }
    }

    /// Verify an id/password pair for the claimed role and issue a token.
    pub async fn login(&self, input: &LoginRequest) -> Result<AuthResponse> {
        input.validate()?;

        let record = match input.role {
            Role::Student => self.credential_repo.find_student(input.id).await?,
            Role::Faculty => self.credential_repo.find_faculty(input.id).await?,
        };

        let record =
            record.ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&input.password, &record.password_hash)? {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.jwt_manager.issue(record.id, input.role)?;

        Ok(AuthResponse {
            token,
            role: input.role,
            id: record.id,
        })
    }
}

/// Verify a password against its stored Argon2 hash
fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Hash a password using Argon2 with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::repository::credential::{CredentialRecord, MockCredentialRepository};
    use mockall::predicate::*;

    fn jwt_manager() -> JwtManager {
        JwtManager::new(JwtConfig {
            secret: "test-secret-key-for-login".to_string(),
            issuer: "registrar-core".to_string(),
            token_ttl_secs: 3600,
        })
    }

    fn request(id: i64, password: &str, role: Role) -> LoginRequest {
        LoginRequest {
            id,
            password: password.to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let hash = hash_password("correct horse").unwrap();
        let mut mock = MockCredentialRepository::new();
        mock.expect_find_student().with(eq(5)).returning(move |_| {
            Ok(Some(CredentialRecord {
                id: 5,
                name: Some("Ada".to_string()),
                password_hash: hash.clone(),
            }))
        });

        let service = AuthService::new(Arc::new(mock), jwt_manager());
        let response = service
            .login(&request(5, "correct horse", Role::Student))
            .await
            .unwrap();

        assert_eq!(response.id, 5);
        assert_eq!(response.role, Role::Student);
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let hash = hash_password("correct horse").unwrap();
        let mut mock = MockCredentialRepository::new();
        mock.expect_find_student().returning(move |_| {
            Ok(Some(CredentialRecord {
                id: 5,
                name: None,
                password_hash: hash.clone(),
            }))
        });

        let service = AuthService::new(Arc::new(mock), jwt_manager());
        let result = service.login(&request(5, "wrong", Role::Student)).await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_login_unknown_id_same_error_as_wrong_password() {
        let mut mock = MockCredentialRepository::new();
        mock.expect_find_faculty().returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock), jwt_manager());
        let result = service.login(&request(99, "anything", Role::Faculty)).await;

        match result {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_role_selects_table() {
        let hash = hash_password("pw-faculty-2").unwrap();
        let mut mock = MockCredentialRepository::new();
        // A faculty login must never consult the students table.
        mock.expect_find_faculty().with(eq(2)).returning(move |_| {
            Ok(Some(CredentialRecord {
                id: 2,
                name: Some("Prof. Knuth".to_string()),
                password_hash: hash.clone(),
            }))
        });

        let service = AuthService::new(Arc::new(mock), jwt_manager());
        let response = service
            .login(&request(2, "pw-faculty-2", Role::Faculty))
            .await
            .unwrap();

        assert_eq!(response.role, Role::Faculty);
    }

    #[tokio::test]
    async fn test_login_rejects_empty_password() {
        let mock = MockCredentialRepository::new();
        let service = AuthService::new(Arc::new(mock), jwt_manager());

        let result = service.login(&request(5, "", Role::Student)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = hash_password("s3cret-pass").unwrap();
        assert!(verify_password("s3cret-pass", &hash).unwrap());
        assert!(!verify_password("other", &hash).unwrap());
    }
}
