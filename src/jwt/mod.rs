//! JWT token handling

use crate::config::JwtConfig;
use crate::domain::Role;
use crate::error::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by the signed identity assertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (student or faculty id)
    pub sub: i64,
    /// Caller role
    pub role: Role,
    /// Issuer
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// JWT token manager
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Create a Validation with a strict leeway (5 seconds) instead of the
    /// default 60 seconds, so tokens expire promptly while still tolerating
    /// minor clock skew.
    fn strict_validation(&self) -> Validation {
        let mut v = Validation::new(Algorithm::HS256);
        v.leeway = 5;
        v.set_issuer(&[&self.config.issuer]);
        v
    }

    /// Issue a signed, time-bounded assertion binding subject id and role
    pub fn issue(&self, subject_id: i64, role: Role) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.config.token_ttl_secs);

        let claims = Claims {
            sub: subject_id,
            role,
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };
        let header = Header::new(Algorithm::HS256);
        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    /// Verify and decode a token; fails on bad signature, expiry, wrong
    /// issuer, or malformed input
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.strict_validation())?;
        Ok(token_data.claims)
    }

    /// Token validity window in seconds
    pub fn token_ttl(&self) -> i64 {
        self.config.token_ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-for-testing-purposes-only".to_string(),
            issuer: "registrar-test".to_string(),
            token_ttl_secs: 86400,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let manager = JwtManager::new(test_config());

        let token = manager.issue(42, Role::Student).unwrap();
        let claims = manager.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::Student);
        assert_eq!(claims.iss, "registrar-test");
    }

    #[test]
    fn test_faculty_role_survives_roundtrip() {
        let manager = JwtManager::new(test_config());

        let token = manager.issue(7, Role::Faculty).unwrap();
        let claims = manager.verify(&token).unwrap();

        assert_eq!(claims.role, Role::Faculty);
    }

    #[test]
    fn test_invalid_token() {
        let manager = JwtManager::new(test_config());
        assert!(manager.verify("not-a-token").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager = JwtManager::new(test_config());
        let token = manager.issue(1, Role::Student).unwrap();

        let other = JwtManager::new(JwtConfig {
            secret: "a-different-secret-entirely".to_string(),
            ..test_config()
        });
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let issuing = JwtManager::new(JwtConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        });
        let token = issuing.issue(1, Role::Student).unwrap();

        let manager = JwtManager::new(test_config());
        assert!(manager.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = JwtManager::new(JwtConfig {
            token_ttl_secs: -3600,
            ..test_config()
        });
        let token = manager.issue(1, Role::Student).unwrap();
        assert!(manager.verify(&token).is_err());
    }

    #[test]
    fn test_token_has_valid_structure() {
        let manager = JwtManager::new(test_config());
        let token = manager.issue(1, Role::Faculty).unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        for part in parts {
            assert!(!part.is_empty());
        }
    }

    #[test]
    fn test_token_ttl() {
        let manager = JwtManager::new(test_config());
        assert_eq!(manager.token_ttl(), 86400);
    }

    #[test]
    fn test_manager_clone_verifies() {
        let manager1 = JwtManager::new(test_config());
        let manager2 = manager1.clone();

        let token = manager1.issue(3, Role::Student).unwrap();
        let claims = manager2.verify(&token).unwrap();
        assert_eq!(claims.sub, 3);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims {
            sub: 5,
            role: Role::Student,
            iss: "registrar-test".to_string(),
            iat: 1_000_000,
            exp: 1_086_400,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"sub\":5"));
        assert!(json.contains("\"role\":\"student\""));
    }
}
