// ABOUTME: JWT-based user authentication and session management
// ABOUTME: Handles password hashing, token generation, validation, and bearer extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

//! # Authentication and Session Management
//!
//! JWT-based authentication for the MyFit server. Passwords are hashed with
//! bcrypt; sessions are stateless HS256 tokens carrying the user id and
//! username. Tokens default to a seven-day expiry, matching the mobile-first
//! usage pattern of a daily-log application.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use myfit_core::errors::{AppError, AppResult};
use myfit_core::models::User;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `JWT` claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// Login name
    pub username: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// `JWT` validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// Current time for reference
        current_time: DateTime<Utc>,
    },
    /// Token signature is invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper `JWT` format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl std::fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenExpired { current_time } => {
                write!(
                    f,
                    "JWT token expired (checked at {})",
                    current_time.format("%Y-%m-%d %H:%M:%S UTC")
                )
            }
            Self::TokenInvalid { reason } => {
                write!(f, "JWT token signature is invalid: {reason}")
            }
            Self::TokenMalformed { details } => {
                write!(f, "JWT token is malformed: {details}")
            }
        }
    }
}

impl std::error::Error for JwtValidationError {}

impl From<JwtValidationError> for AppError {
    fn from(error: JwtValidationError) -> Self {
        match error {
            JwtValidationError::TokenExpired { .. } => Self::auth_expired(),
            JwtValidationError::TokenInvalid { reason } => Self::auth_invalid(reason),
            JwtValidationError::TokenMalformed { details } => Self::auth_invalid(details),
        }
    }
}

/// The authenticated caller extracted from a request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User id from the token subject
    pub user_id: Uuid,
    /// Login name from the token claims
    pub username: String,
}

/// Generate a random HS256 signing secret, hex-encoded
///
/// Used when `JWT_SECRET` is unset; tokens then survive only for the life of
/// the process, which is acceptable for development.
#[must_use]
pub fn generate_jwt_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Authentication manager for `JWT` tokens and password hashing
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new authentication manager from an HS256 secret
    #[must_use]
    pub fn new(jwt_secret: &str, token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            token_expiry_hours,
        }
    }

    /// Hash a password with bcrypt
    ///
    /// # Errors
    ///
    /// Returns an error if bcrypt hashing fails
    pub fn hash_password(password: &str) -> AppResult<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verify a password against a stored bcrypt hash
    ///
    /// # Errors
    ///
    /// Returns an error if the stored hash is not valid bcrypt
    pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
        bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))
    }

    /// Generate a `JWT` for the given user
    ///
    /// # Errors
    ///
    /// Returns an error if token encoding fails
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_expiry_hours)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))
    }

    /// When tokens issued now will expire
    #[must_use]
    pub fn token_expiry(&self) -> DateTime<Utc> {
        Utc::now() + Duration::hours(self.token_expiry_hours)
    }

    /// Validate a `JWT` and return its claims
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] describing why the token was rejected
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    JwtValidationError::TokenExpired {
                        current_time: Utc::now(),
                    }
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    JwtValidationError::TokenInvalid {
                        reason: "signature mismatch".to_owned(),
                    }
                }
                _ => JwtValidationError::TokenMalformed {
                    details: e.to_string(),
                },
            })
    }

    /// Authenticate a request from its `Authorization` header value
    ///
    /// # Errors
    ///
    /// Returns an auth error when the header is missing, not a bearer token,
    /// or the token fails validation
    pub fn authenticate_header(&self, header: Option<&str>) -> AppResult<AuthenticatedUser> {
        let header = header.ok_or_else(AppError::auth_required)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::auth_invalid("Authorization header is not a bearer token"))?;

        let claims = self.validate_token(token)?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_invalid("Token subject is not a valid user id"))?;

        Ok(AuthenticatedUser {
            user_id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn test_user() -> User {
        User::new("alice".into(), "hash".into())
    }

    fn manager() -> AuthManager {
        AuthManager::new(&generate_jwt_secret(), 24)
    }

    #[test]
    fn test_generate_and_validate_token() {
        let auth = manager();
        let user = test_user();

        let token = auth.generate_token(&user).unwrap();
        assert!(!token.is_empty());

        let claims = auth.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let auth = manager();
        assert!(auth.validate_token("not.a.jwt").is_err());
    }

    #[test]
    fn test_validate_rejects_foreign_signature() {
        let auth_a = manager();
        let auth_b = manager();
        let token = auth_a.generate_token(&test_user()).unwrap();
        assert!(auth_b.validate_token(&token).is_err());
    }

    #[test]
    fn test_authenticate_header_requires_bearer() {
        let auth = manager();
        let user = test_user();
        let token = auth.generate_token(&user).unwrap();

        let ok = auth
            .authenticate_header(Some(&format!("Bearer {token}")))
            .unwrap();
        assert_eq!(ok.user_id, user.id);

        assert!(auth.authenticate_header(Some(&token)).is_err());
        assert!(auth.authenticate_header(None).is_err());
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = AuthManager::hash_password("hunter2").unwrap();
        assert!(AuthManager::verify_password("hunter2", &hash).unwrap());
        assert!(!AuthManager::verify_password("hunter3", &hash).unwrap());
    }
}
