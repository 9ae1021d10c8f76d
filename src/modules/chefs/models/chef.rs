use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// A row of the `CHEF` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Chef {
    pub id: i32,
    pub username: String,
    pub email: String,

    /// Stored credential, never written into responses
    #[serde(skip_serializing, default)]
    pub password: String,

    pub is_admin: bool,
}

impl Chef {
    pub fn new(
        id: i32,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        is_admin: bool,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            password: password.into(),
            is_admin,
        }
    }
}

/// Payload for creating or replacing a chef
#[derive(Debug, Clone, Deserialize)]
pub struct ChefRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl ChefRequest {
    /// Check the fields a chef row cannot do without
    pub fn validate(&self) -> Result<()> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username must not be empty"));
        }
        if username.chars().count() > 255 {
            return Err(AppError::validation("Username must be at most 255 characters"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::validation("Email must not be empty"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(AppError::validation(format!(
                    "'{}' is not a valid email address",
                    email
                )))
            }
        }

        if self.password.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }

        Ok(())
    }

    /// Build the chef entity; `id` is 0 until the database assigns one
    pub fn into_chef(self, id: i32, password_hash: String) -> Chef {
        Chef {
            id,
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: password_hash,
            is_admin: self.is_admin,
        }
    }
}
