//! Local user accounts.
//!
//! Passwords are stored and compared in plaintext. This is only suitable for
//! a single-user local tool; anything shared needs real credential hashing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result, ValidationError};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// All registered users. Owner ids partition every other collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Create an account. Checks run in form order: username, password,
    /// confirmation, then uniqueness.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm: &str,
        now: DateTime<Utc>,
    ) -> Result<&User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingField("username").into());
        }
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameTooShort { min: MIN_USERNAME_LEN }.into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN }.into());
        }
        if password != confirm {
            return Err(ValidationError::PasswordMismatch.into());
        }
        if self.find_by_username(username).is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()).into());
        }

        self.users.push(User {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            password: password.to_string(),
            email: format!("{username}@example.com"),
            created_at: now,
        });
        log::debug!("registered user {username}");
        Ok(&self.users[self.users.len() - 1])
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<&User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingField("username").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or_else(|| AuthError::InvalidCredentials.into())
    }
}
