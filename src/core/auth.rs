//! Login check.
//!
//! Credentials are compared as plaintext with exact, case-sensitive equality. There
//! is no hashing and no rate limiting; existing database files store passwords this
//! way and the login behaviour depends on it.

use crate::{
    entities::{User, user},
    errors::Result,
};
use sea_orm::prelude::*;
use tracing::{info, warn};

/// The identity handed to the presentation layer after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// User row id
    pub user_id: i64,
    /// Login name
    pub username: String,
    /// Role label, `"employee"` when the row has none
    pub role: String,
}

impl From<user::Model> for Session {
    fn from(model: user::Model) -> Self {
        Self {
            user_id: model.id,
            username: model.username,
            role: model.role.unwrap_or_else(|| "employee".to_string()),
        }
    }
}

/// Looks up a user by exact username and password.
///
/// Returns `None` when no row matches. Has no side effects.
pub async fn authenticate(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<Option<Session>> {
    let found = User::find()
        .filter(user::Column::Username.eq(username))
        .filter(user::Column::Password.eq(password))
        .one(db)
        .await?;

    match &found {
        Some(user) => info!("User '{}' logged in", user.username),
        None => warn!("Failed login attempt for '{}'", username),
    }

    Ok(found.map(Session::from))
}
