//! Authentication: credential checks and token issuance.

mod password;
mod token;

pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenKeys};

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{NewUser, UserInfo};
use crate::repository::UserRepository;

/// The authentication gate: registers users, checks credentials, and turns
/// bearer tokens back into identities. Wraps every notes operation except
/// registration and login themselves.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    keys: TokenKeys,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, keys: TokenKeys) -> Self {
        Self { users, keys }
    }

    /// Create an account and sign a token for it.
    ///
    /// Fails with [`Error::Validation`] if any field is missing and
    /// [`Error::EmailTaken`] if the email is already registered.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(UserInfo, String)> {
        if full_name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(Error::validation("All fields are required"));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(Error::EmailTaken);
        }

        let password_hash = hash_password(password)?;
        let user = self
            .users
            .create(NewUser {
                full_name: full_name.to_owned(),
                email: email.to_owned(),
                password_hash,
            })
            .await?;

        tracing::info!(user = %user.id, "registered new account");

        let token = self.keys.issue(user.id, &user.email)?;
        Ok((user.to_info(), token))
    }

    /// Check credentials and sign a fresh token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller;
    /// both surface as [`Error::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        if email.is_empty() || password.is_empty() {
            return Err(Error::validation("Email and password are required"));
        }

        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(Error::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(Error::InvalidCredentials);
        }

        tracing::debug!(user = %user.id, "login succeeded");
        self.keys.issue(user.id, &user.email)
    }

    /// Resolve a bearer token to the identity it was issued for.
    pub fn authenticate(&self, token: &str) -> Result<Claims> {
        self.keys.verify(token)
    }

    /// Look up the profile for an authenticated identity.
    pub async fn get_user(&self, id: Uuid) -> Result<UserInfo> {
        self.users
            .find_by_id(id)
            .await?
            .map(|user| user.to_info())
            .ok_or(Error::UserNotFound)
    }
}
