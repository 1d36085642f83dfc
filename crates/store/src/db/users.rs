//! User repository.
//!
//! Users decode through [`UserRow`] so records written before roles
//! existed can be migrated on load: the distinguished seed email becomes
//! `superadmin`, everything else `admin`, and the migrated collection is
//! persisted back whenever anything changed.

use aura_core::{UserId, UserRole};

use super::kv::{FileKv, keys};
use super::RepositoryError;
use crate::models::User;
use crate::models::user::UserRow;
use crate::seed;

/// Repository for dashboard user storage operations.
pub struct UserRepository<'a> {
    kv: &'a FileKv,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(kv: &'a FileKv) -> Self {
        Self { kv }
    }

    /// Load all users, seeding the default superadmin on first touch and
    /// migrating legacy role-less rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// read, is corrupt, or a migration write-back fails.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let defaults: Vec<UserRow> = seed::default_users().into_iter().map(Into::into).collect();
        let rows = self.kv.load(keys::USERS, &defaults).await?;

        let mut migrated = false;
        let users: Vec<User> = rows
            .into_iter()
            .map(|row| {
                let role = row.role.unwrap_or_else(|| {
                    migrated = true;
                    if row.email.matches(seed::SUPERADMIN_EMAIL) {
                        UserRole::Superadmin
                    } else {
                        UserRole::Admin
                    }
                });
                User {
                    id: row.id,
                    email: row.email,
                    password: row.password,
                    role,
                }
            })
            .collect();

        if migrated {
            tracing::info!("migrated users to include roles");
            self.save(&users).await?;
        }

        Ok(users)
    }

    /// Append a user, enforcing case-insensitive email uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateEmail` if any existing user
    /// shares the email (ignoring case).
    pub async fn append(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.list().await?;
        if users.iter().any(|u| u.email.matches(user.email.as_str())) {
            return Err(RepositoryError::DuplicateEmail);
        }
        users.push(user.clone());
        self.save(&users).await?;
        Ok(user)
    }

    /// Remove a user by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has this id.
    pub async fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        let mut users = self.list().await?;
        let before = users.len();
        users.retain(|u| &u.id != id);
        if users.len() == before {
            return Err(RepositoryError::NotFound);
        }
        self.save(&users).await?;
        Ok(())
    }

    /// Overwrite a user's password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has this id.
    pub async fn update_password(
        &self,
        id: &UserId,
        new_password: &str,
    ) -> Result<User, RepositoryError> {
        let mut users = self.list().await?;
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        user.password = new_password.to_owned();
        let updated = user.clone();
        self.save(&users).await?;
        Ok(updated)
    }

    /// Find the user matching these credentials, if any.
    ///
    /// Emails compare case-insensitively, passwords exactly (plaintext by
    /// demo design). Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// read.
    pub async fn find_by_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let users = self.list().await?;
        Ok(users
            .into_iter()
            .find(|u| u.email.matches(email) && u.password == password))
    }

    async fn save(&self, users: &[User]) -> Result<(), RepositoryError> {
        let rows: Vec<UserRow> = users.iter().cloned().map(Into::into).collect();
        Ok(self.kv.save(keys::USERS, &rows).await?)
    }
}
