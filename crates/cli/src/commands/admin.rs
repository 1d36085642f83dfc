//! Dashboard user management commands.
//!
//! # Usage
//!
//! ```bash
//! aura-cli admin create -e staff@example.com -p secret
//! aura-cli admin passwd -e staff@example.com -p new-secret
//! aura-cli admin delete -e staff@example.com
//! ```
//!
//! Deleting superadmin accounts is refused, matching the dashboard UI,
//! which never offers that action.

use tracing::info;

use aura_core::{Email, UserRole};
use aura_store::db::{FileKv, UserRepository};
use aura_store::{StoreConfig, User};

use super::{CommandError, open_service};

/// Create a new dashboard user with the `admin` role.
///
/// # Errors
///
/// Returns an error if the email is invalid or already taken.
pub async fn create_user(email: &str, password: &str) -> Result<(), CommandError> {
    let email = Email::parse(email).map_err(|e| CommandError::InvalidEmail(e.to_string()))?;

    let mut service = open_service()?;
    let user = service.add_user(email, password).await?;

    info!("User created successfully!");
    info!("  ID: {}", user.id);
    info!("  Email: {}", user.email);
    info!("  Role: {}", user.role);
    Ok(())
}

/// Delete a dashboard user by email.
///
/// # Errors
///
/// Returns an error if no user has this email or the account is a
/// superadmin.
pub async fn delete_user(email: &str) -> Result<(), CommandError> {
    dotenvy::dotenv().ok();
    let config = StoreConfig::from_env()?;
    let kv = FileKv::open(config.data_dir).map_err(aura_store::RepositoryError::from)?;
    let repo = UserRepository::new(&kv);

    let user = find_by_email(&repo, email).await?;
    if user.role == UserRole::Superadmin {
        return Err(CommandError::SuperadminProtected(email.to_owned()));
    }

    repo.delete(&user.id).await?;
    info!("Deleted user {} ({})", user.email, user.id);
    Ok(())
}

/// Update a dashboard user's password.
///
/// # Errors
///
/// Returns an error if no user has this email.
pub async fn update_password(email: &str, password: &str) -> Result<(), CommandError> {
    dotenvy::dotenv().ok();
    let config = StoreConfig::from_env()?;
    let kv = FileKv::open(config.data_dir).map_err(aura_store::RepositoryError::from)?;
    let repo = UserRepository::new(&kv);

    let user = find_by_email(&repo, email).await?;
    repo.update_password(&user.id, password).await?;

    info!("Updated password for {}", user.email);
    Ok(())
}

async fn find_by_email(
    repo: &UserRepository<'_>,
    email: &str,
) -> Result<User, CommandError> {
    repo.list()
        .await?
        .into_iter()
        .find(|u| u.email.matches(email))
        .ok_or_else(|| CommandError::UserNotFound(email.to_owned()))
}
