//! Print the catalog.
//!
//! Without credentials this behaves like a storefront visitor: the sync
//! reconciler runs and the published catalog is shown. With `-e`/`-p`
//! the session is an admin one and the current draft is shown instead.

use tracing::info;

use super::{CommandError, open_service};

/// Print a catalog summary.
///
/// # Errors
///
/// Returns an error if configuration is missing, the store cannot be
/// read, or the supplied credentials are rejected.
pub async fn run(email: Option<&str>, password: Option<&str>) -> Result<(), CommandError> {
    let mut service = open_service()?;

    if let (Some(email), Some(password)) = (email, password) {
        let user = service
            .login(email, password)
            .await?
            .ok_or_else(|| CommandError::LoginFailed(email.to_owned()))?;
        info!("Logged in as {} ({})", user.email, user.role);
        service.set_current_admin(user.id);
    }

    let data = service.get_store_data().await?;

    info!("{}", data.store_name);
    info!("========================");
    info!("Categories: {}", data.categories.len());
    for category in &data.categories {
        let subs: Vec<&str> = category
            .subcategories
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        info!("  {} [{}]", category.name, subs.join(", "));
    }
    info!("Products: {}", data.products.len());
    for product in &data.products {
        info!(
            "  {} - {} ({})",
            product.name, product.price, product.category
        );
    }
    info!("Users: {}", data.users.len());

    Ok(())
}
