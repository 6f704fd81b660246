//! Registry layer for looking up package authors remotely
//!
//! # Modules
//!
//! - [`traits`]: `AuthorRegistry` trait for fetching people from remote sources
//! - [`npm`]: npm registry implementation
//! - [`error`]: Error types for registry operations

pub mod error;
pub mod npm;
pub mod traits;

pub use error::RegistryError;
pub use npm::NpmRegistry;
pub use traits::AuthorRegistry;

use futures::future::join_all;

use crate::manifest::PackageAuthors;

/// Fetches several packages concurrently, keeping the input order.
pub async fn fetch_many(
    registry: &dyn AuthorRegistry,
    packages: &[String],
) -> Vec<Result<PackageAuthors, RegistryError>> {
    join_all(packages.iter().map(|name| registry.fetch_authors(name))).await
}
