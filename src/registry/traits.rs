//! Registry trait for fetching package authors from remote sources

#[cfg(test)]
use mockall::automock;

use crate::manifest::PackageAuthors;
use crate::registry::error::RegistryError;

/// Trait for fetching the people behind a package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AuthorRegistry: Send + Sync {
    /// Fetches author, contributors and maintainers of a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "lodash" or "@types/node")
    async fn fetch_authors(&self, package_name: &str) -> Result<PackageAuthors, RegistryError>;
}
