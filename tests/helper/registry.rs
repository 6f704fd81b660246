//! Registry test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use package_author::author::record::AuthorRecord;
use package_author::manifest::PackageAuthors;
use package_author::registry::{AuthorRegistry, RegistryError};

/// Mock registry for testing
#[derive(Default)]
pub struct MockRegistry {
    packages: HashMap<String, PackageAuthors>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, package: &str, author: AuthorRecord) -> Self {
        self.packages
            .entry(package.to_string())
            .or_insert_with(|| PackageAuthors {
                name: Some(package.to_string()),
                ..PackageAuthors::default()
            })
            .author = Some(author);
        self
    }

    pub fn with_maintainers(mut self, package: &str, maintainers: Vec<AuthorRecord>) -> Self {
        self.packages
            .entry(package.to_string())
            .or_insert_with(|| PackageAuthors {
                name: Some(package.to_string()),
                ..PackageAuthors::default()
            })
            .maintainers = maintainers;
        self
    }
}

#[async_trait]
impl AuthorRegistry for MockRegistry {
    async fn fetch_authors(&self, package_name: &str) -> Result<PackageAuthors, RegistryError> {
        self.packages
            .get(package_name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(package_name.to_string()))
    }
}
