//! Output layer
//!
//! - markdown.rs: one Markdown renderer per descriptor variant
//!
//! JSON output is the serde form of the report types below.

pub mod markdown;

pub use markdown::render_markdown;

use serde::Serialize;

use crate::author::presenter::{RenderDescriptor, present};
use crate::manifest::PackageAuthors;

/// Output format of rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// How a person relates to a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Author,
    Contributor,
    Maintainer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Author => "author",
            Role::Contributor => "contributor",
            Role::Maintainer => "maintainer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorEntry {
    pub role: Role,
    #[serde(flatten)]
    pub descriptor: RenderDescriptor,
}

/// Presentation of every person behind one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub package: String,
    pub entries: Vec<AuthorEntry>,
}

impl PackageReport {
    /// The author entry is always present; a missing author renders as unknown.
    pub fn new(package: &str, authors: &PackageAuthors, compact: bool) -> Self {
        let mut entries = vec![AuthorEntry {
            role: Role::Author,
            descriptor: present(authors.author.as_ref(), compact),
        }];

        let others = authors
            .contributors
            .iter()
            .map(|person| (Role::Contributor, person))
            .chain(
                authors
                    .maintainers
                    .iter()
                    .map(|person| (Role::Maintainer, person)),
            );
        entries.extend(others.map(|(role, person)| AuthorEntry {
            role,
            descriptor: present(Some(person), compact),
        }));

        Self {
            package: package.to_string(),
            entries,
        }
    }
}

pub fn render_reports(
    reports: &[PackageReport],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports),
        OutputFormat::Markdown => Ok(reports
            .iter()
            .map(report_to_markdown)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn report_to_markdown(report: &PackageReport) -> String {
    let mut out = format!("## {}\n\n", report.package);
    for entry in &report.entries {
        out.push_str(&format!(
            "- **{}**: {}\n",
            entry.role.as_str(),
            render_markdown(&entry.descriptor)
        ));
    }
    out
}
