//! End-to-end report rendering from manifests and registries

mod helper;

use helper::MockRegistry;
use package_author::author::presenter::Variant;
use package_author::author::record::AuthorRecord;
use package_author::manifest::{authors_from_package_json, read_package_json};
use package_author::registry::{RegistryError, fetch_many};
use package_author::render::{OutputFormat, PackageReport, Role, render_reports};
use tempfile::TempDir;

#[test]
fn package_json_report_renders_markdown() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("package.json");
    std::fs::write(
        &path,
        r#"{
            "name": "demo",
            "author": "Ann (https://ann.dev)",
            "contributors": ["Bob <bob@example.com>"]
        }"#,
    )
    .unwrap();

    let authors = read_package_json(&path).unwrap();
    let report = PackageReport::new("demo", &authors, true);
    let output = render_reports(&[report], OutputFormat::Markdown).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "## demo");
    assert_eq!(lines[2], "- **author**: [Ann](https://ann.dev)");
    assert!(lines[3].starts_with("- **contributor**: ![Bob avatar](https://gravatar.com/avatar/"));
    assert!(lines[3].ends_with("?d=retro \"Bob <bob@example.com>\")"));
}

#[test]
fn package_json_report_renders_json() {
    let authors = authors_from_package_json(
        r#"{ "author": { "name": "Oct", "url": "https://github.com/octocat" } }"#,
    )
    .unwrap();

    let report = PackageReport::new("octo", &authors, false);
    let output = render_reports(&[report], OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value[0]["package"], "octo");
    assert_eq!(value[0]["entries"][0]["role"], "author");
    assert_eq!(value[0]["entries"][0]["variant"], "github");
    assert_eq!(value[0]["entries"][0]["username"], "octocat");
    assert_eq!(value[0]["entries"][0]["displayName"], "Oct");
    assert_eq!(
        value[0]["entries"][0]["avatar"]["src"],
        "https://github.com/octocat.png"
    );
}

#[tokio::test]
async fn registry_reports_cover_author_and_maintainers() {
    let registry = MockRegistry::new()
        .with_author(
            "left-pad",
            AuthorRecord::new(Some("azer"), Some("azer@example.com"), None),
        )
        .with_maintainers(
            "left-pad",
            vec![AuthorRecord::new(None, None, Some("https://github.com/stevemao"))],
        );
    let packages = vec!["left-pad".to_string(), "nope".to_string()];

    let results = fetch_many(&registry, &packages).await;

    let authors = results[0].as_ref().unwrap();
    let report = PackageReport::new("left-pad", authors, false);
    let summary: Vec<_> = report
        .entries
        .iter()
        .map(|e| (e.role, e.descriptor.variant()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Role::Author, Variant::ContactFull),
            (Role::Maintainer, Variant::Github),
        ]
    );
    assert!(matches!(results[1], Err(RegistryError::NotFound(_))));
}
