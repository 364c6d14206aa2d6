//! Content tests — repository loading against the bundled content
//! directory plus format/fallback behaviour against temp fixtures.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use folio::content::{
    load_portfolio, resolve_detail, ContentError, MarkdownStore,
};
use folio::model::{DetailSource, ProjectId};

fn content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content")
}

// ═══════════════════════════════════════════════════════════════════════════
// Bundled content directory
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_loads_bundled_content() {
    let portfolio = load_portfolio(&content_dir()).unwrap();

    assert_eq!(portfolio.profile.name, "Ada Okafor");
    assert_eq!(portfolio.projects().len(), 4);
    assert!(!portfolio.experiences.is_empty());
    assert!(!portfolio.education.is_empty());
    assert!(!portfolio.certifications.is_empty());
    assert!(!portfolio.skills.is_empty());
}

#[test]
fn test_bundled_project_lookup() {
    let portfolio = load_portfolio(&content_dir()).unwrap();

    let project = portfolio
        .project(&ProjectId::new("aurora-telemetry"))
        .expect("aurora-telemetry should be in the registry");
    assert_eq!(project.title, "Aurora Telemetry Logger");
    assert_eq!(
        project.detail_source(),
        Some(DetailSource::File("aurora-telemetry.md".to_string()))
    );

    assert!(portfolio.project(&ProjectId::new("no-such-project")).is_none());
}

#[test]
fn test_bundled_detail_source_variants() {
    let portfolio = load_portfolio(&content_dir()).unwrap();

    // tidepool-buoy ships its long-form text inline
    let inline = portfolio.project(&ProjectId::new("tidepool-buoy")).unwrap();
    assert!(matches!(
        inline.detail_source(),
        Some(DetailSource::Inline(_))
    ));

    // ferrite-bench has no long-form text at all
    let bare = portfolio.project(&ProjectId::new("ferrite-bench")).unwrap();
    assert_eq!(bare.detail_source(), None);
}

#[tokio::test]
async fn test_bundled_markdown_resolves() {
    let portfolio = load_portfolio(&content_dir()).unwrap();
    let store = MarkdownStore::new(&content_dir());

    let project = portfolio
        .project(&ProjectId::new("aurora-telemetry"))
        .unwrap();
    let text = resolve_detail(project, &store).await;
    assert!(text.starts_with("# Aurora Telemetry Logger"));
}

#[tokio::test]
async fn test_bundled_fallbacks() {
    let portfolio = load_portfolio(&content_dir()).unwrap();
    let store = MarkdownStore::new(&content_dir());

    // No detail source → short description
    let bare = portfolio.project(&ProjectId::new("ferrite-bench")).unwrap();
    assert_eq!(resolve_detail(bare, &store).await, bare.description);

    // Inline source → inline text, not the description
    let inline = portfolio.project(&ProjectId::new("tidepool-buoy")).unwrap();
    let text = resolve_detail(inline, &store).await;
    assert!(text.starts_with("Three buoys survived"));
}

// ═══════════════════════════════════════════════════════════════════════════
// Temp fixtures — format probing and failure fallbacks
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_bundle_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_portfolio(dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::ContentNotFound(_)));
}

#[test]
fn test_yaml_bundle_loads() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("content.yaml"),
        r#"
profile:
  name: Ada Okafor
  headline: Embedded Systems Engineer
  email: ada@example.net
projects:
  - id: alpha
    title: Alpha
    category: Firmware
    description: Alpha desc
"#,
    )
    .unwrap();

    let portfolio = load_portfolio(dir.path()).unwrap();
    assert_eq!(portfolio.projects().len(), 1);
    assert_eq!(portfolio.profile.name, "Ada Okafor");
}

#[test]
fn test_json_preferred_over_yaml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("content.json"),
        r#"{"projects": [{"id": "from-json", "title": "J", "category": "C",
            "description": "d"}]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("content.yaml"),
        "projects:\n  - id: from-yaml\n    title: Y\n    category: C\n    description: d\n",
    )
    .unwrap();

    let portfolio = load_portfolio(dir.path()).unwrap();
    assert!(portfolio.project(&ProjectId::new("from-json")).is_some());
}

#[tokio::test]
async fn test_failed_read_falls_back_to_description() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("content.json"),
        r#"{"projects": [{"id": "alpha", "title": "Alpha", "category": "Firmware",
            "description": "Alpha desc", "markdownFile": "missing.md"}]}"#,
    )
    .unwrap();

    let portfolio = load_portfolio(dir.path()).unwrap();
    let store = MarkdownStore::new(dir.path());
    let project = portfolio.project(&ProjectId::new("alpha")).unwrap();

    assert_eq!(resolve_detail(project, &store).await, "Alpha desc");
}

#[tokio::test]
async fn test_store_scoped_to_projects_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("projects")).unwrap();
    std::fs::write(dir.path().join("secret.md"), "outside").unwrap();
    std::fs::write(dir.path().join("projects/inside.md"), "inside").unwrap();

    let store = MarkdownStore::new(dir.path());
    assert_eq!(store.read("inside.md").await.unwrap(), "inside");
    assert!(store.read("../secret.md").await.is_err());
}
