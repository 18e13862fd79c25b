//! End-to-end tests for the formatting flow
//!
//! Exercises the complete path against golden files in `test-fixtures/`:
//! config resolution -> formatter discovery -> process execution ->
//! block realignment -> normalised edits.

#![cfg(unix)]

use blockfmt_core::{ConfigResolver, FormatOrchestrator, SettingsLayer};
use blockfmt_formatter::InvocationContext;
use blockfmt_text::{Document, Position, TextRange, apply_edits};
use pretty_assertions::assert_eq;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Squeezes runs of spaces after the first non-space character of a line.
const SQUEEZE_SCRIPT: &str = "#!/bin/sh\nexec sed -E 's/([^ ]) +/\\1 /g'\n";

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

fn fixture(relative: &str) -> String {
    let path = fixtures_dir().join(relative);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture at {}: {}", path.display(), e))
}

/// A node-style project with the squeeze formatter installed locally.
struct Project {
    root: TempDir,
    global: TempDir,
}

impl Project {
    fn new(document: &str) -> Self {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("package.json"), r#"{"name":"demo"}"#).unwrap();

        let bin_dir = root.path().join("node_modules/.bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let exe = bin_dir.join("purs-squeeze");
        fs::write(&exe, SQUEEZE_SCRIPT).unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

        fs::write(
            root.path().join(".blockfmt.toml"),
            "[custom_formatter]\nname = \"squeeze\"\nbin = \"purs-squeeze\"\n",
        )
        .unwrap();

        fs::create_dir_all(root.path().join("src")).unwrap();
        fs::write(root.path().join("src/Main.purs"), document).unwrap();

        Self {
            root,
            global: TempDir::new().unwrap(),
        }
    }

    fn document_path(&self) -> PathBuf {
        self.root.path().join("src/Main.purs")
    }

    async fn format(&self, selection: Option<TextRange>) -> String {
        self.format_with(selection, &SettingsLayer::default()).await
    }

    async fn format_with(&self, selection: Option<TextRange>, overrides: &SettingsLayer) -> String {
        let path = self.document_path();
        let document = Document::new(&fs::read_to_string(&path).unwrap());
        let settings = ConfigResolver::new(&path)
            .with_global_config_dir(self.global.path())
            .resolve(overrides)
            .unwrap();

        let edits = FormatOrchestrator::new(settings)
            .run(&document, selection, &InvocationContext::for_document(&path))
            .await
            .unwrap();
        apply_edits(&document, &edits)
    }
}

fn lines(start: (usize, usize), end: (usize, usize)) -> TextRange {
    TextRange::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

fn root_of(path: &Path) -> &Path {
    path.parent().and_then(Path::parent).unwrap()
}

// ==========================================================================
// Golden files
// ==========================================================================

#[tokio::test]
async fn test_whole_document() {
    let project = Project::new(&fixture("documents/Main.purs"));
    assert_eq!(project.format(None).await, fixture("expected/Main.whole.purs"));
}

#[tokio::test]
async fn test_selection_inside_nested_let() {
    let project = Project::new(&fixture("documents/Main.purs"));
    let result = project.format(Some(lines((18, 0), (18, 50)))).await;
    assert_eq!(result, fixture("expected/Main.selection.purs"));
}

#[tokio::test]
async fn test_selection_spanning_blocks() {
    let project = Project::new(&fixture("documents/Main.purs"));
    let result = project.format(Some(lines((8, 0), (12, 5)))).await;
    assert_eq!(result, fixture("expected/Main.span.purs"));
}

#[tokio::test]
async fn test_formatted_document_is_stable() {
    let expected = fixture("expected/Main.whole.purs");
    let project = Project::new(&expected);

    assert_eq!(project.format(None).await, expected);
    for line in [7, 13, 18] {
        let result = project.format(Some(lines((line, 0), (line, 80)))).await;
        assert_eq!(result, expected, "selection on line {line} changed a formatted file");
    }
}

// ==========================================================================
// Line endings and configuration
// ==========================================================================

#[tokio::test]
async fn test_crlf_document_keeps_crlf() {
    let source = fixture("documents/Main.purs").replace('\n', "\r\n");
    let project = Project::new(&source);

    let result = project.format(Some(lines((18, 0), (18, 50)))).await;
    assert_eq!(
        result,
        fixture("expected/Main.selection.purs").replace('\n', "\r\n")
    );
}

#[tokio::test]
async fn test_only_selection_override_skips_formatter() {
    let source = fixture("documents/Main.purs");
    let project = Project::new(&source);
    let overrides = SettingsLayer {
        only_selection: Some(true),
        ..Default::default()
    };

    assert_eq!(project.format_with(None, &overrides).await, source);
}

#[tokio::test]
async fn test_project_config_is_found_from_document() {
    let project = Project::new(&fixture("documents/Main.purs"));
    let found = ConfigResolver::new(project.document_path()).find_project_config();
    assert_eq!(
        found.as_deref(),
        Some(root_of(&project.document_path()).join(".blockfmt.toml").as_path())
    );
}
