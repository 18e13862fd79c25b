//! Formatter executable discovery
//!
//! Lookup order:
//! 1. `bin` itself, when it names a runnable file
//! 2. `node_modules/.bin/<bin>` beside the nearest `package.json` above the
//!    document
//! 3. the `PATH`, via `which` (`where` on Windows)

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

/// Manifest marking the root of a node package.
const PACKAGE_MANIFEST: &str = "package.json";

/// Find the executable for `bin`, searching near `document_path` if given.
pub async fn find_executable(bin: &str, document_path: Option<&Path>) -> Option<PathBuf> {
    let explicit = Path::new(bin);
    if is_runnable(explicit).await {
        tracing::debug!(bin, "Using formatter executable as given");
        return Some(explicit.to_path_buf());
    }

    if let Some(local) = local_executable(bin, document_path).await {
        tracing::debug!(path = %local.display(), "Using package-local formatter executable");
        return Some(local);
    }

    let resolved = resolve_path(bin).await;
    match &resolved {
        Some(path) => tracing::debug!(path = %path.display(), "Found formatter executable on PATH"),
        None => tracing::debug!(bin, "Formatter executable not found"),
    }
    resolved
}

/// Whether `path` exists, is a regular file and may be executed.
pub async fn is_runnable(path: &Path) -> bool {
    let Ok(metadata) = tokio::fs::metadata(path).await else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// `node_modules/.bin/<bin>` next to the nearest `package.json`, if runnable.
async fn local_executable(bin: &str, document_path: Option<&Path>) -> Option<PathBuf> {
    let start = document_path?;
    let start = if start.is_dir() { start } else { start.parent()? };
    let package_root = find_package_root(start)?;

    let name = Path::new(bin).file_name()?;
    let candidate = package_root.join("node_modules").join(".bin").join(name);
    is_runnable(&candidate).await.then_some(candidate)
}

/// Nearest ancestor of `start` (inclusive) holding a `package.json`.
pub fn find_package_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PACKAGE_MANIFEST).is_file())
        .map(Path::to_path_buf)
}

/// Resolve a command name to its full path
async fn resolve_path(command: &str) -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let which_cmd = "where";
    #[cfg(not(target_os = "windows"))]
    let which_cmd = "which";

    let output = Command::new(which_cmd)
        .arg(command)
        .stderr(Stdio::null())
        .output()
        .await
        .ok()?;

    if output.status.success() {
        let path_str = String::from_utf8_lossy(&output.stdout);
        let first_line = path_str.lines().next()?.trim();
        if !first_line.is_empty() {
            return Some(PathBuf::from(first_line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::write(path, "#!/bin/sh\ncat\n").unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_find_package_root_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src/Data");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join(PACKAGE_MANIFEST), "{}").unwrap();

        assert_eq!(find_package_root(&nested).as_deref(), Some(temp.path()));
    }

    #[test]
    fn test_find_package_root_none() {
        let temp = TempDir::new().unwrap();
        // a package.json above the temp dir would be found; only check the
        // result is never inside the temp dir
        let found = find_package_root(temp.path());
        assert!(found.is_none_or(|root| !root.starts_with(temp.path())));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_runnable() {
        let temp = TempDir::new().unwrap();
        assert!(!is_runnable(&temp.path().join("nope")).await);
        assert!(!is_runnable(temp.path()).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_plain_file_is_not_runnable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plain");
        std::fs::write(&path, "x").unwrap();
        assert!(!is_runnable(&path).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("my-formatter");
        make_executable(&exe);

        let found = find_executable(exe.to_str().unwrap(), None).await;
        assert_eq!(found, Some(exe));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_package_local_executable() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PACKAGE_MANIFEST), "{}").unwrap();
        let bin_dir = temp.path().join("node_modules/.bin");
        std::fs::create_dir_all(&bin_dir).unwrap();
        let exe = bin_dir.join("blockfmt-test-formatter");
        make_executable(&exe);

        let src = temp.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        let document = src.join("Main.purs");
        std::fs::write(&document, "main = pure unit\n").unwrap();

        let found = find_executable("blockfmt-test-formatter", Some(&document)).await;
        assert_eq!(found, Some(exe));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_path_lookup() {
        let found = find_executable("sh", None).await;
        assert!(found.is_some_and(|p| p.is_absolute()));
    }

    #[tokio::test]
    async fn test_unknown_executable() {
        let found = find_executable("blockfmt-no-such-formatter-xyz", None).await;
        assert!(found.is_none());
    }
}
