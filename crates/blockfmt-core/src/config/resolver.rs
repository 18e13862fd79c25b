//! Configuration resolution with layered merge
//!
//! Layers, later ones overriding earlier ones field by field:
//! 1. Global defaults (`<config_dir>/blockfmt/config.toml`)
//! 2. Project config (`.blockfmt.toml` in the nearest ancestor of the
//!    document that has one), or an explicitly given file instead
//! 3. Overrides supplied by the caller (command-line flags)

use std::fs;
use std::path::{Path, PathBuf};

use super::settings::{Settings, SettingsLayer};
use crate::{Error, Result};

/// Directory name under the platform config dir.
const APP_DIR: &str = "blockfmt";
/// Global config file name.
const GLOBAL_CONFIG_FILE: &str = "config.toml";
/// Per-project config file name.
pub const PROJECT_CONFIG_FILE: &str = ".blockfmt.toml";

/// Resolves [`Settings`] for a document by merging configuration layers.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Where the search for a project config starts
    start: PathBuf,

    /// Explicit config file replacing project discovery
    config_file: Option<PathBuf>,

    /// Override for the global config directory (used for testing).
    /// When `None`, `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver for a document (or directory) at `start`.
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
            config_file: None,
            global_config_dir_override: None,
        }
    }

    /// Use a custom global config directory.
    ///
    /// Tests use this so the real user config is never read.
    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(dir.into());
        self
    }

    /// Read project settings from `path` instead of searching for
    /// `.blockfmt.toml`. The file must exist.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(APP_DIR))
    }

    /// Nearest `.blockfmt.toml` at or above the start path.
    pub fn find_project_config(&self) -> Option<PathBuf> {
        let start = if self.start.is_dir() {
            self.start.as_path()
        } else {
            self.start.parent()?
        };
        start
            .ancestors()
            .map(|dir| dir.join(PROJECT_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Merge defaults, global config, project config and `overrides`.
    ///
    /// Missing global or project files are skipped. Invalid TOML in any
    /// file is an error, as is a missing explicit config file.
    pub fn resolve(&self, overrides: &SettingsLayer) -> Result<Settings> {
        let mut settings = Settings::default();

        // Layer 1 - Global defaults
        if let Some(global_dir) = self.global_config_dir() {
            let global_config_path = global_dir.join(GLOBAL_CONFIG_FILE);
            if global_config_path.is_file() {
                tracing::debug!(?global_config_path, "Loading global config (layer 1)");
                settings.merge(&load_layer(&global_config_path)?);
            } else {
                tracing::debug!(?global_config_path, "No global config found (layer 1), skipping");
            }
        }

        // Layer 2 - Project config
        let project_config_path = match &self.config_file {
            Some(path) if path.is_file() => Some(path.clone()),
            Some(path) => return Err(Error::ConfigNotFound { path: path.clone() }),
            None => self.find_project_config(),
        };
        if let Some(path) = project_config_path {
            tracing::debug!(?path, "Loading project config (layer 2)");
            settings.merge(&load_layer(&path)?);
        }

        // Layer 3 - Caller overrides
        settings.merge(overrides);

        tracing::debug!(?settings, "Resolved settings");
        Ok(settings)
    }
}

fn load_layer(path: &Path) -> Result<SettingsLayer> {
    let content = fs::read_to_string(path)?;
    SettingsLayer::parse(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfmt_formatter::FormatterChoice;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn resolver(project: &TempDir, global: &TempDir) -> ConfigResolver {
        ConfigResolver::new(project.path().join("src/Main.purs"))
            .with_global_config_dir(global.path())
    }

    fn setup() -> (TempDir, TempDir) {
        let project = TempDir::new().unwrap();
        std::fs::create_dir_all(project.path().join("src")).unwrap();
        (project, TempDir::new().unwrap())
    }

    #[test]
    fn test_no_config_gives_defaults() {
        let (project, global) = setup();
        let settings = resolver(&project, &global)
            .resolve(&SettingsLayer::default())
            .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_project_config_found_in_ancestor() {
        let (project, global) = setup();
        std::fs::write(project.path().join(PROJECT_CONFIG_FILE), "formatter = \"purty\"").unwrap();

        let resolver = resolver(&project, &global);
        assert_eq!(
            resolver.find_project_config(),
            Some(project.path().join(PROJECT_CONFIG_FILE))
        );
        let settings = resolver.resolve(&SettingsLayer::default()).unwrap();
        assert_eq!(settings.formatter, FormatterChoice::Purty);
    }

    #[test]
    fn test_layers_override_in_order() {
        let (project, global) = setup();
        std::fs::write(
            global.path().join(GLOBAL_CONFIG_FILE),
            "formatter = \"pose\"\nonly_selection = true\n",
        )
        .unwrap();
        std::fs::write(project.path().join(PROJECT_CONFIG_FILE), "formatter = \"purty\"").unwrap();

        let overrides = SettingsLayer {
            formatter: Some(FormatterChoice::None),
            ..Default::default()
        };
        let settings = resolver(&project, &global).resolve(&overrides).unwrap();

        assert_eq!(settings.formatter, FormatterChoice::None);
        // only set globally, survives the later layers
        assert!(settings.only_selection);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let (project, global) = setup();
        std::fs::write(project.path().join(PROJECT_CONFIG_FILE), "formatter = ").unwrap();

        let err = resolver(&project, &global)
            .resolve(&SettingsLayer::default())
            .unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains(PROJECT_CONFIG_FILE));
    }

    #[test]
    fn test_explicit_config_file_replaces_discovery() {
        let (project, global) = setup();
        std::fs::write(project.path().join(PROJECT_CONFIG_FILE), "formatter = \"purty\"").unwrap();
        let explicit = project.path().join("ci.toml");
        std::fs::write(&explicit, "[normalize]\nenabled = false\n").unwrap();

        let settings = resolver(&project, &global)
            .with_config_file(&explicit)
            .resolve(&SettingsLayer::default())
            .unwrap();
        assert_eq!(settings.formatter, FormatterChoice::Tidy);
        assert!(!settings.normalize.enabled);
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let (project, global) = setup();
        let err = resolver(&project, &global)
            .with_config_file(project.path().join("missing.toml"))
            .resolve(&SettingsLayer::default())
            .unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }
}
