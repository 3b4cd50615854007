//! Configuration loading.
//!
//! `defaults/folder-tree.default.toml` is embedded into the crate so that documented and
//! runtime defaults stay in sync. Callers layer their own files and overrides on top via
//! [`Loader`] before deserializing into [`FolderTreeConfig`].

use crate::outline::formats::html::HtmlOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/folder-tree.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct FolderTreeConfig {
    pub html: HtmlOptions,
    pub output: OutputConfig,
}

/// Command-line output settings
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Registry name of the default format
    pub format: String,
}

/// Stacks outline render settings: embedded defaults first, then site files, then
/// single-key overrides. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `defaults/folder-tree.default.toml`.
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a site's TOML settings file. [`Loader::build`] fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), true)
    }

    /// Add a TOML settings file that may be missing, such as a per-site
    /// `folder-tree.toml` next to the templates.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), false)
    }

    /// Force one dotted key, e.g. `("html.escape_names", true)` for `--escape`. Fails on
    /// an unusable key path.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer into [`FolderTreeConfig`]. Missing required files and
    /// mistyped values surface here.
    pub fn build(self) -> Result<FolderTreeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings as shipped, with no site files or overrides.
pub fn load_defaults() -> Result<FolderTreeConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_html_options_default() {
        let config = load_defaults().expect("embedded defaults are valid TOML");
        assert_eq!(config.html, HtmlOptions::default());
        assert_eq!(config.output.format, "html");
    }

    #[test]
    fn cli_flags_override_single_keys() {
        let config = Loader::new()
            .set_override("html.pretty", true)
            .and_then(|loader| loader.set_override("output.format", "treeviz"))
            .and_then(Loader::build)
            .unwrap();
        assert!(config.html.pretty);
        assert_eq!(config.output.format, "treeviz");
        assert_eq!(config.html.root_class, "folder-tree");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[html]\nfile_icon = \"doc\"\nescape_names = true").unwrap();

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.html.file_icon, "doc");
        assert!(config.html.escape_names);
        assert_eq!(config.html.folder_icon, "icon-folder-close");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("/nonexistent/folder-tree.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/folder-tree.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "html");
    }

    #[test]
    fn optional_file_is_layered_when_present() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\nformat = \"yaml\"").unwrap();

        let config = Loader::new()
            .with_optional_file(file.path())
            .set_override("output.format", "json")
            .and_then(Loader::build)
            .unwrap();
        assert_eq!(config.output.format, "json");

        let config = Loader::new().with_optional_file(file.path()).build().unwrap();
        assert_eq!(config.output.format, "yaml");
    }
}
