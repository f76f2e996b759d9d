//! Shared configuration loader for the weft toolchain.
//!
//! `defaults/weft.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`WeftConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use weft_ast::Language;

const DEFAULT_TOML: &str = include_str!("../defaults/weft.default.toml");

/// Top-level configuration consumed by weft applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WeftConfig {
    pub weave: WeaveConfig,
    pub page: PageConfig,
}

/// Knobs for the weaving pass itself.
#[derive(Debug, Clone, Deserialize)]
pub struct WeaveConfig {
    pub language: Language,
    pub highlighter: String,
}

/// Knobs for the assembled page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub include_sources: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WeftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_build() {
        let config = Loader::new().build().unwrap();
        assert_eq!(config.weave.language, Language::Fr);
        assert_eq!(config.weave.highlighter, "pygmentize");
        assert!(config.page.include_sources);
    }

    #[test]
    fn test_cli_override_wins_over_defaults() {
        let config = Loader::new()
            .set_override("weave.language", "en")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.weave.language, Language::En);
    }

    #[test]
    fn test_user_file_layers_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[weave]\nhighlighter = \"pygmentize-weft\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.weave.highlighter, "pygmentize-weft");
        // Untouched keys keep their defaults.
        assert_eq!(config.weave.language, Language::Fr);
    }

    #[test]
    fn test_missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does-not-exist.toml")
            .build()
            .unwrap();
        assert_eq!(config.weave.highlighter, "pygmentize");
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        assert!(Loader::new()
            .with_file("does-not-exist.toml")
            .build()
            .is_err());
    }

    #[test]
    fn test_invalid_language_is_rejected() {
        let result = Loader::new()
            .set_override("weave.language", "de")
            .unwrap()
            .build();
        assert!(result.is_err());
    }
}
