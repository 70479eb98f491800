//! Shared configuration loader for the SSF converter.
//!
//! `defaults/ssf.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SsfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use ssf_parser::ssf::ConverterOptions;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/ssf.default.toml");

/// Top-level configuration consumed by SSF applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SsfConfig {
    pub markers: MarkersConfig,
    pub conversion: ConversionConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Substrings that delimit sentences.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkersConfig {
    pub sentence_start: String,
    pub sentence_end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    pub trim_lines: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub warn_dropped_tokens: bool,
}

impl SsfConfig {
    /// Options for [`ssf_parser::ssf::DocumentConverter`]
    pub fn converter_options(&self) -> ConverterOptions {
        ConverterOptions {
            sentence_start: self.markers.sentence_start.clone(),
            sentence_end: self.markers.sentence_end.clone(),
            trim_lines: self.conversion.trim_lines,
            warn_dropped_tokens: self.diagnostics.warn_dropped_tokens,
        }
    }
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SsfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SsfConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_converter_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.markers.sentence_start, "<Sentence");
        assert!(config.diagnostics.warn_dropped_tokens);
        assert_eq!(config.converter_options(), ConverterOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("diagnostics.warn_dropped_tokens", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.converter_options().warn_dropped_tokens);
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[markers]\nsentence_start = \"<s>\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.markers.sentence_start, "<s>");
        assert_eq!(config.markers.sentence_end, "</Sentence>");
        assert!(config.conversion.trim_lines);
    }

    #[test]
    fn missing_file_fails() {
        assert!(Loader::new()
            .with_file("/nonexistent/ssf.toml")
            .build()
            .is_err());
    }
}
