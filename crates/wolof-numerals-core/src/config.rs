//! Configuration management.
//!
//! Loads `config.toml` from an explicit path or from the platform config
//! directory (`~/.config/wolof-numerals/config.toml` on Linux).

use crate::composer::NumeralRenderer;
use crate::error::{SpellerError, SpellerResult};
use crate::lexicon::Lexicon;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How renderings are written by front ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One rendering per line
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// Default `tracing` filter directive for front ends
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Speller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpellerConfig {
    /// Custom lexicon file; the built-in Wolof lexicon is used when unset
    pub lexicon: Option<PathBuf>,
    /// Output format for front ends
    pub output: OutputFormat,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for SpellerConfig {
    fn default() -> Self {
        Self {
            lexicon: None,
            output: OutputFormat::Plain,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SpellerConfig {
    /// Default config file location, if the platform has a config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wolof-numerals")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and defaults are used if nothing is there.
    ///
    /// # Errors
    ///
    /// Returns a file error if an explicit file cannot be read, or a
    /// configuration error if the content is not valid.
    pub fn load(path: Option<&Path>) -> SpellerResult<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns a configuration error on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> SpellerResult<Self> {
        Ok(toml::from_str(content)?)
    }

    fn from_file(path: &Path) -> SpellerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpellerError::file(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let mut config = Self::from_toml_str(&content)?;

        // Relative lexicon paths are resolved against the config file.
        if let (Some(lexicon), Some(dir)) = (config.lexicon.as_mut(), path.parent()) {
            if lexicon.is_relative() {
                *lexicon = dir.join(&*lexicon);
            }
        }

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the renderer this configuration describes
    ///
    /// # Errors
    ///
    /// Returns the lexicon loading errors of [`Lexicon::from_file`].
    pub fn build_renderer(&self) -> SpellerResult<NumeralRenderer> {
        match &self.lexicon {
            Some(path) => NumeralRenderer::with_lexicon(Lexicon::from_file(path)?),
            None => Ok(NumeralRenderer::wolof()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SpellerConfig::default();
        assert_eq!(config.lexicon, None);
        assert_eq!(config.output, OutputFormat::Plain);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_parse() {
        let config = SpellerConfig::from_toml_str(
            "lexicon = \"/tmp/lex.toml\"\noutput = \"json\"\nlog_filter = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.lexicon, Some(PathBuf::from("/tmp/lex.toml")));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_log_filter_alone() {
        let config = SpellerConfig::from_toml_str("log_filter = \"debug\"\n").unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.lexicon, None);
        assert_eq!(config.output, OutputFormat::Plain);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SpellerConfig::from_toml_str("lexcon = \"x\"").unwrap_err();
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = SpellerConfig::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, SpellerError::FileError { .. }));
    }

    #[test]
    fn test_relative_lexicon_resolved_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "lexicon = \"lex.toml\"\n").unwrap();

        let config = SpellerConfig::load(Some(config_path.as_path())).unwrap();
        assert_eq!(config.lexicon, Some(dir.path().join("lex.toml")));
    }

    #[test]
    fn test_build_renderer_from_lexicon_file() {
        let dir = TempDir::new().unwrap();
        let mut lexicon = Lexicon::wolof().clone();
        lexicon.conjunction = "ag".to_string();
        fs::write(dir.path().join("lex.toml"), toml::to_string(&lexicon).unwrap()).unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "lexicon = \"lex.toml\"\n").unwrap();

        let renderer = SpellerConfig::load(Some(config_path.as_path()))
            .unwrap()
            .build_renderer()
            .unwrap();
        assert_eq!(renderer.render_number(15), "fukk ag juróom");
    }
}
