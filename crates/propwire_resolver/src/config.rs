use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Matching mode applied when comparing a value type with a setter parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Exact type matches only.
    Strict,
    /// Exact matches plus assignability, numeric widening and boolean boxing.
    #[default]
    Loose,
}

impl ResolutionMode {
    pub fn is_strict(self) -> bool {
        self == ResolutionMode::Strict
    }
}

impl From<bool> for ResolutionMode {
    fn from(strict: bool) -> Self {
        if strict {
            ResolutionMode::Strict
        } else {
            ResolutionMode::Loose
        }
    }
}

/// Resolver configuration as written in TOML:
///
/// ```toml
/// mode = "strict"
/// getter_prefixes = ["get", "is"]
/// setter_prefixes = ["set", "with"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub mode: ResolutionMode,
    pub getter_prefixes: Vec<String>,
    pub setter_prefixes: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: ResolutionMode::default(),
            getter_prefixes: vec!["get".to_string(), "is".to_string()],
            setter_prefixes: vec!["set".to_string()],
        }
    }
}

impl ResolverConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ResolverConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Rejects blank accessor prefixes; an empty list disables that shape.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lists = [
            ("getter_prefixes", &self.getter_prefixes),
            ("setter_prefixes", &self.setter_prefixes),
        ];
        for (key, prefixes) in lists {
            if prefixes.iter().any(|prefix| prefix.trim().is_empty()) {
                return Err(ConfigError::BlankPrefix { key });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read resolver config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid resolver config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("`{key}` contains a blank prefix")]
    BlankPrefix { key: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_bean_prefixes() {
        let config = ResolverConfig::default();
        assert_eq!(config.mode, ResolutionMode::Loose);
        assert_eq!(config.getter_prefixes, vec!["get", "is"]);
        assert_eq!(config.setter_prefixes, vec!["set"]);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = ResolverConfig::from_toml_str("mode = \"strict\"").unwrap();
        assert!(config.mode.is_strict());
        assert_eq!(config.setter_prefixes, vec!["set"]);
    }

    #[test]
    fn blank_prefix_is_rejected() {
        let error = ResolverConfig::from_toml_str("setter_prefixes = [\"set\", \" \"]")
            .expect_err("blank prefix");
        assert!(matches!(
            error,
            ConfigError::BlankPrefix {
                key: "setter_prefixes"
            }
        ));
    }

    #[test]
    fn unknown_mode_is_a_toml_error() {
        let error = ResolverConfig::from_toml_str("mode = \"lenient\"").expect_err("bad mode");
        assert!(matches!(error, ConfigError::Toml(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolver.toml");
        fs::write(&path, "getter_prefixes = [\"get\"]\n").unwrap();
        let config = ResolverConfig::load(&path).unwrap();
        assert_eq!(config.getter_prefixes, vec!["get"]);

        let error = ResolverConfig::load(dir.path().join("absent.toml")).expect_err("missing");
        assert!(matches!(error, ConfigError::Io { .. }));
    }

    #[test]
    fn strict_flag_maps_to_mode() {
        assert_eq!(ResolutionMode::from(true), ResolutionMode::Strict);
        assert_eq!(ResolutionMode::from(false), ResolutionMode::Loose);
    }
}
