//! Configuration loading from `tsuml.toml`.
//!
//! Configuration is optional. When no file is given on the command line and
//! none exists in the working directory, defaults are used. Paths to scan and
//! to write are never configured here: they are required arguments of each
//! command.
//!
//! # Example Configuration
//!
//! ```toml
//! [scan]
//! extensions = ["ts", "tsx", "mts"]
//! respect_gitignore = true
//!
//! [graph]
//! node_identity = "qualified"
//!
//! [render]
//! layout_engine = "/opt/graphviz/bin/dot"
//! format = "svg"
//!
//! [sketch]
//! font = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
//! ```

use crate::error::{Error, Result};
use crate::graph::NodeIdentity;
use crate::render::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "tsuml.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scan: ScanConfig,
    pub graph: GraphConfig,
    pub render: RenderConfig,
    pub sketch: SketchConfig,
}

/// Which files the source scanner picks up.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// File suffixes without the leading dot
    pub extensions: Vec<String>,
    /// Apply `.gitignore` rules while walking
    pub respect_gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["ts".to_string(), "tsx".to_string()],
            respect_gitignore: false,
        }
    }
}

impl ScanConfig {
    /// Extensions with any leading dot removed, so `.ts` and `ts` are equivalent.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub node_identity: NodeIdentity,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Graphviz executable, looked up on `PATH` unless absolute
    pub layout_engine: String,
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout_engine: "dot".to_string(),
            format: OutputFormat::Png,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    /// TrueType font for sketch labels. Falls back to well-known system fonts.
    pub font: Option<PathBuf>,
}

impl Config {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Load the explicit file if given, else `tsuml.toml` in `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading configuration");
            return Self::load(&candidate);
        }

        Ok(Self::default())
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.extensions, vec!["ts", "tsx"]);
        assert!(!config.scan.respect_gitignore);
        assert_eq!(config.graph.node_identity, NodeIdentity::Name);
        assert_eq!(config.render.layout_engine, "dot");
        assert_eq!(config.render.format, OutputFormat::Png);
        assert!(config.sketch.font.is_none());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse(
            r#"
[graph]
node_identity = "qualified"

[render]
format = "svg"
"#,
        )
        .unwrap();

        assert_eq!(config.graph.node_identity, NodeIdentity::Qualified);
        assert_eq!(config.render.format, OutputFormat::Svg);
        assert_eq!(config.render.layout_engine, "dot");
        assert_eq!(config.scan.extensions, vec!["ts", "tsx"]);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::parse("[scan]\nextension = [\"ts\"]\n").unwrap_err();
        assert!(err.contains("extension"));
    }

    #[test]
    fn test_normalized_extensions() {
        let scan = ScanConfig {
            extensions: vec![".ts".to_string(), "tsx".to_string(), ".".to_string()],
            respect_gitignore: false,
        };
        assert_eq!(scan.normalized_extensions(), vec!["ts", "tsx"]);
    }

    #[test]
    fn test_discover_prefers_explicit_then_local_file() {
        let dir = TempDir::new().unwrap();

        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.render.format, OutputFormat::Png);

        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[render]\nformat = \"dot\"\n",
        )
        .unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.render.format, OutputFormat::Dot);

        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[render]\nformat = \"svg\"\n").unwrap();
        let config = Config::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.render.format, OutputFormat::Svg);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_invalid_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[graph]\nnode_identity = \"fuzzy\"\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }
}
