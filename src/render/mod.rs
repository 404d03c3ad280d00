//! Turning a [`Graph`](crate::graph::Graph) into an artifact on disk.
//!
//! The DOT source is produced here; laying it out and rasterizing it is left
//! to the Graphviz `dot` executable.

mod dot;
mod graphviz;

pub use dot::{quote, to_dot, write_dot};
pub use graphviz::GraphvizRenderer;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// What the renderer writes to the output path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raster image laid out by Graphviz
    #[default]
    Png,
    /// Vector image laid out by Graphviz
    Svg,
    /// DOT source only; Graphviz is not invoked
    Dot,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }

    pub fn needs_layout_engine(&self) -> bool {
        !matches!(self, OutputFormat::Dot)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fail with [`Error::OutputDirMissing`] unless the directory `output` will be
/// written into exists. Nothing is created.
pub fn ensure_output_dir(output: &Path) -> Result<()> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            Err(Error::OutputDirMissing(dir.to_path_buf()))
        }
        _ => Ok(()),
    }
}
