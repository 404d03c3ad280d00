use super::{ensure_output_dir, to_dot, OutputFormat};
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Renders graphs through the Graphviz `dot` executable.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    engine: String,
    format: OutputFormat,
}

impl GraphvizRenderer {
    pub fn new(engine: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            engine: engine.into(),
            format,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.layout_engine.clone(), config.format)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write `graph` to `output`, overwriting any existing file.
    pub fn render(&self, graph: &Graph, output: &Path) -> Result<()> {
        ensure_output_dir(output)?;
        let source = to_dot(graph);

        if !self.format.needs_layout_engine() {
            fs::write(output, source).map_err(|e| Error::io(output, e))?;
            tracing::info!(output = %output.display(), "wrote DOT source");
            return Ok(());
        }

        tracing::debug!(
            engine = %self.engine,
            format = %self.format,
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            "invoking layout engine"
        );

        let mut child = Command::new(&self.engine)
            .arg(format!("-T{}", self.format.as_str()))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::LayoutEngineUnavailable {
                binary: self.engine.clone(),
                source,
            })?;

        // stdin is written on its own thread while stdout/stderr are drained
        let input = child.stdin.take();
        let bytes = source.as_bytes();
        let result = thread::scope(|scope| {
            if let Some(mut stdin) = input {
                scope.spawn(move || {
                    // a failed write surfaces as a non-zero exit below
                    if let Err(e) = stdin.write_all(bytes) {
                        tracing::debug!(error = %e, "layout engine closed its input early");
                    }
                });
            }
            child.wait_with_output()
        })
        .map_err(|e| Error::io(output, e))?;

        if !result.status.success() {
            return Err(Error::LayoutEngineFailed {
                binary: self.engine.clone(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        tracing::info!(output = %output.display(), format = %self.format, "rendered diagram");
        Ok(())
    }
}
