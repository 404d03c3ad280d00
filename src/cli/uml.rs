use anyhow::{Context, Result};
use std::path::Path;

use super::theme::Console;
use crate::config::Config;
use crate::diagram::uml_graph;
use crate::render::GraphvizRenderer;

pub fn run_uml(output: &Path, config: &Config, console: Console) -> Result<()> {
    let renderer = GraphvizRenderer::from_config(&config.render);
    renderer
        .render(&uml_graph(), output)
        .with_context(|| format!("failed to render {}", output.display()))?;

    console.success(&format!("UML diagram written to {}", output.display()));
    Ok(())
}
