use anyhow::{Context, Result};
use std::path::Path;

use super::theme::Console;
use crate::config::Config;
use crate::diagram::{render_sketch, resolve_font, sketch_scene};

pub fn run_sketch(output: &Path, config: &Config, console: Console) -> Result<()> {
    let font = resolve_font(config.sketch.font.as_deref())?;
    if font.is_none() {
        console.warning("No font available; drawing boxes and lines without labels (set [sketch] font)");
    }

    render_sketch(&sketch_scene(), font.as_ref(), output)
        .with_context(|| format!("failed to draw {}", output.display()))?;

    console.success(&format!("UML sketch written to {}", output.display()));
    Ok(())
}
