use anyhow::{Context, Result};
use std::path::Path;

use super::theme::Console;
use crate::config::Config;
use crate::emit::ScanReport;
use crate::graph::GraphBuilder;
use crate::render::{ensure_output_dir, GraphvizRenderer};
use crate::scan::scan_directory;

/// Scan `root`, build the class/import graph, and render it to `output`.
pub fn run_analyze(
    root: &Path,
    output: &Path,
    report: Option<&Path>,
    config: &Config,
    console: Console,
) -> Result<()> {
    let identity = config.graph.node_identity;
    if let Some(report_path) = report {
        ensure_output_dir(report_path)
            .with_context(|| format!("failed to write report {}", report_path.display()))?;
    }

    let mut builder = GraphBuilder::new(identity);

    for record in scan_directory(root, &config.scan) {
        let record = record.with_context(|| format!("failed to scan {}", root.display()))?;
        builder.add_record(record);
    }
    let build = builder.finish();
    if build.graph.is_empty() {
        console.warning(&format!(
            "No classes, interfaces or imports found under {}",
            root.display()
        ));
    }

    let renderer = GraphvizRenderer::from_config(&config.render);
    renderer
        .render(&build.graph, output)
        .with_context(|| format!("failed to render {}", output.display()))?;

    if let Some(report_path) = report {
        ScanReport::new(root, identity, &build)
            .write(report_path)
            .with_context(|| format!("failed to write report {}", report_path.display()))?;
    }

    console.success(&format!("Dependency graph written to {}", output.display()));
    console.detail("files", build.records.len());
    console.detail("types", build.graph.nodes().len());
    console.detail("imports", build.graph.edges().len());
    if let Some(report_path) = report {
        console.detail("report", report_path.display());
    }
    if !build.duplicates.is_empty() {
        console.warning(&format!(
            "{} type name(s) declared in more than one file; later declarations replaced earlier nodes (use --qualified to keep both)",
            build.duplicates.len()
        ));
    }

    Ok(())
}
