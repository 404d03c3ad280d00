use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::OutputFormat;

/// Scan TypeScript sources for classes and imports and render UML-style diagrams.
#[derive(Parser, Debug)]
#[command(name = "tsuml")]
#[command(author, version, about)]
#[command(after_help = "Examples:
  tsuml analyze ./src -o deps.png        Dependency graph of a TypeScript tree
  tsuml analyze ./src -o deps.dot --format dot
  tsuml uml -o piis.svg --format svg     Fixed PIIS class diagram
  tsuml sketch -o piis.png               Fixed PIIS raster sketch")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (defaults to ./tsuml.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a source tree and render its class/import graph
    Analyze {
        /// Directory to scan
        root: PathBuf,

        /// Where to write the diagram (overwritten)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Source file extension to scan; repeatable (overrides config)
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,

        /// Key nodes by file path and type name instead of type name alone
        #[arg(long)]
        qualified: bool,

        /// Skip files ignored by .gitignore
        #[arg(long)]
        gitignore: bool,

        /// Also write a JSON summary of the scan
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Render the fixed four-class UML diagram through Graphviz
    Uml {
        /// Where to write the diagram (overwritten)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Paint the fixed four-class sketch as a PNG
    Sketch {
        /// Where to write the PNG (overwritten)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// TrueType font for labels (overrides config)
        #[arg(long, value_name = "FILE")]
        font: Option<PathBuf>,
    },
}
