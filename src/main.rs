use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tsuml::cli::{print_error, run_analyze, run_sketch, run_uml, Args, Command, Console};
use tsuml::config::Config;
use tsuml::graph::NodeIdentity;

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config = Config::discover(args.config.as_deref(), &cwd)?;
    let console = Console::new(args.quiet);

    match args.command {
        Command::Analyze {
            root,
            output,
            format,
            extensions,
            qualified,
            gitignore,
            report,
        } => {
            if let Some(format) = format {
                config.render.format = format;
            }
            if !extensions.is_empty() {
                config.scan.extensions = extensions;
            }
            if qualified {
                config.graph.node_identity = NodeIdentity::Qualified;
            }
            if gitignore {
                config.scan.respect_gitignore = true;
            }
            run_analyze(&root, &output, report.as_deref(), &config, console)
        }
        Command::Uml { output, format } => {
            if let Some(format) = format {
                config.render.format = format;
            }
            run_uml(&output, &config, console)
        }
        Command::Sketch { output, font } => {
            if font.is_some() {
                config.sketch.font = font;
            }
            run_sketch(&output, &config, console)
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
