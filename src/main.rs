#![forbid(unsafe_code)]
mod cli;
mod error;
mod ignore;
mod tree;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use tree::build_tree;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("snaptree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let path = args
        .path
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve path", args.path.display()))?;

    anyhow::ensure!(path.is_dir(), "{}: Not a directory", path.display());

    let tree = build_tree(&path, &args.tree_config())?;
    println!("{tree}");
    Ok(())
}

/// Diagnostics go to stderr; `SNAPTREE_LOG` selects the filter, e.g.
/// `SNAPTREE_LOG=snaptree::ignore=trace` shows every rule match.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("SNAPTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
