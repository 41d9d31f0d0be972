use clap::Parser;
use std::path::PathBuf;

use crate::tree::TreeConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "snaptree",
    version,
    about = "Render a directory tree honoring gitignore-style ignore rules"
)]
pub struct Args {
    /// Directory to render (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Max display depth
    #[arg(short = 'L', long = "level")]
    pub max_depth: Option<usize>,

    /// Extra gitignore-style patterns, evaluated after .gitignore (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Do not read .gitignore at the root
    #[arg(long = "no-gitignore")]
    pub no_gitignore: bool,

    /// Keep .git directories in the output
    #[arg(long = "include-git")]
    pub include_git: bool,
}

impl Args {
    /// Translate the parsed flags into a snapshot configuration.
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            max_depth: self.max_depth,
            ignore: self.ignore.clone(),
            use_gitignore: !self.no_gitignore,
            exclude_git: !self.include_git,
        }
    }
}
