//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use starmark::output::OutputMode;

/// starmark - keep GitHub star counts in Markdown link titles fresh
#[derive(Parser, Debug)]
#[command(
    name = "starmark",
    version,
    about = "Annotate GitHub repository links in Markdown with star counts",
    long_about = "Annotate GitHub repository links in Markdown with star counts.\n\n\
                  Every [title](https://github.com/owner/repo) link gets its title\n\
                  rewritten as `title (⭐2.5k)`. Existing annotations are replaced.\n\
                  Requires a GITHUB_TOKEN environment variable."
)]
pub struct Cli {
    /// Markdown file to update
    pub file: PathBuf,

    /// Write the result here instead of overwriting the input file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the updated document instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Use this config file instead of ~/.starmark/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let options = commands::UpdateOptions {
        file: cli.file,
        output: cli.output,
        dry_run: cli.dry_run,
        config: cli.config,
    };
    commands::update(&options, output_mode)
}
