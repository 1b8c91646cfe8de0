//! Update command - refresh star annotations in a Markdown file

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use log::info;

use starmark::adapters::github::GitHubClient;
use starmark::config::Config;
use starmark::core::services::{RegexExtractor, StarUpdater};
use starmark::output::{OutputMode, UpdateReport};

/// Options for a single update run
#[derive(Debug)]
pub struct UpdateOptions {
    /// Markdown file to read
    pub file: PathBuf,
    /// Destination, defaults to `file`
    pub output: Option<PathBuf>,
    /// Print instead of writing
    pub dry_run: bool,
    /// Alternate config file
    pub config: Option<PathBuf>,
}

/// Update star annotations in a Markdown file
///
/// Nothing is written unless every link was resolved.
pub fn update(options: &UpdateOptions, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(options.config.as_deref()).context("loading configuration")?;

    let client = GitHubClient::new(&config.github, config.token.as_deref())?;
    let extractor = RegexExtractor::new(&config.github.host)
        .with_context(|| format!("invalid repository host {:?}", config.github.host))?;

    let markdown = fs::read_to_string(&options.file)
        .with_context(|| format!("reading the markdown file {}", options.file.display()))?;

    let updated = StarUpdater::new(extractor, client)
        .update(&markdown)
        .context("updating star counts")?;

    let out_path = options.output.as_ref().unwrap_or(&options.file);

    if !options.dry_run {
        fs::write(out_path, &updated.content)
            .with_context(|| format!("writing updated markdown to {}", out_path.display()))?;
        info!("wrote {}", out_path.display());
    }

    UpdateReport::new(
        &options.file.display().to_string(),
        &out_path.display().to_string(),
        options.dry_run,
        &updated,
    )
    .render(mode);

    Ok(())
}
