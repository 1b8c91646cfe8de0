//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::{STAR_GLYPH, Update};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of updating one document
#[derive(Debug, Serialize)]
pub struct UpdateReport {
    /// File that was read
    pub input: String,
    /// File that was (or would be) written
    pub output: String,
    /// Whether the document was printed instead of written
    pub dry_run: bool,
    /// Whether the content changed
    pub changed: bool,
    /// Every annotated link, in document order
    pub links: Vec<LinkReport>,
    /// Rewritten document, only carried for dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// One annotated link
#[derive(Debug, Serialize)]
pub struct LinkReport {
    /// `owner/name`
    pub repo: String,
    /// Repository URL
    pub url: String,
    /// Title after annotation
    pub title: String,
    /// Raw star count
    pub stars: u64,
    /// Compact star count
    pub formatted: String,
}

impl UpdateReport {
    /// Build a report from an update pass
    #[must_use]
    pub fn new(input: &str, output: &str, dry_run: bool, update: &Update) -> Self {
        let links = update
            .links
            .iter()
            .map(|link| LinkReport {
                repo: link.repo.full_name(),
                url: link.repo.url().to_string(),
                title: link.new_title.clone(),
                stars: link.stars,
                formatted: link.formatted.clone(),
            })
            .collect();

        Self {
            input: input.to_string(),
            output: output.to_string(),
            dry_run,
            changed: update.changed(),
            links,
            content: dry_run.then(|| update.content.clone()),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        // Dry runs print the document itself and nothing else on stdout
        if let Some(content) = &self.content {
            print!("{content}");
            return;
        }

        if self.links.is_empty() {
            println!("No repository links found in {}.", self.input);
            return;
        }

        for link in &self.links {
            println!(
                "  {} {} {}",
                "✓".green(),
                link.repo.bold(),
                format!("{STAR_GLYPH}{}", link.formatted).yellow()
            );
        }
        println!();

        if self.changed {
            println!("Markdown file updated successfully: {}", self.output);
        } else {
            println!("Star counts already up to date: {}", self.output);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
