use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use markdown_limelight_config::Config;
use markdown_limelight_engine::{CancelFlag, DecorationSet, Document, FeatureToggles, Range, scan};

/// Scan a Markdown file and print the decoration ranges the engine finds.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Markdown file to scan
    file: PathBuf,

    /// Cursor line for active-heading output (0-based)
    #[arg(long)]
    cursor_line: Option<usize>,

    /// TOML config file with a [features] table of booleans
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the ranges as JSON instead of a listing
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let toggles = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .map(|config| config.features)
            .unwrap_or_default(),
        None => FeatureToggles::default(),
    };

    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let doc = Document::from(text.as_str());

    let ranges = scan(&doc, cli.cursor_line, &toggles, &CancelFlag::new())
        .context("scan was cancelled")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&ranges)?);
    } else {
        print_listing(&ranges);
    }
    Ok(())
}

fn print_listing(ranges: &DecorationSet) {
    print_category("fenced code", &ranges.fenced_code);
    print_category("indented code", &ranges.indented_code);
    print_category("inline code", &ranges.inline_code);
    print_category("quote text", &ranges.quote_text);
    print_category("quote markers", &ranges.quote_markers);
    print_category("thematic breaks", &ranges.thematic_breaks);
    print_category("strikethrough", &ranges.strikethrough);
    print_category("hard breaks", &ranges.hard_breaks);
    print_category("setext level 1", &ranges.setext_h1);
    print_category("setext level 2", &ranges.setext_h2);

    if !ranges.active_headings.is_empty() {
        println!("active headings:");
        for heading in &ranges.active_headings {
            println!("  H{} {}", heading.level, format_range(heading.range));
        }
    }
}

fn print_category(name: &str, ranges: &[Range]) {
    if ranges.is_empty() {
        return;
    }
    println!("{name}:");
    for range in ranges {
        println!("  {}", format_range(*range));
    }
}

fn format_range(range: Range) -> String {
    format!(
        "{}:{}..{}:{}",
        range.start_line, range.start_col, range.end_line, range.end_col
    )
}
