//! Stockbrief - stock analysis report renderer
//!
//! Renders a stock analysis JSON document to markdown, either as the
//! full report (with anchors and a trailing references block) or as
//! the inline chat view.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stockbrief::report::{ReportOptions, ReportRenderer, SectionKey, StockAnalysis};

/// Stockbrief - render stock analysis reports 📈
#[derive(Parser, Debug)]
#[command(name = "sbrief")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a stock analysis JSON document
    input: PathBuf,

    /// Render the chat view instead of the report view
    #[arg(long)]
    chat: bool,

    /// Comma-separated section keys to render (default: all)
    #[arg(short, long, value_delimiter = ',')]
    sections: Vec<String>,

    /// Personal comment appended after the report body
    #[arg(short = 'c', long)]
    comment: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose logging (equivalent to RUST_LOG=trace)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    let mut selected = Vec::new();
    for raw in &args.sections {
        match SectionKey::parse(raw.trim()) {
            Some(key) => selected.push(key),
            None => anyhow::bail!(
                "unknown section key '{}' (valid keys: {})",
                raw,
                valid_section_keys()
            ),
        }
    }

    let analysis = StockAnalysis::load(&args.input)?;

    let options = ReportOptions {
        selected_sections: selected,
        personal_comment: args.comment.clone(),
    };
    let renderer = ReportRenderer::with_options(options);
    let markdown = if args.chat {
        renderer.render_chat(&analysis)
    } else {
        renderer.render_report(&analysis)
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &markdown)?;
            tracing::debug!(path = %path.display(), "Wrote markdown");
        }
        None => print!("{}", markdown),
    }

    Ok(())
}

fn init_tracing(args: &Args) {
    let default_filter = if args.verbose {
        "trace"
    } else if args.debug {
        "debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn valid_section_keys() -> String {
    SectionKey::ALL
        .iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
