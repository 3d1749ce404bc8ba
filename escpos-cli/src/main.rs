//! escpos-cli command line tool
//!
//! Renders JSON print jobs and image receipts to raw ESC/POS bytes, and
//! lists the code page registry.

mod config;
mod job;
mod logger;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use escpos_encoder::codepage;
use escpos_encoder::{PrinterType, ReceiptConfig, ReceiptModel, render_images};

use crate::config::Config;
use crate::job::PrintJob;

#[derive(Parser)]
#[command(name = "escpos-cli")]
#[command(author, version, about = "ESC/POS encoder for thermal receipt printers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON print job
    Render {
        /// Job file: `{ "options": {...}, "commands": [...] }`
        job: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print images as one receipt
    Images {
        /// Paper model: 58 or 80
        #[arg(short, long, default_value = "80")]
        model: ReceiptModel,

        /// Image files (PNG, JPEG, WebP), printed in order
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List registered code pages
    Codepages {
        /// Only pages tagged with this language (e.g. ru, el)
        #[arg(short, long)]
        language: Option<String>,

        /// Show the ESC t selector for this printer vendor
        #[arg(long)]
        vendor: Option<PrinterType>,
    },
}

fn main() -> anyhow::Result<()> {
    // 1. Load .env and configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Logging to stderr, stdout carries printer bytes
    logger::init_logger(&config.log_level, config.log_json)?;

    // 3. Dispatch
    let cli = Cli::parse();
    match cli.command {
        Commands::Render { job, output } => render(&job, output.as_deref()),
        Commands::Images {
            model,
            images,
            output,
        } => print_images(model, &images, output.as_deref()),
        Commands::Codepages { language, vendor } => {
            list_codepages(language.as_deref(), vendor);
            Ok(())
        }
    }
}

fn render(path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read job {}", path.display()))?;
    let job: PrintJob = serde_json::from_str(&text)
        .with_context(|| format!("invalid job {}", path.display()))?;

    let base_dir = path.parent().unwrap_or(Path::new("."));
    let bytes = job.run(base_dir)?;
    tracing::info!(job = %path.display(), bytes = bytes.len(), "job rendered");
    write_output(output, &bytes)
}

fn print_images(model: ReceiptModel, paths: &[PathBuf], output: Option<&Path>) -> anyhow::Result<()> {
    let images = paths
        .iter()
        .map(|path| {
            fs::read(path).with_context(|| format!("failed to read image {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let bytes = render_images(&ReceiptConfig::new(model), &images)?;
    write_output(output, &bytes)
}

fn list_codepages(language: Option<&str>, vendor: Option<PrinterType>) {
    let pages = codepage::registry().filter(|info| {
        language.is_none_or(|language| info.languages.iter().any(|tag| *tag == language))
    });
    for info in pages {
        let selector = match vendor {
            Some(vendor) => vendor
                .selector(info.id)
                .map_or_else(|| "-".to_string(), |s| format!("{s:#04x}")),
            None => String::new(),
        };
        println!(
            "{:<12} {:<28} {:<12} {}",
            info.id,
            info.name,
            info.languages.join(","),
            selector
        );
    }
}

/// Write the whole document at once, to a file or stdout
fn write_output(output: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, bytes)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
