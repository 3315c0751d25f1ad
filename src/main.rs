//! sitetree - Generate a static site's content module from a directory.
//!
//! Usage:
//!   sitetree [SOURCE]                 Build ../tallow-native into content.js
//!   sitetree SOURCE -o site/data.js   Write to a different file
//!   sitetree SOURCE --stdout          Print the module instead of writing it
//!   sitetree --help                   Show help

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sitetree_build::{BuildConfig, TreeBuilder, render_module, write_module};

#[derive(Parser)]
#[command(
    name = "sitetree",
    version,
    about = "Generate a static site's content module from a directory",
    long_about = "sitetree walks a source directory, labels every file and folder, \
                  and writes the result as a JavaScript module binding a single \
                  constant to `{ tree: [...] }`."
)]
struct Cli {
    /// Source directory to walk
    #[arg(default_value = "../tallow-native")]
    source: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "content.js")]
    output: PathBuf,

    /// Print the module to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    run_build(&cli.source, &cli.output, cli.stdout)
}

/// Log to stderr, `sitetree=info` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitetree=info,sitetree_build=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the tree and emit the module.
fn run_build(source: &Path, output: &Path, to_stdout: bool) -> Result<()> {
    let config = BuildConfig::new(source);
    let tree = TreeBuilder::new(config.clone())
        .build()
        .wrap_err_with(|| format!("Failed to build tree from {}", source.display()))?;

    let module = render_module(&tree, &config.const_name, Utc::now())
        .wrap_err("Failed to render content module")?;

    if to_stdout {
        print!("{module}");
        return Ok(());
    }

    let bytes = write_module(output, &module).wrap_err("Failed to write content module")?;
    let summary = tree.summary();
    eprintln!(
        "Written to {} ({}, {} files in {} folders)",
        output.display(),
        format_size(bytes),
        summary.files,
        summary.folders
    );
    if summary.unreadable > 0 {
        eprintln!("{} file(s) could not be read", summary.unreadable);
    }

    Ok(())
}

/// Format bytes as human-readable size.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
