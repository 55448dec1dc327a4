//! filesig - Magic-number file type identifier
//!
//! Classifies files by matching their leading bytes against a text
//! database of binary signatures, scanning a single file or a whole
//! directory tree.

mod report;
mod scan;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use filesig_core::SignatureDatabase;

#[derive(Parser, Debug)]
#[command(name = "filesig")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Identify file types by their magic-number signatures")]
struct Cli {
    /// File or directory to classify
    path: Option<PathBuf>,

    /// Signature definitions file
    #[arg(short, long, default_value = "file_sig.data")]
    signatures: PathBuf,

    /// Enable debug output on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let database = SignatureDatabase::load(&cli.signatures).with_context(|| {
        format!(
            "failed to load signature database {}",
            cli.signatures.display()
        )
    })?;

    // The summary line is printed on every invocation, before any results.
    println!("{}", report::summary_line(&database));

    match cli.path {
        // lstat semantics: a symlink argument counts as an existing path
        // even when its target is gone.
        Some(ref path) if path.symlink_metadata().is_ok() => {
            scan::run(path, &database);
        }
        _ => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "filesig".to_string());
            println!("{}", report::usage_line(&program));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
