//! CLI tool to strip boilerplate sentences from a CoNLL-U file.
//!
//! Usage:
//!   conllu-filter <input.conllu> <output.conllu>
//!   conllu-filter <input.conllu> <output.conllu> --patterns patterns.txt -v
//!
//! Without `--verbose`, prints `<kept>\t<removed>` on stdout for scripting.

use anyhow::{Context, Result};
use clap::Parser;
use conllu_filter::{
    DEFAULT_BUFFER_SIZE, FilterOptions, PatternSet, RunResult, check_paths, filter_file,
};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Filter large CoNLL-U files by removing boilerplate sentences.
///
/// A sentence is removed when its `# text = ` value starts with any pattern.
/// The file is streamed, so inputs larger than memory are fine.
#[derive(Parser)]
#[command(name = "conllu-filter", version)]
struct Cli {
    /// Input CoNLL-U file path
    input: PathBuf,

    /// Output CoNLL-U file path
    output: PathBuf,

    /// File containing patterns (one per line); built-in patterns when omitted
    #[arg(short, long, value_name = "FILE", env = "CONLLU_FILTER_PATTERNS")]
    patterns: Option<PathBuf>,

    /// Show progress information on stderr
    #[arg(short, long)]
    verbose: bool,

    /// I/O buffer size in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(result) => {
            if cli.verbose {
                log::info!(
                    "Done. Kept {} records, removed {} boilerplate records.",
                    result.kept,
                    result.removed
                );
            } else {
                println!("{}\t{}", result.kept, result.removed);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity default.
fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn execute(cli: &Cli) -> Result<RunResult> {
    let patterns = match &cli.patterns {
        Some(path) => {
            let patterns = PatternSet::load(path)?;
            log::info!("Loaded {} patterns from {}", patterns.len(), path.display());
            patterns
        }
        None => {
            let patterns = PatternSet::defaults();
            log::info!("Using {} default patterns", patterns.len());
            patterns
        }
    };

    check_paths(&cli.input, &cli.output)?;

    if let Some(parent) = cli.output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create output directory for '{}'", cli.output.display())
        })?;
    }

    log::info!(
        "Processing {} -> {}...",
        cli.input.display(),
        cli.output.display()
    );

    let options = FilterOptions {
        buffer_size: cli.buffer_size,
        show_progress: cli.verbose,
    };
    let result = filter_file(&cli.input, &cli.output, &patterns, &options)?;

    Ok(result)
}
