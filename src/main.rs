// src/main.rs
mod config;
mod document;
mod extractors;
mod storage;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use config::{Config, ExtractMode, DEFAULT_BEGIN, DEFAULT_COMMENT_PREFIX, DEFAULT_END};
use document::loader;
use extractors::{EmissionPolicy, LiterateExtractor, ScanOutput};
use storage::{OutputSink, RunReport};
use utils::AppError;

/// Extract code from a literate LaTeX or Markdown document.
///
/// For Markdown, the markers can be e.g. "```python" and "```".
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Line that denotes the beginning of a code block
    #[arg(short, long, default_value = DEFAULT_BEGIN, allow_hyphen_values = true)]
    begin: String,

    /// Line that denotes the end of a code block (must differ from --begin)
    #[arg(short, long, default_value = DEFAULT_END, allow_hyphen_values = true)]
    end: String,

    /// Write the result to FILE instead of standard output (truncated first)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Extract only the code, or annotate the whole document with prose commented out
    #[arg(short, long, value_enum, default_value_t = ExtractMode::Extract)]
    mode: ExtractMode,

    /// Prefix used to comment out prose lines in annotate mode
    #[arg(short, long, default_value = DEFAULT_COMMENT_PREFIX, allow_hyphen_values = true)]
    comment_prefix: String,

    /// Write a JSON summary of the run to FILE on success
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Input document (default: standard input)
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("litc: error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // 3. Validate configuration before touching any file
    let config = Config::new(
        &args.begin,
        &args.end,
        args.mode,
        &args.comment_prefix,
        args.input,
        args.output,
        args.report,
    )?;

    // 4. Load the whole document
    let document = loader::load(&config.source)?;

    // 5. Open (and truncate) the destination, scan, and always close it
    let mut sink = OutputSink::open(&config.destination)?;
    let written = extract_into(&config, &document, &mut sink);
    let closed = sink.close();
    let output = written?;
    closed?;

    // 6. Optional run report
    if let Some(path) = &config.report {
        storage::save_report(path, &RunReport::new(&config, &output))?;
    }

    Ok(())
}

fn extract_into(
    config: &Config,
    document: &document::Document,
    sink: &mut OutputSink,
) -> Result<ScanOutput, AppError> {
    let policy = EmissionPolicy::new(config.mode, &config.comment_prefix);
    let extractor = LiterateExtractor::new(&config.markers, &policy);

    let output = extractor.scan(document)?;
    let count = sink.write_lines(&output.lines)?;
    tracing::info!("Wrote {} lines ({} blocks) to {}", count, output.blocks, sink.target());

    Ok(output)
}
