// src/config.rs
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use crate::utils::AppError;

pub const DEFAULT_BEGIN: &str = "\\begin{code}";
pub const DEFAULT_END: &str = "\\end{code}";
pub const DEFAULT_COMMENT_PREFIX: &str = "// ";

/// The begin/end line markers delimiting a code region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    begin: String,
    end: String,
}

impl MarkerPair {
    /// Builds a marker pair, rejecting empty or identical markers.
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Result<Self, AppError> {
        let begin = begin.into();
        let end = end.into();

        if begin.is_empty() || end.is_empty() {
            return Err(AppError::Config("the begin and end markers must not be empty".to_string()));
        }
        if begin == end {
            return Err(AppError::Config(format!(
                "the start and end markers must be different (both are '{}')",
                begin
            )));
        }

        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self {
            begin: DEFAULT_BEGIN.to_string(),
            end: DEFAULT_END.to_string(),
        }
    }
}

/// What the run produces from a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Emit only the code inside the markers
    #[default]
    Extract,
    /// Emit the whole document with prose commented out
    Annotate,
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractMode::Extract => f.write_str("extract"),
            ExtractMode::Annotate => f.write_str("annotate"),
        }
    }
}

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn display_name(&self) -> String {
        match self {
            Source::Stdin => "stdin".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Where the emitted lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn display_name(&self) -> String {
        match self {
            Destination::Stdout => "stdout".to_string(),
            Destination::File(path) => path.display().to_string(),
        }
    }
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub markers: MarkerPair,
    pub mode: ExtractMode,
    pub comment_prefix: String,
    pub source: Source,
    pub destination: Destination,
    pub report: Option<PathBuf>,
}

impl Config {
    pub fn new(
        begin: &str,
        end: &str,
        mode: ExtractMode,
        comment_prefix: &str,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        report: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        let markers = MarkerPair::new(begin, end)?;

        if let (Some(report), Some(output)) = (&report, &output) {
            if report == output {
                return Err(AppError::Config(format!(
                    "the report file '{}' is also the output file",
                    report.display()
                )));
            }
        }

        Ok(Self {
            markers,
            mode,
            comment_prefix: comment_prefix.to_string(),
            source: input.map_or(Source::Stdin, Source::File),
            destination: output.map_or(Destination::Stdout, Destination::File),
            report,
        })
    }
}
