// src/utils/error.rs
use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open file '{path}' for reading: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("out of memory while reading '{name}': {source}")]
    OutOfMemory {
        name: String,
        #[source]
        source: TryReserveError,
    },
}

/// Structural violations found while classifying lines.
/// Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("found end marker '{marker}' in '{name}' line {line} while not in a code block")]
    SpuriousEnd {
        name: String,
        marker: String,
        line: usize,
    },

    /// `reopened_at` is set when a second begin marker cut the block short.
    #[error(
        "code block opened at '{name}' line {line} is missing the end marker '{marker}'{}",
        reopen_note(.begin_marker, .reopened_at)
    )]
    UnterminatedBlock {
        name: String,
        marker: String,
        line: usize,
        begin_marker: String,
        reopened_at: Option<usize>,
    },

    #[error("'{name}' contained zero code blocks (no begin marker '{marker}' in {lines} lines)")]
    NoCodeBlocks {
        name: String,
        marker: String,
        lines: usize,
    },
}

fn reopen_note(begin_marker: &str, reopened_at: &Option<usize>) -> String {
    match reopened_at {
        Some(line) => format!(" (found begin marker '{}' at line {} in code mode)", begin_marker, line),
        None => String::new(),
    }
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to open file '{path}' for writing: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to truncate '{path}': {source}")]
    Truncate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to close {target}: {source}")]
    Close {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error writing report '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("report failed: {0}")]
    Report(#[from] ReportError),
}
