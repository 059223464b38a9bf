// src/storage/report.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{Config, ExtractMode};
use crate::extractors::ScanOutput;
use crate::utils::error::ReportError;

/// Summary of a successful run, saved as JSON with `--report`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub input: String,
    pub output: String,
    pub mode: ExtractMode,
    pub begin_marker: String,
    pub end_marker: String,
    pub blocks: usize,
    pub lines_scanned: usize,
    pub lines_emitted: usize,
    pub code_lines: usize,
    pub generated_at: String,
}

impl RunReport {
    pub fn new(config: &Config, output: &ScanOutput) -> Self {
        Self {
            input: config.source.display_name(),
            output: config.destination.display_name(),
            mode: config.mode,
            begin_marker: config.markers.begin().to_string(),
            end_marker: config.markers.end().to_string(),
            blocks: output.blocks,
            lines_scanned: output.lines_scanned,
            lines_emitted: output.lines.len(),
            code_lines: output.code_lines,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Writes the report as pretty JSON, replacing any existing file.
pub fn save_report(path: &Path, report: &RunReport) -> Result<PathBuf, ReportError> {
    let report_str = serde_json::to_string_pretty(report)
        .map_err(|e| ReportError::Serialization(e.to_string()))?;

    fs::write(path, report_str).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved run report to {}", path.display());

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BEGIN, DEFAULT_COMMENT_PREFIX, DEFAULT_END};
    use tempfile::tempdir;

    #[test]
    fn test_report_round_trip_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let config = Config::new(
            DEFAULT_BEGIN,
            DEFAULT_END,
            ExtractMode::Annotate,
            DEFAULT_COMMENT_PREFIX,
            Some(PathBuf::from("doc.tex")),
            None,
            Some(path.clone()),
        )
        .unwrap();
        let output = ScanOutput {
            lines: vec![b"// a".to_vec(), b"b".to_vec()],
            blocks: 1,
            lines_scanned: 4,
            code_lines: 1,
        };

        save_report(&path, &RunReport::new(&config, &output)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["input"], "doc.tex");
        assert_eq!(value["output"], "stdout");
        assert_eq!(value["mode"], "annotate");
        assert_eq!(value["begin_marker"], "\\begin{code}");
        assert_eq!(value["blocks"], 1);
        assert_eq!(value["lines_emitted"], 2);
        assert!(value["generated_at"].as_str().is_some());
    }
}
