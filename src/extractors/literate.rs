// src/extractors/literate.rs

// --- Imports ---
use crate::config::MarkerPair;
use crate::document::Document;
use crate::extractors::emitter::EmissionPolicy;
use crate::utils::error::ScanError;

// --- Data Structures ---
/// Scan state. A scan starts and must finish in `Prose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Prose,
    Code,
}

/// What a successful scan produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    pub lines: Vec<Vec<u8>>,
    pub blocks: usize,
    pub lines_scanned: usize,
    pub code_lines: usize,
}

// --- Main Extractor Structure ---
/// Marker-driven line classifier. Markers match whole lines exactly:
/// case-sensitive, no trimming.
pub struct LiterateExtractor<'a> {
    markers: &'a MarkerPair,
    policy: &'a EmissionPolicy,
}

impl<'a> LiterateExtractor<'a> {
    pub fn new(markers: &'a MarkerPair, policy: &'a EmissionPolicy) -> Self {
        Self { markers, policy }
    }

    /// Classifies every line of `document` and collects the emitted output.
    /// Stops at the first structural violation.
    pub fn scan(&self, document: &Document) -> Result<ScanOutput, ScanError> {
        let begin = self.markers.begin();
        let end = self.markers.end();
        let (begin_bytes, end_bytes) = (begin.as_bytes(), end.as_bytes());

        let mut mode = Mode::Prose;
        let mut blocks = 0usize;
        let mut last_begin_line = 0usize;
        let mut code_lines = 0usize;
        let mut out = Vec::new();

        tracing::info!("Scanning {} ({} lines) for '{}' ... '{}'", document.name(), document.len(), begin, end);

        for (lineno, line) in document.numbered() {
            match mode {
                Mode::Prose => {
                    if line == begin_bytes {
                        blocks += 1;
                        last_begin_line = lineno;
                        mode = Mode::Code;
                        tracing::debug!("Block {} opens at line {}", blocks, lineno);
                        self.policy.begin(line, blocks, &mut out);
                    } else if line == end_bytes {
                        tracing::debug!("End marker at line {} outside a block", lineno);
                        return Err(ScanError::SpuriousEnd {
                            name: document.name().to_string(),
                            marker: end.to_string(),
                            line: lineno,
                        });
                    } else {
                        tracing::trace!("prose {}: {}", lineno, String::from_utf8_lossy(line));
                        self.policy.prose(line, &mut out);
                    }
                }
                Mode::Code => {
                    if line == begin_bytes {
                        tracing::debug!("Begin marker at line {} inside block from line {}", lineno, last_begin_line);
                        return Err(ScanError::UnterminatedBlock {
                            name: document.name().to_string(),
                            marker: end.to_string(),
                            line: last_begin_line,
                            begin_marker: begin.to_string(),
                            reopened_at: Some(lineno),
                        });
                    } else if line == end_bytes {
                        mode = Mode::Prose;
                        tracing::debug!("Block {} closes at line {}", blocks, lineno);
                        self.policy.end(line, &mut out);
                    } else {
                        tracing::trace!("code {}: {}", lineno, String::from_utf8_lossy(line));
                        code_lines += 1;
                        self.policy.code(line, &mut out);
                    }
                }
            }
        }

        if mode == Mode::Code {
            return Err(ScanError::UnterminatedBlock {
                name: document.name().to_string(),
                marker: end.to_string(),
                line: last_begin_line,
                begin_marker: begin.to_string(),
                reopened_at: None,
            });
        }

        if blocks == 0 {
            return Err(ScanError::NoCodeBlocks {
                name: document.name().to_string(),
                marker: begin.to_string(),
                lines: document.len(),
            });
        }

        tracing::info!("Found {} code blocks ({} code lines) in {}", blocks, code_lines, document.name());
        Ok(ScanOutput {
            lines: out,
            blocks,
            lines_scanned: document.len(),
            code_lines,
        })
    }
}
