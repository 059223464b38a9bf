// src/document/models.rs

/// A literate document held fully in memory, one entry per line.
/// Lines are raw bytes with no trailing newline; they are never decoded,
/// so code passes through in whatever encoding the source used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    lines: Vec<Vec<u8>>,
}

impl Document {
    pub fn new(name: impl Into<String>, lines: Vec<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Name used in diagnostics ("stdin" or the input path).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Iterates lines together with their 1-based line numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &[u8])> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_slice()))
    }
}
