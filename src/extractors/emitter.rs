// src/extractors/emitter.rs
use crate::config::ExtractMode;

/// Decides what each classified line contributes to the output.
///
/// The state machine in [`super::literate`] calls exactly one hook per
/// input line; the policy only appends to `out` and never changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmissionPolicy {
    /// Only the code between markers, one blank line between blocks.
    Extract,
    /// The whole document, prose commented out with `comment_prefix`.
    Annotate { comment_prefix: String },
}

impl EmissionPolicy {
    pub fn new(mode: ExtractMode, comment_prefix: &str) -> Self {
        match mode {
            ExtractMode::Extract => EmissionPolicy::Extract,
            ExtractMode::Annotate => EmissionPolicy::Annotate {
                comment_prefix: comment_prefix.to_string(),
            },
        }
    }

    /// A prose line outside any block.
    pub fn prose(&self, line: &[u8], out: &mut Vec<Vec<u8>>) {
        if let EmissionPolicy::Annotate { comment_prefix } = self {
            out.push(commented(comment_prefix, line));
        }
    }

    /// The begin marker line. `block` is the 1-based number of the block
    /// being opened.
    pub fn begin(&self, line: &[u8], block: usize, out: &mut Vec<Vec<u8>>) {
        match self {
            EmissionPolicy::Extract => {
                if block > 1 {
                    out.push(Vec::new());
                }
            }
            // Read in prose mode, so it is commented like any prose line.
            EmissionPolicy::Annotate { comment_prefix } => out.push(commented(comment_prefix, line)),
        }
    }

    /// A payload line inside a block.
    pub fn code(&self, line: &[u8], out: &mut Vec<Vec<u8>>) {
        out.push(line.to_vec());
    }

    /// The end marker line.
    pub fn end(&self, line: &[u8], out: &mut Vec<Vec<u8>>) {
        if let EmissionPolicy::Annotate { comment_prefix } = self {
            out.push(commented(comment_prefix, line));
        }
    }
}

fn commented(prefix: &str, line: &[u8]) -> Vec<u8> {
    let mut commented = Vec::with_capacity(prefix.len() + line.len());
    commented.extend_from_slice(prefix.as_bytes());
    commented.extend_from_slice(line);
    commented
}
