// src/document/loader.rs
use std::fs::File;
use std::io::{self, ErrorKind, Read};

use crate::config::Source;
use crate::document::models::Document;
use crate::utils::error::LoadError;

const READ_CHUNK_SIZE: usize = 4096;

/// Loads the whole document from the configured source.
pub fn load(source: &Source) -> Result<Document, LoadError> {
    let name = source.display_name();

    let bytes = match source {
        Source::Stdin => {
            tracing::debug!("Reading document from stdin");
            read_all(&mut io::stdin().lock(), &name)?
        }
        Source::File(path) => {
            tracing::debug!("Reading document from {}", path.display());
            let mut file = File::open(path).map_err(|source| LoadError::Open {
                path: path.clone(),
                source,
            })?;
            read_all(&mut file, &name)?
        }
    };

    tracing::info!("Read {} bytes from {}", bytes.len(), name);

    if std::str::from_utf8(&bytes).is_err() {
        tracing::debug!("'{}' is not valid UTF-8; lines pass through as raw bytes", name);
    }

    let lines = split_lines(&bytes, &name)?;
    tracing::info!("Split {} into {} lines", name, lines.len());

    Ok(Document::new(name, lines))
}

/// Reads the reader to the end, growing the buffer fallibly so an
/// allocation failure surfaces as `LoadError::OutOfMemory`.
pub fn read_all<R: Read>(reader: &mut R, name: &str) -> Result<Vec<u8>, LoadError> {
    let mut buffer: Vec<u8> = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        let count = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(count) => count,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(LoadError::Read {
                    name: name.to_string(),
                    source,
                })
            }
        };

        buffer
            .try_reserve(count)
            .map_err(|source| LoadError::OutOfMemory {
                name: name.to_string(),
                source,
            })?;
        buffer.extend_from_slice(&chunk[..count]);
    }

    Ok(buffer)
}

/// Splits raw bytes on `\n`. Empty lines are kept; a final newline does not
/// produce an extra empty line. No decoding happens here.
pub fn split_lines(text: &[u8], name: &str) -> Result<Vec<Vec<u8>>, LoadError> {
    let mut lines: Vec<Vec<u8>> = Vec::new();
    if text.is_empty() {
        return Ok(lines);
    }

    let body = text.strip_suffix(b"\n").unwrap_or(text);
    let expected = body.iter().filter(|&&b| b == b'\n').count() + 1;

    lines
        .try_reserve_exact(expected)
        .map_err(|source| LoadError::OutOfMemory {
            name: name.to_string(),
            source,
        })?;

    lines.extend(body.split(|&b| b == b'\n').map(<[u8]>::to_vec));
    Ok(lines)
}
