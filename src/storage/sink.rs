// src/storage/sink.rs
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

use crate::config::Destination;
use crate::utils::error::SinkError;

/// Line-oriented output destination.
///
/// A file destination is opened for appending and truncated to zero
/// length up front, so whatever it held before is gone even if the run
/// later fails. Callers must finish with [`OutputSink::close`].
pub struct OutputSink {
    target: String,
    writer: BufWriter<Box<dyn Write>>,
}

impl OutputSink {
    /// Opens the destination, truncating it if it is a regular file.
    pub fn open(destination: &Destination) -> Result<Self, SinkError> {
        match destination {
            Destination::Stdout => Ok(Self::from_writer("stdout", Box::new(io::stdout()))),
            Destination::File(path) => {
                let file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .map_err(|source| SinkError::Open {
                        path: path.clone(),
                        source,
                    })?;

                let is_regular = file
                    .metadata()
                    .map(|meta| meta.is_file())
                    .map_err(|source| SinkError::Truncate {
                        path: path.clone(),
                        source,
                    })?;

                // Devices and pipes cannot be truncated.
                if is_regular {
                    file.set_len(0).map_err(|source| SinkError::Truncate {
                        path: path.clone(),
                        source,
                    })?;
                    tracing::debug!("Truncated output file {}", path.display());
                }

                Ok(Self::from_writer(path.display().to_string(), Box::new(file)))
            }
        }
    }

    pub fn from_writer(target: impl Into<String>, writer: Box<dyn Write>) -> Self {
        Self {
            target: target.into(),
            writer: BufWriter::new(writer),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Appends each line's bytes unchanged, followed by a newline.
    /// Returns the number of lines written.
    pub fn write_lines(&mut self, lines: &[Vec<u8>]) -> Result<usize, SinkError> {
        for line in lines {
            self.writer
                .write_all(line)
                .and_then(|()| self.writer.write_all(b"\n"))
                .map_err(|source| SinkError::Write {
                    target: self.target.clone(),
                    source,
                })?;
        }
        Ok(lines.len())
    }

    /// Flushes buffered output and releases the destination.
    ///
    /// Only the flush is checked. Every byte has reached the OS once it
    /// succeeds; the descriptor itself is then closed on drop, and std
    /// discards any error from that final `close(2)`. Files are not
    /// `fsync`ed, so special files such as `/dev/null` work as destinations.
    pub fn close(mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(|source| SinkError::Close {
            target: self.target.clone(),
            source,
        })?;
        tracing::debug!("Closed {}", self.target);
        Ok(())
    }
}
