// src/extractors/mod.rs
pub mod emitter;
pub mod literate;

// Re-export key extraction types for convenience
pub use emitter::EmissionPolicy;
pub use literate::{LiterateExtractor, ScanOutput};
