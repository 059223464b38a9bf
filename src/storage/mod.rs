// src/storage/mod.rs
pub mod report;
pub mod sink;

pub use report::{save_report, RunReport};
pub use sink::OutputSink;
