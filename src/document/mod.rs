// src/document/mod.rs
pub mod loader;
pub mod models;

pub use models::Document;
