//! Generation engine

pub mod generator;

pub use generator::{generate, GenerateOptions, GenerationReport, DEFAULT_PROJECT_DIR};
