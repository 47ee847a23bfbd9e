//! Repolab - turn a repository into a JupyterLab container
//!
//! Reads `repolab.yaml` from the project directory, validates its `base`
//! section and renders a dockerfile together with build and run scripts and
//! a `.dockerignore`. A `README.md` is optionally converted into a notebook.
//!
//! # Example
//!
//! ```no_run
//! use repolab::{generate, format_output, GenerateOptions, OutputFormat};
//!
//! let report = generate(&GenerateOptions::default()).unwrap();
//! println!("{}", format_output(&report, &OutputFormat::Human));
//! ```

pub mod base;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod fragments;
pub mod notebook;
pub mod output;
pub mod writer;

pub use base::{BaseImage, BaseImageResolver, WhitelistTable, SUPPORTED};
pub use config::{load_project, parse_project, ProjectConfig};
pub use engine::{generate, GenerateOptions, GenerationReport};
pub use error::{RepolabError, Result};
pub use output::{format_output, OutputFormat};
pub use writer::Artifacts;
