//! The generation pipeline
//!
//! load -> validate -> render -> write -> notebook. All validation happens
//! before the first file is written.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use crate::base::{BaseImageResolver, SUPPORTED};
use crate::config::{load_project, validate_image_name};
use crate::error::Result;
use crate::notebook::{NotebookConverter, DEFAULT_CONVERTER};
use crate::writer::{write_artifacts, Artifacts};

/// Project directory used when none is given
pub const DEFAULT_PROJECT_DIR: &str = "/project";

/// Runtime options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub project_dir: PathBuf,
    /// Render and validate only, write nothing
    pub dry_run: bool,
    /// Convert README.md into a notebook when present
    pub notebook: bool,
    pub converter: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from(DEFAULT_PROJECT_DIR),
            dry_run: false,
            notebook: true,
            converter: DEFAULT_CONVERTER.to_string(),
        }
    }
}

/// What a run produced
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub name: String,
    pub base_image: String,
    pub gpu: bool,
    pub dry_run: bool,
    pub files: Vec<PathBuf>,
    pub notebook: Option<PathBuf>,
    /// Rendered dockerfile, only reported on dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_spec: Option<String>,
    #[serde(skip)]
    pub artifacts: Artifacts,
}

#[instrument(skip(options), fields(project_dir = %options.project_dir.display()))]
pub fn generate(options: &GenerateOptions) -> Result<GenerationReport> {
    let config = load_project(&options.project_dir)?;
    validate_image_name(&config.name)?;
    let base = BaseImageResolver::new(SUPPORTED).resolve(&config.base)?;

    let artifacts = Artifacts::render(&config, &base);
    let mut report = GenerationReport {
        name: config.name.clone(),
        base_image: base.reference(),
        gpu: base.uses_gpu(),
        dry_run: options.dry_run,
        files: Vec::new(),
        notebook: None,
        build_spec: None,
        artifacts,
    };

    if options.dry_run {
        info!("Dry run, nothing written");
        report.build_spec = Some(report.artifacts.build_spec.clone());
        return Ok(report);
    }

    report.files = write_artifacts(&options.project_dir, &report.artifacts)?;
    if options.notebook {
        report.notebook = NotebookConverter::new(&options.converter).convert(&options.project_dir);
    }
    Ok(report)
}
