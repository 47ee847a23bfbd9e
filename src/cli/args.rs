//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::engine::{GenerateOptions, DEFAULT_PROJECT_DIR};
use crate::notebook::DEFAULT_CONVERTER;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "repolab")]
#[command(
    author,
    version,
    about = "Generate a JupyterLab container build from repolab.yaml",
    long_about = None
)]
pub struct Args {
    /// Project root containing repolab.yaml; generated files are written here
    #[arg(long, value_name = "DIR", default_value = DEFAULT_PROJECT_DIR)]
    pub project_dir: PathBuf,

    /// Validate and print the dockerfile without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not convert README.md into a notebook
    #[arg(long)]
    pub no_notebook: bool,

    /// Markdown to notebook converter
    #[arg(long, value_name = "CMD", default_value = DEFAULT_CONVERTER)]
    pub converter: String,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            project_dir: self.project_dir.clone(),
            dry_run: self.dry_run,
            notebook: !self.no_notebook,
            converter: self.converter.clone(),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}
