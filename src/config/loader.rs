//! Loading and parsing of `repolab.yaml`

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::scalar::opt_string;
use super::types::{BaseSpec, ProjectConfig, SourcePackage};
use crate::error::{RepolabError, Result};

/// Project file name, looked up in the project directory
pub const PROJECT_FILE: &str = "repolab.yaml";

/// Top-level document with every key optional, so missing required keys
/// surface as `MissingKey` rather than a serde message.
#[derive(Debug, Deserialize)]
struct RawProject {
    #[serde(default, deserialize_with = "opt_string")]
    name: Option<String>,
    #[serde(default)]
    base: Option<BaseSpec>,
    #[serde(rename = "apt-packages", default)]
    apt_packages: Option<Vec<String>>,
    #[serde(rename = "source-packages", default)]
    source_packages: Option<Vec<SourcePackage>>,
    #[serde(default)]
    custom: Option<Vec<String>>,
}

/// Load `repolab.yaml` from `project_dir`.
pub fn load_project(project_dir: &Path) -> Result<ProjectConfig> {
    let path = project_dir.join(PROJECT_FILE);
    if !path.is_file() {
        return Err(RepolabError::MissingFile {
            path: PROJECT_FILE.to_string(),
            folder: project_dir.display().to_string(),
        });
    }

    info!("Reading project file {}", path.display());
    let content = fs::read_to_string(&path)?;
    parse_project(&content)
}

/// Parse project file content.
pub fn parse_project(content: &str) -> Result<ProjectConfig> {
    let raw: RawProject = serde_yaml::from_str(content)?;

    let name = raw
        .name
        .ok_or_else(|| RepolabError::missing_key("name", PROJECT_FILE))?;
    let base = raw
        .base
        .ok_or_else(|| RepolabError::missing_key("base", PROJECT_FILE))?;

    let config = ProjectConfig {
        name,
        base,
        apt_packages: raw.apt_packages,
        source_packages: raw.source_packages,
        custom: raw.custom,
    };
    debug!(?config, "Parsed project file");
    Ok(config)
}
