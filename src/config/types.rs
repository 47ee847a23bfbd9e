//! Project file data model

use serde::Deserialize;

use super::scalar::opt_string;

/// The parsed `repolab.yaml`.
///
/// `name` and `base` are checked for presence by the loader, everything else
/// is optional and tested by presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Image tag used by the build and run scripts
    pub name: String,
    pub base: BaseSpec,
    pub apt_packages: Option<Vec<String>>,
    pub source_packages: Option<Vec<SourcePackage>>,
    /// Raw shell commands replacing the default build step
    pub custom: Option<Vec<String>>,
}

/// The `base` section, as written. Whitelist checks happen in
/// [`crate::base::BaseImageResolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BaseSpec {
    #[serde(default, deserialize_with = "opt_string")]
    pub system: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub cuda: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub opengl: Option<String>,
}

/// A package fetched from a git repository and built from source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourcePackage {
    pub repo: String,
    /// Identifier, also the clone directory `/<name>`
    pub name: String,
    /// System packages installed before building
    #[serde(default)]
    pub depends: Option<Vec<String>>,
}

impl BaseSpec {
    pub fn new(system: &str, version: &str) -> Self {
        Self {
            system: Some(system.to_string()),
            version: Some(version.to_string()),
            ..Default::default()
        }
    }

    pub fn with_cuda(mut self, cuda: &str) -> Self {
        self.cuda = Some(cuda.to_string());
        self
    }

    pub fn with_opengl(mut self, opengl: &str) -> Self {
        self.opengl = Some(opengl.to_string());
        self
    }
}

impl ProjectConfig {
    pub fn new(name: &str, base: BaseSpec) -> Self {
        Self {
            name: name.to_string(),
            base,
            apt_packages: None,
            source_packages: None,
            custom: None,
        }
    }
}
