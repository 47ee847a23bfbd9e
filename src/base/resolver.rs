//! `base` section validation and image reference composition

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::whitelist::WhitelistTable;
use crate::config::BaseSpec;
use crate::error::{RepolabError, Result};

/// Registry namespace of the GPU-enabled images
pub const GPU_IMAGE_PREFIX: &str = "nvidia/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    Ubuntu,
    Centos,
}

impl System {
    pub fn as_str(&self) -> &'static str {
        match self {
            System::Ubuntu => "ubuntu",
            System::Centos => "centos",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for System {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s.to_lowercase().as_str() {
            "ubuntu" => Ok(System::Ubuntu),
            "centos" => Ok(System::Centos),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenGlMode {
    Runtime,
    Devel,
}

impl FromStr for OpenGlMode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s {
            "runtime" => Ok(OpenGlMode::Runtime),
            "devel" => Ok(OpenGlMode::Devel),
            _ => Err(()),
        }
    }
}

/// A validated `base` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseImage {
    pub system: System,
    pub version: String,
    pub cuda: Option<String>,
    pub opengl: Option<OpenGlMode>,
}

impl BaseImage {
    /// The image reference for the `FROM` line.
    pub fn reference(&self) -> String {
        let os = format!("{}{}", self.system, self.version);
        match (&self.cuda, &self.opengl) {
            (Some(cuda), Some(_)) => format!("nvidia/cudagl:{}-devel-{}", cuda, os),
            (Some(cuda), None) => format!("nvidia/cuda:{}-cudnn7-devel-{}", cuda, os),
            (None, Some(_)) => format!("nvidia/opengl:1.0-glvnd-devel-{}", os),
            (None, None) => format!("{}:{}", self.system, self.version),
        }
    }

    pub fn uses_gpu(&self) -> bool {
        self.reference().starts_with(GPU_IMAGE_PREFIX)
    }
}

/// Checks a [`BaseSpec`] against a [`WhitelistTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseImageResolver {
    table: WhitelistTable,
}

impl BaseImageResolver {
    pub fn new(table: WhitelistTable) -> Self {
        Self { table }
    }

    pub fn resolve(&self, base: &BaseSpec) -> Result<BaseImage> {
        let system_name = base
            .system
            .as_deref()
            .ok_or_else(|| RepolabError::missing_key("system", "base"))?;
        let version = base
            .version
            .as_deref()
            .ok_or_else(|| RepolabError::missing_key("version", "base"))?;

        let system = system_name
            .parse::<System>()
            .ok()
            .filter(|s| self.table.systems.contains(&s.as_str()))
            .ok_or_else(|| {
                RepolabError::unsupported("System", &system_name.to_lowercase(), self.table.systems)
            })?;

        let versions = self.versions(system);
        if !versions.contains(&version) {
            return Err(RepolabError::unsupported(
                &format!("{} version", system),
                version,
                versions,
            ));
        }

        if let Some(cuda) = base.cuda.as_deref() {
            if !self.table.cuda.contains(&cuda) {
                return Err(RepolabError::unsupported("CUDA version", cuda, self.table.cuda));
            }
        }

        let opengl = base
            .opengl
            .as_deref()
            .map(|mode| {
                self.table
                    .opengl
                    .contains(&mode)
                    .then(|| mode.parse::<OpenGlMode>().ok())
                    .flatten()
                    .ok_or_else(|| {
                        RepolabError::unsupported("OpenGL option", mode, self.table.opengl)
                    })
            })
            .transpose()?;

        let image = BaseImage {
            system,
            version: version.to_string(),
            cuda: base.cuda.clone(),
            opengl,
        };
        debug!(reference = %image.reference(), "Resolved base image");
        Ok(image)
    }

    fn versions(&self, system: System) -> &'static [&'static str] {
        match system {
            System::Ubuntu => self.table.ubuntu,
            System::Centos => self.table.centos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SUPPORTED;

    fn resolve(base: BaseSpec) -> Result<BaseImage> {
        BaseImageResolver::new(SUPPORTED).resolve(&base)
    }

    #[test]
    fn test_plain_os() {
        let image = resolve(BaseSpec::new("ubuntu", "18.04")).unwrap();
        assert_eq!(image.reference(), "ubuntu:18.04");
        assert!(!image.uses_gpu());
    }

    #[test]
    fn test_cuda_only() {
        let image = resolve(BaseSpec::new("ubuntu", "16.04").with_cuda("10.0")).unwrap();
        assert_eq!(image.reference(), "nvidia/cuda:10.0-cudnn7-devel-ubuntu16.04");
        assert!(image.uses_gpu());
    }

    #[test]
    fn test_opengl_only() {
        let image = resolve(BaseSpec::new("ubuntu", "18.04").with_opengl("runtime")).unwrap();
        assert_eq!(image.reference(), "nvidia/opengl:1.0-glvnd-devel-ubuntu18.04");
        assert_eq!(image.opengl, Some(OpenGlMode::Runtime));
    }

    #[test]
    fn test_cuda_and_opengl() {
        let image = resolve(
            BaseSpec::new("centos", "7").with_cuda("9.0").with_opengl("devel"),
        )
        .unwrap();
        assert_eq!(image.reference(), "nvidia/cudagl:9.0-devel-centos7");
    }

    #[test]
    fn test_system_is_case_insensitive() {
        let image = resolve(BaseSpec::new("Ubuntu", "18.04")).unwrap();
        assert_eq!(image.system, System::Ubuntu);
        assert_eq!(image.reference(), "ubuntu:18.04");
    }

    #[test]
    fn test_unsupported_system() {
        let err = resolve(BaseSpec::new("fedora", "30")).unwrap_err();
        match err {
            RepolabError::UnsupportedValue { value, valid, .. } => {
                assert_eq!(value, "fedora");
                assert_eq!(valid, vec!["ubuntu", "centos"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_version_checked_per_system() {
        let err = resolve(BaseSpec::new("centos", "18.04")).unwrap_err();
        match err {
            RepolabError::UnsupportedValue { value, valid, .. } => {
                assert_eq!(value, "18.04");
                assert_eq!(valid, vec!["7"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsupported_cuda_lists_supported_set() {
        let err = resolve(BaseSpec::new("ubuntu", "18.04").with_cuda("7.0")).unwrap_err();
        match err {
            RepolabError::UnsupportedValue { value, valid, .. } => {
                assert_eq!(value, "7.0");
                assert_eq!(valid, vec!["9.0", "9.1", "9.2", "10.0"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsupported_opengl() {
        let err = resolve(BaseSpec::new("ubuntu", "18.04").with_opengl("headless")).unwrap_err();
        assert!(err.to_string().contains("runtime, devel"));
    }

    #[test]
    fn test_missing_version() {
        let base = BaseSpec {
            system: Some("ubuntu".to_string()),
            ..Default::default()
        };
        let err = resolve(base).unwrap_err();
        assert_eq!(err.to_string(), "Key 'version' not found in base");
    }

    #[test]
    fn test_missing_system() {
        let err = resolve(BaseSpec::default()).unwrap_err();
        assert!(matches!(err, RepolabError::MissingKey { ref key, .. } if key == "system"));
    }

    #[test]
    fn test_restricted_table() {
        let table = WhitelistTable {
            ubuntu: &["18.04"],
            ..SUPPORTED
        };
        let resolver = BaseImageResolver::new(table);
        assert!(resolver.resolve(&BaseSpec::new("ubuntu", "16.04")).is_err());
        assert!(resolver.resolve(&BaseSpec::new("ubuntu", "18.04")).is_ok());
    }
}
