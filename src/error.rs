//! Error types for Repolab

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepolabError {
    #[error("File '{path}' not found in folder '{folder}'")]
    MissingFile { path: String, folder: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Key '{key}' not found in {container}")]
    MissingKey { key: String, container: String },

    #[error("{field} '{value}' is not supported. Valid options are: {}", .valid.join(", "))]
    UnsupportedValue {
        field: String,
        value: String,
        valid: Vec<String>,
    },

    #[error("Invalid image name '{name}': expected [host[:port]/]path[:tag]")]
    InvalidImageName { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepolabError {
    pub(crate) fn missing_key(key: &str, container: &str) -> Self {
        RepolabError::MissingKey {
            key: key.to_string(),
            container: container.to_string(),
        }
    }

    pub(crate) fn unsupported(field: &str, value: &str, valid: &[&str]) -> Self {
        RepolabError::UnsupportedValue {
            field: field.to_string(),
            value: value.to_string(),
            valid: valid.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl From<serde_yaml::Error> for RepolabError {
    fn from(e: serde_yaml::Error) -> Self {
        RepolabError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepolabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_lists_options() {
        let err = RepolabError::unsupported("System", "fedora", &["ubuntu", "centos"]);
        assert_eq!(
            err.to_string(),
            "System 'fedora' is not supported. Valid options are: ubuntu, centos"
        );
    }

    #[test]
    fn test_missing_key_names_container() {
        let err = RepolabError::missing_key("version", "base");
        assert_eq!(err.to_string(), "Key 'version' not found in base");
    }
}
