//! Docker image name checks for the project `name`

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{RepolabError, Result};

/// One dot-separated label of a registry host. Hosts are case-insensitive.
const DOMAIN_COMPONENT: &str = r"[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?";
/// One slash-separated repository path element, always lower case.
const PATH_COMPONENT: &str = r"[a-z0-9]+(?:(?:[._]|__|-+)[a-z0-9]+)*";
const TAG: &str = r"[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}";

fn image_name_regex() -> &'static Regex {
    static IMAGE_NAME: OnceLock<Regex> = OnceLock::new();
    IMAGE_NAME.get_or_init(|| {
        // A leading component is a registry host only when it has a port, a
        // dot, or is `localhost`.
        let domain = format!(
            r"(?:{c}(?:\.{c})*:[0-9]+|{c}(?:\.{c})+|localhost)",
            c = DOMAIN_COMPONENT
        );
        let pattern = format!(
            r"^(?:{domain}/)?{path}(?:/{path})*(?::{tag})?$",
            domain = domain,
            path = PATH_COMPONENT,
            tag = TAG,
        );
        Regex::new(&pattern).expect("image name pattern is valid")
    })
}

/// `name` becomes the `-t` argument of `docker build`, so it has to be a
/// valid image reference: optional registry host, repository path, optional tag.
pub fn validate_image_name(name: &str) -> Result<()> {
    if image_name_regex().is_match(name) {
        Ok(())
    } else {
        Err(RepolabError::InvalidImageName {
            name: name.to_string(),
        })
    }
}
