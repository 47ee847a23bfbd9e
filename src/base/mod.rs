//! Base image resolution
//!
//! Validates the `base` section against the supported-value tables and
//! derives the `FROM` reference.

mod resolver;
mod whitelist;

pub use resolver::{BaseImage, BaseImageResolver, OpenGlMode, System, GPU_IMAGE_PREFIX};
pub use whitelist::{WhitelistTable, SUPPORTED};
