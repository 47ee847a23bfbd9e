//! Project file loading
//!
//! Reads `repolab.yaml` into a [`ProjectConfig`]. Loading is all-or-nothing:
//! either every section deserializes or an error is returned.

mod loader;
mod naming;
mod scalar;
mod types;

pub use loader::{load_project, parse_project, PROJECT_FILE};
pub use naming::validate_image_name;
pub use types::{BaseSpec, ProjectConfig, SourcePackage};
