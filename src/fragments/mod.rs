//! Build specification fragments
//!
//! Each function renders one optional section of `repolab.yaml` into a block
//! of dockerfile instructions, or an empty string when the section is absent.

mod build;
mod packages;
mod templates;

pub use build::{
    build_step_fragment, copy_repo_fragment, custom_commands_fragment, default_build_fragment,
};
pub use packages::{source_packages_fragment, system_packages_fragment};
pub use templates::{notebook_setup, BUILD_JOBS};
