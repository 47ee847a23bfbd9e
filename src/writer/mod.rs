//! Rendering and writing of the generated files

mod artifacts;
mod files;

pub use artifacts::{
    render_build_script, render_build_spec, render_ignore_file, render_run_script, Artifacts,
    BUILD_SCRIPT, BUILD_SPEC, IGNORE_FILE, RUN_SCRIPT,
};
pub use files::write_artifacts;
