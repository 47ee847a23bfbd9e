//! Writing rendered files into the project directory

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::artifacts::Artifacts;
use crate::error::Result;

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Write (truncating) every artifact into `project_dir`. Returns the paths
/// written, in order.
pub fn write_artifacts(project_dir: &Path, artifacts: &Artifacts) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (name, content, executable) in artifacts.files() {
        let path = project_dir.join(name);
        fs::write(&path, content)?;
        if executable {
            make_executable(&path)?;
        }
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
