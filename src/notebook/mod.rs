//! README to notebook conversion
//!
//! Best effort: runs an external markdown-to-notebook converter and swaps its
//! metadata trailer for one selecting the bash kernel. Any failure is logged
//! and skipped.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

/// Documentation file converted when present
pub const README_FILE: &str = "README.md";
/// Generated notebook
pub const NOTEBOOK_FILE: &str = "README.ipynb";
/// Converter used when none is configured
pub const DEFAULT_CONVERTER: &str = "notedown";

/// Lines of converter trailer (`metadata`, `nbformat`, `nbformat_minor`, `}`)
const CONVERTER_TRAILER_LINES: usize = 4;

const BASH_NOTEBOOK_TRAILER: &str = r#" "metadata": {
  "kernelspec": {
   "display_name": "Bash",
   "language": "bash",
   "name": "bash"
  },
  "language_info": {
   "codemirror_mode": "shell",
   "file_extension": ".sh",
   "mimetype": "text/x-sh",
   "name": "bash"
  }
 },
 "nbformat": 4,
 "nbformat_minor": 2
}
"#;

#[derive(Debug, Clone)]
pub struct NotebookConverter {
    program: String,
}

impl Default for NotebookConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl NotebookConverter {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// Convert `README.md` in `project_dir`. Returns the notebook path when
    /// one was written.
    pub fn convert(&self, project_dir: &Path) -> Option<PathBuf> {
        if !project_dir.join(README_FILE).is_file() {
            debug!("No {} found, skipping notebook", README_FILE);
            return None;
        }

        let output = match Command::new(&self.program)
            .arg(README_FILE)
            .current_dir(project_dir)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!("Could not run {}: {}", self.program, e);
                return None;
            }
        };
        if !output.status.success() {
            warn!("{} exited with {}", self.program, output.status);
            if output.stdout.iter().all(u8::is_ascii_whitespace) {
                return None;
            }
        }

        let notebook = with_bash_kernel(&String::from_utf8_lossy(&output.stdout));
        let path = project_dir.join(NOTEBOOK_FILE);
        match fs::write(&path, notebook) {
            Ok(()) => {
                info!("Wrote {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Could not write {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Replace the converter's trailer with the bash kernel metadata.
pub fn with_bash_kernel(converted: &str) -> String {
    let lines: Vec<&str> = converted.lines().collect();
    let keep = lines.len().saturating_sub(CONVERTER_TRAILER_LINES);

    let mut notebook = String::new();
    for line in &lines[..keep] {
        notebook.push_str(line);
        notebook.push('\n');
    }
    notebook.push_str(BASH_NOTEBOOK_TRAILER);
    notebook
}
