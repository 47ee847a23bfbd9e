//! Human-readable output formatting

use crate::engine::GenerationReport;

pub fn format_human(report: &GenerationReport) -> String {
    if report.dry_run {
        return report.artifacts.build_spec.clone();
    }

    let mut output = format!(
        "Project:    {}\n\
         Base image: {}{}\n\
         Files:\n",
        report.name,
        report.base_image,
        if report.gpu { " (GPU)" } else { "" }
    );
    for file in &report.files {
        output.push_str(&format!("  {}\n", file.display()));
    }
    if let Some(notebook) = &report.notebook {
        output.push_str(&format!("Notebook:   {}\n", notebook.display()));
    }
    output
}
