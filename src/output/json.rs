//! JSON output formatting

use crate::engine::GenerationReport;

pub fn format_json(report: &GenerationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
