use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use heval_types::{EvalItem, EvalReport};
use serde_json::json;

/// Per-item text report: one block per item, then the aggregate average
/// score and pass count. `items` supplies the compared texts for context;
/// extra results beyond the item slice are still printed.
pub fn render_text(items: &[EvalItem], report: &EvalReport) -> String {
    let mut out = String::new();
    out.push_str("\nHeuristic Evaluation Results:\n");
    out.push_str("============================\n\n");

    for (idx, result) in report.results.iter().enumerate() {
        out.push_str(&format!("Item {}:\n", idx + 1));
        if let Some(item) = items.get(idx) {
            out.push_str(&format!("Input: {}\n", item.input));
            out.push_str(&format!("Output: {}\n", item.output));
            out.push_str(&format!("Expected: {}\n", item.expected));
        }
        out.push_str(&format!("Type: {}\n", result.name));
        out.push_str(&format!("Score: {:.3}\n", result.score));
        out.push_str(&format!(
            "Matched: {}\n",
            if result.metadata.matched { "✓" } else { "✗" }
        ));
        out.push_str(&format!("Details: {}\n", result.metadata.details));
        out.push_str("----------------------------\n\n");
    }

    out.push_str(&format!("Average Score: {:.3}\n", report.summary.avg_score));
    out.push_str(&format!(
        "Passed: {}/{}\n",
        report.summary.passed, report.summary.total
    ));
    out
}

/// Persists the report as a JSON artifact with a generation timestamp.
pub async fn write_json(path: impl AsRef<Path>, report: &EvalReport) -> Result<()> {
    let path = path.as_ref();
    let artifact = json!({
        "generated_at": Utc::now().to_rfc3339(),
        "summary": report.summary,
        "results": report.results,
    });
    let content = serde_json::to_string_pretty(&artifact)?;
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {:?}", path))
}
