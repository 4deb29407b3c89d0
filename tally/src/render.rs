//! Table and JSON rendering for count reports.

use console::Style;
use serde::Serialize;
use tallylib::CountSummary;

/// Summary row for one input.
#[derive(Debug, Serialize)]
pub struct FileSummary {
    /// Input name (file path or "(stdin)")
    pub name: String,
    /// Counting result for this input
    #[serde(flatten)]
    pub summary: CountSummary,
}

/// Full report for one invocation.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Predicate expression that was applied
    pub expr: String,
    /// Per-input summaries
    pub files: Vec<FileSummary>,
    /// Aggregate across all inputs
    pub total: CountSummary,
}

const NAME_WIDTH: usize = 40;
const CELL_WIDTH: usize = 10;

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.len() > max_len {
        format!("..{}", &name[name.len() - max_len + 2..])
    } else {
        name.to_string()
    }
}

fn format_row(name: &str, summary: &CountSummary) -> String {
    let share = format!("{:.1}%", summary.fraction() * 100.0);
    format!(
        "{:<name_width$} {:>cell_width$} {:>cell_width$} {:>cell_width$}",
        truncate_name(name, NAME_WIDTH - 2),
        summary.matched,
        summary.scanned,
        share,
        name_width = NAME_WIDTH,
        cell_width = CELL_WIDTH,
    )
}

/// Render a report as a table with a Total row.
pub fn render_table(report: &Report, by_file: bool) -> String {
    let header_style = Style::new().bold();
    let mut out = String::new();

    let mut header = format!(
        "{:<width$}",
        if by_file { "File" } else { "" },
        width = NAME_WIDTH
    );
    for column in ["Matched", "Scanned", "Share"] {
        header.push_str(&format!(" {:>width$}", column, width = CELL_WIDTH));
    }
    out.push_str(&header_style.apply_to(header).to_string());
    out.push('\n');
    out.push_str(&"-".repeat(NAME_WIDTH + (CELL_WIDTH + 1) * 3));
    out.push('\n');

    if by_file {
        for file in &report.files {
            out.push_str(&format_row(&file.name, &file.summary));
            out.push('\n');
        }
    }

    let label = format!("Total ({} values)", report.total.scanned);
    out.push_str(&format_row(&label, &report.total));
    out
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            expr: ">0".to_string(),
            files: vec![FileSummary {
                name: "data.txt".to_string(),
                summary: CountSummary {
                    matched: 3,
                    scanned: 5,
                },
            }],
            total: CountSummary {
                matched: 3,
                scanned: 5,
            },
        }
    }

    #[test]
    fn test_table_total_row() {
        let table = render_table(&sample_report(), false);
        assert!(table.contains("Total (5 values)"));
        assert!(table.contains("Matched"));
        assert!(table.contains("60.0%"));
        // Per-file rows only appear with by_file.
        assert!(!table.contains("data.txt"));
    }

    #[test]
    fn test_table_by_file() {
        let table = render_table(&sample_report(), true);
        assert!(table.contains("File"));
        assert!(table.contains("data.txt"));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("short", 10), "short");
        let truncated = truncate_name("a-very-long-input-name.txt", 12);
        assert_eq!(truncated.len(), 12);
        assert!(truncated.starts_with(".."));
    }

    #[test]
    fn test_json_shape() {
        let rendered = render_json(&sample_report()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["total"]["matched"], 3);
        assert_eq!(parsed["files"][0]["name"], "data.txt");
        assert_eq!(parsed["files"][0]["scanned"], 5);
    }
}
