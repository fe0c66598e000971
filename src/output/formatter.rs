use anyhow::Result;
use serde::Serialize;

use crate::analyzer::CheckReport;
use crate::cli::OutputFormat;

use super::Finding;

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub total_findings: usize,
    pub findings: &'a [Finding],
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &CheckReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(report
                .findings
                .iter()
                .map(Finding::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                let output = JsonOutput {
                    files_scanned: report.files_scanned,
                    files_skipped: report.files_skipped,
                    total_findings: report.findings.len(),
                    findings: &report.findings,
                };
                Ok(serde_json::to_string_pretty(&output)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_report() -> CheckReport {
        CheckReport {
            files_scanned: 2,
            files_skipped: 0,
            findings: vec![
                Finding {
                    file: "a_test.go".to_string(),
                    line: 10,
                    column: 22,
                    message: "missing CheckDestroy".to_string(),
                },
                Finding {
                    file: "b_test.go".to_string(),
                    line: 3,
                    column: 18,
                    message: "missing CheckDestroy".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_text_format() {
        let rendered = OutputFormatter::format(&sample_report(), OutputFormat::Text).unwrap();
        assert_eq!(
            rendered,
            "a_test.go:10:22: missing CheckDestroy\nb_test.go:3:18: missing CheckDestroy"
        );
    }

    #[test]
    fn test_text_format_empty() {
        let report = CheckReport::default();
        let rendered = OutputFormatter::format(&report, OutputFormat::Text).unwrap();
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_json_format() {
        let rendered = OutputFormatter::format(&sample_report(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["files_scanned"], 2);
        assert_eq!(parsed["total_findings"], 2);
        assert_eq!(parsed["findings"][0]["file"], "a_test.go");
        assert_eq!(parsed["findings"][0]["message"], "missing CheckDestroy");
    }
}
