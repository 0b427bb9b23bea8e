//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub code scanning, VS Code,
//! and other tools.

use super::LintFormatter;
use crate::lint::{LintReport, RuleId, Severity};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats lint output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    descriptions: BTreeMap<RuleId, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_column: Option<usize>,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            descriptions: BTreeMap::new(),
        }
    }

    /// Use these descriptions for rule descriptors instead of the bare ID.
    pub fn with_rule_descriptions(
        mut self,
        descriptions: impl IntoIterator<Item = (RuleId, String)>,
    ) -> Self {
        self.descriptions.extend(descriptions);
        self
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        let rule_ids: BTreeSet<_> = report.diagnostics().iter().map(|d| &d.rule_id).collect();

        let rules = rule_ids
            .into_iter()
            .map(|id| SarifRule {
                id: id.0.clone(),
                short_description: SarifMessage {
                    text: self
                        .descriptions
                        .get(id)
                        .cloned()
                        .unwrap_or_else(|| format!("Rule {}", id)),
                },
            })
            .collect();

        let results = report
            .diagnostics()
            .iter()
            .map(|d| SarifResult {
                rule_id: d.rule_id.0.clone(),
                level: Self::severity_to_level(d.severity),
                message: SarifMessage {
                    text: d.message.clone(),
                },
                locations: d
                    .span
                    .iter()
                    .map(|span| SarifLocation {
                        physical_location: SarifPhysicalLocation {
                            artifact_location: SarifArtifactLocation {
                                uri: span.file.display().to_string(),
                            },
                            region: SarifRegion {
                                start_line: span.line,
                                start_column: (span.column > 1).then_some(span.column),
                            },
                        },
                    })
                    .collect(),
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &log).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{LintDiagnostic, Span};

    fn render(formatter: &SarifFormatter, diagnostics: Vec<LintDiagnostic>) -> serde_json::Value {
        let report = LintReport::new("crontab", 1, diagnostics);
        let mut output = Vec::new();
        formatter.format(&report, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_sarif() {
        let formatter = SarifFormatter::new("cronlint", "1.0.0");
        let parsed = render(
            &formatter,
            vec![LintDiagnostic::new(
                RuleId::new("cron-syntax"),
                Severity::Error,
                "hour out of range: 24 is not within 0-23",
            )
            .with_span(Span::line("crontab", 15))],
        );

        assert_eq!(parsed["version"], "2.1.0");
        assert!(parsed["runs"].is_array());
        assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "cronlint");
        assert_eq!(parsed["runs"][0]["results"][0]["level"], "error");
    }

    #[test]
    fn maps_severity_to_sarif_level() {
        assert_eq!(SarifFormatter::severity_to_level(Severity::Error), "error");
        assert_eq!(
            SarifFormatter::severity_to_level(Severity::Warning),
            "warning"
        );
    }

    #[test]
    fn includes_one_descriptor_per_rule() {
        let formatter = SarifFormatter::new("cronlint", "1.0.0").with_rule_descriptions([(
            RuleId::new("cron-syntax"),
            "Validates schedule fields".to_string(),
        )]);
        let parsed = render(
            &formatter,
            vec![
                LintDiagnostic::new(RuleId::new("cron-syntax"), Severity::Error, "msg1"),
                LintDiagnostic::new(RuleId::new("cron-syntax"), Severity::Error, "msg2"),
                LintDiagnostic::new(RuleId::new("command-exists"), Severity::Error, "msg3"),
            ],
        );

        let rules = parsed["runs"][0]["tool"]["driver"]["rules"]
            .as_array()
            .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0]["id"], "command-exists");
        assert_eq!(rules[0]["shortDescription"]["text"], "Rule command-exists");
        assert_eq!(rules[1]["shortDescription"]["text"], "Validates schedule fields");
    }

    #[test]
    fn includes_location_information() {
        let formatter = SarifFormatter::new("cronlint", "1.0.0");
        let parsed = render(
            &formatter,
            vec![
                LintDiagnostic::new(RuleId::new("test"), Severity::Error, "Test message")
                    .with_span(Span::at("crontab", 10, 5)),
            ],
        );

        let location = &parsed["runs"][0]["results"][0]["locations"][0];
        assert_eq!(
            location["physicalLocation"]["artifactLocation"]["uri"],
            "crontab"
        );
        assert_eq!(location["physicalLocation"]["region"]["startLine"], 10);
        assert_eq!(location["physicalLocation"]["region"]["startColumn"], 5);
    }

    #[test]
    fn omits_column_one() {
        let formatter = SarifFormatter::new("cronlint", "1.0.0");
        let parsed = render(
            &formatter,
            vec![LintDiagnostic::new(RuleId::new("test"), Severity::Error, "msg")
                .with_span(Span::line("crontab", 10))],
        );

        let region = &parsed["runs"][0]["results"][0]["locations"][0]["physicalLocation"]["region"];
        assert!(region["startColumn"].is_null());
    }
}
