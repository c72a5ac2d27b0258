use crate::analyze::lint::lint_findings;
use crate::types::report::AnalysisReport;
use serde_json::json;

pub fn to_sarif(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    let results: Vec<_> = lint_findings(&report.checks)
        .iter()
        .map(|finding| {
            json!({
                "ruleId": finding.id,
                "level": if finding.blocking { "error" } else { "warning" },
                "message": { "text": format!("{}: {}", finding.title, finding.body) },
            })
        })
        .collect();

    let rules: Vec<_> = report
        .checks
        .iter()
        .map(|check| json!({ "id": check.id }))
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "seolens",
                    "version": env!("CARGO_PKG_VERSION"),
                    "rules": rules
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}
