use crate::types::report::AnalysisReport;

pub fn to_markdown(report: &AnalysisReport) -> String {
    let mut output = String::new();
    output.push_str("# SEO Report\n\n");
    output.push_str(&format!(
        "Score: {}/100 ({}, grade {})\n\n{}\n\n",
        report.score, report.verdict.label, report.verdict.grade, report.verdict.description
    ));

    let summary = &report.summary;
    output.push_str("## Summary\n\n");
    output.push_str(&format!(
        "- passed: {}\n- warnings: {}\n- failed: {}\n- info: {}\n- points: {}/{}\n\n",
        summary.passed,
        summary.warnings,
        summary.failed,
        summary.info,
        summary.points_earned,
        summary.points_max
    ));

    output.push_str("## Checks\n\n");
    for check in &report.checks {
        output.push_str(&format!(
            "- [{}] {} ({}/{} pts): {}\n",
            check.status.label(),
            check.title,
            check.points_earned,
            check.points_max,
            check.detail
        ));
    }
    output.push('\n');

    output.push_str("## Tips\n\n");
    if report.tips.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for tip in &report.tips {
            output.push_str(&format!(
                "- [{}] {} (impact {}): {}\n",
                tip.priority.label(),
                tip.title,
                tip.impact_weight,
                tip.body
            ));
        }
        output.push('\n');
    }

    let overview = &report.overview;
    output.push_str("## Page Statistics\n\n");
    output.push_str(&format!(
        "- words: {}\n- images: {} ({} with alt)\n- links: {} ({} internal / {} external)\n- H1 / H2 / H3: {}/{}/{}\n- schema blocks: {}\n- OG tags: {}/4\n",
        overview.word_count,
        overview.images_total,
        overview.images_with_alt,
        overview.links_total,
        overview.links_internal,
        overview.links_external,
        overview.h1_count,
        overview.h2_count,
        overview.h3_count,
        overview.schema_blocks,
        overview.open_graph_tags
    ));
    let flags = overview
        .flags
        .iter()
        .map(|flag| format!("{} {}", if flag.on { "+" } else { "-" }, flag.name))
        .collect::<Vec<_>>()
        .join(", ");
    output.push_str(&format!("- flags: {flags}\n"));

    output
}
