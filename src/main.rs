mod analyze;
mod cli;
mod config;
mod error;
mod input;
mod report;
mod telemetry;
mod types;

use crate::analyze::Engine;
use crate::error::SeolensError;
use crate::types::config::SeolensConfig;
use crate::types::report::{AnalysisReport, Finding};
use crate::types::signals::PageSignals;
use clap::{Parser, ValueEnum};
use std::path::Path;
use tracing::{debug, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn read_page(path: &Path) -> Result<PageSignals, SeolensError> {
    let signals = input::load_signals(path)?;
    input::ensure_analyzable(&signals)?;
    Ok(signals)
}

fn gate_exit_code(findings: &[Finding], report: &AnalysisReport, config: &SeolensConfig) -> i32 {
    let below_gate = config
        .fail_under()
        .is_some_and(|fail_under| report.score < fail_under);
    if below_gate {
        warn!(
            score = report.score,
            fail_under = config.fail_under().unwrap_or_default(),
            "score below gate"
        );
    }

    if below_gate || findings.iter().any(|finding| finding.blocking) {
        exit_code::BLOCKING
    } else if !findings.is_empty() {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, SeolensError> {
    let cli = cli::Cli::parse();
    let root = std::env::current_dir()?;
    let config = config::load_config(&root)?.unwrap_or_default();
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        config.log_level(),
    ))?;
    debug!(root = %root.display(), "configuration loaded");

    let engine = Engine::default();
    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let signals = read_page(&cmd.signals)?;
            let mut page_report = engine.analyze(&signals);
            let floor = cmd.min_priority.unwrap_or_else(|| config.min_priority());
            page_report.retain_tips(floor, engine.fallback_tip(&signals));

            let format = match (cmd.format, config.report_format()) {
                (Some(format), _) => format,
                (None, Some(name)) => cli::ReportFormat::from_str(name, true)
                    .map_err(SeolensError::ConfigParse)?,
                (None, None) => cli::ReportFormat::Md,
            };
            let output_format = match format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Sarif => report::OutputFormat::Sarif,
            };
            let rendered = report::render(&page_report, output_format)?;
            println!("{rendered}");

            let findings = analyze::lint::lint_findings(&page_report.checks);
            Ok(gate_exit_code(&findings, &page_report, &config))
        }
        cli::Commands::Tips(cmd) => {
            let signals = read_page(&cmd.signals)?;
            let checks = engine.evaluate(&signals);
            let floor = cmd.min_priority.unwrap_or_else(|| config.min_priority());
            let tips = engine
                .generate_tips(&signals, &checks)
                .into_iter()
                .filter(|tip| tip.priority.is_at_least(floor))
                .collect::<Vec<_>>();

            if tips.is_empty() {
                println!("tips: none at or above {}", floor.label());
                return Ok(exit_code::SUCCESS);
            }

            println!("tips:");
            for tip in &tips {
                println!(
                    "- [{}] {} (impact {})",
                    tip.priority.label(),
                    tip.title,
                    tip.impact_weight
                );
                println!("  {}", tip.body);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Lint(cmd) => {
            let signals = read_page(&cmd.signals)?;
            let page_report = engine.analyze(&signals);
            let findings = analyze::lint::lint_findings(&page_report.checks);

            if findings.is_empty() {
                println!("lint: no findings (score {})", page_report.score);
            }
            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            Ok(gate_exit_code(&findings, &page_report, &config))
        }
        cli::Commands::Grade(cmd) => {
            let verdict = engine.classify(cmd.score);
            println!("{} ({}): {}", verdict.grade, verdict.label, verdict.description);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rules => {
            for rule in engine.rules() {
                println!("{:<10} {:>3} pts", rule.id, rule.max_points);
            }
            println!(
                "{:<10} {:>3} pts",
                "total",
                analyze::rules::max_total(engine.rules())
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
