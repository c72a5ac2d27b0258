use crate::types::report::Priority;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seolens",
    version,
    about = "Single-page SEO health scoring and improvement tips"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a page and print the full report
    Analyze(AnalyzeCommand),
    /// Print prioritized improvement tips
    Tips(TipsCommand),
    /// List warning and failing checks
    Lint(LintCommand),
    /// Show the verdict tier for a score
    Grade(GradeCommand),
    /// List the rule catalogue
    Rules,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Page signals JSON file, or `-` for stdin
    pub signals: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Only show tips at or above this priority
    #[arg(long, value_enum)]
    pub min_priority: Option<Priority>,
}

#[derive(Args)]
pub struct TipsCommand {
    pub signals: PathBuf,
    #[arg(long, value_enum)]
    pub min_priority: Option<Priority>,
}

#[derive(Args)]
pub struct LintCommand {
    pub signals: PathBuf,
}

#[derive(Args)]
pub struct GradeCommand {
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    pub score: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}
