use crate::types::report::Summary;
use crate::types::scoring::{CheckResult, Score, Status, MAX_SCORE};

pub fn aggregate(checks: &[CheckResult]) -> Score {
    let earned = checks.iter().fold(0u32, |total, check| {
        total.saturating_add(check.points_earned.min(check.points_max))
    });
    earned.min(u32::from(MAX_SCORE)) as Score
}

pub fn summarize(checks: &[CheckResult]) -> Summary {
    checks.iter().fold(Summary::default(), |mut summary, check| {
        match check.status {
            Status::Ok => summary.passed += 1,
            Status::Warn => summary.warnings += 1,
            Status::Fail => summary.failed += 1,
            Status::Info => summary.info += 1,
        }
        summary.points_earned += check.points_earned;
        summary.points_max += check.points_max;
        summary
    })
}
