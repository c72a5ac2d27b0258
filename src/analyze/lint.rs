use crate::types::report::Finding;
use crate::types::scoring::{CheckResult, Status};

/// Warn and fail checks as findings; failures block.
pub fn lint_findings(checks: &[CheckResult]) -> Vec<Finding> {
    checks
        .iter()
        .filter(|check| matches!(check.status, Status::Warn | Status::Fail))
        .map(|check| Finding {
            id: check.id.to_string(),
            title: check.title.clone(),
            body: check.detail.clone(),
            blocking: check.status == Status::Fail,
        })
        .collect()
}
