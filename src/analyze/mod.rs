pub mod aggregate;
pub mod lint;
pub mod overview;
pub mod rules;
pub mod tips;
pub mod verdict;

use crate::types::report::{AnalysisReport, Tip};
use crate::types::scoring::{CheckResult, Score, Verdict};
use crate::types::signals::PageSignals;
use rules::Rule;
use tips::TipTrigger;
use tracing::{debug, info};
use verdict::Scale;

/// The scoring engine: rule catalogue, verdict scale and tip book.
///
/// Holds only `'static` tables, so one engine can serve any number of
/// analyses from any thread.
#[derive(Clone, Copy)]
pub struct Engine {
    rules: &'static [Rule],
    scale: Scale,
    tips: &'static [TipTrigger],
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(rules::CATALOGUE, verdict::SCALE, tips::TIP_BOOK)
    }
}

impl Engine {
    pub fn new(
        rules: &'static [Rule],
        scale: Scale,
        tips: &'static [TipTrigger],
    ) -> Self {
        Self { rules, scale, tips }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    pub fn evaluate(&self, signals: &PageSignals) -> Vec<CheckResult> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(signals))
            .inspect(|check| {
                debug!(
                    id = check.id,
                    status = check.status.label(),
                    points = check.points_earned,
                    max = check.points_max,
                    "rule evaluated"
                );
            })
            .collect()
    }

    pub fn aggregate(&self, checks: &[CheckResult]) -> Score {
        aggregate::aggregate(checks)
    }

    pub fn classify(&self, score: Score) -> Verdict {
        verdict::classify(self.scale, score)
    }

    pub fn generate_tips(&self, signals: &PageSignals, checks: &[CheckResult]) -> Vec<Tip> {
        tips::generate_tips(self.tips, signals, checks)
    }

    pub fn fallback_tip(&self, signals: &PageSignals) -> Tip {
        tips::fallback_tip(signals)
    }

    pub fn analyze(&self, signals: &PageSignals) -> AnalysisReport {
        let checks = self.evaluate(signals);
        let score = self.aggregate(&checks);
        let verdict = self.classify(score);
        let tips = self.generate_tips(signals, &checks);
        let summary = aggregate::summarize(&checks);
        info!(
            score,
            grade = verdict.grade,
            checks = checks.len(),
            tips = tips.len(),
            "analysis complete"
        );

        AnalysisReport {
            score,
            verdict,
            checks,
            tips,
            summary,
            overview: overview::page_overview(signals),
        }
    }
}
