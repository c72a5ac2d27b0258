use crate::types::scoring::{CheckResult, Score, Verdict};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Crit,
    High,
    Med,
    Low,
}

impl Priority {
    /// Lower rank is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Crit => 0,
            Priority::High => 1,
            Priority::Med => 2,
            Priority::Low => 3,
        }
    }

    pub fn is_at_least(self, floor: Priority) -> bool {
        self.rank() <= floor.rank()
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Crit => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Med => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub priority: Priority,
    pub title: String,
    pub body: String,
    pub impact_weight: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub info: usize,
    pub points_earned: u32,
    pub points_max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    pub name: &'static str,
    pub on: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOverview {
    pub word_count: u32,
    pub images_total: u32,
    pub images_with_alt: u32,
    pub links_total: u32,
    pub links_internal: u32,
    pub links_external: u32,
    pub h1_count: usize,
    pub h2_count: u32,
    pub h3_count: u32,
    pub schema_blocks: u32,
    pub open_graph_tags: u32,
    pub flags: Vec<FeatureFlag>,
}

/// Everything one analysis produces: the core bundle plus derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub score: Score,
    pub verdict: Verdict,
    pub checks: Vec<CheckResult>,
    pub tips: Vec<Tip>,
    pub summary: Summary,
    pub overview: PageOverview,
}

impl AnalysisReport {
    /// Drops tips below `floor`. The bundle never ends up tipless: when
    /// nothing survives, `fallback` takes the place of the filtered list.
    pub fn retain_tips(&mut self, floor: Priority, fallback: Tip) {
        self.tips.retain(|tip| tip.priority.is_at_least(floor));
        if self.tips.is_empty() {
            self.tips.push(fallback);
        }
    }
}
