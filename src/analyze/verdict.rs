use crate::types::scoring::{Score, Verdict};

pub struct Tier {
    pub min_score: Score,
    pub verdict: Verdict,
}

/// Ranked tiers over a floor verdict. A score below every tier lands on the
/// floor, so a scale can never come up empty.
#[derive(Clone, Copy)]
pub struct Scale {
    tiers: &'static [Tier],
    floor: Verdict,
}

impl Scale {
    /// `tiers` are ordered highest `min_score` first.
    pub const fn new(tiers: &'static [Tier], floor: Verdict) -> Self {
        Self { tiers, floor }
    }
}

pub const SCALE: Scale = Scale::new(TIERS, CRITICAL);

const TIERS: &[Tier] = &[
    Tier {
        min_score: 90,
        verdict: Verdict {
            label: "Excellent",
            description: "This page is well-optimized. Keep monitoring and refining content quality.",
            color_token: "#22d97e",
            grade: "A+",
            dial_color_token: "#22d97e",
        },
    },
    Tier {
        min_score: 80,
        verdict: Verdict {
            label: "Great",
            description: "Strong SEO foundation. A few small improvements will push you into excellent territory.",
            color_token: "#22d97e",
            grade: "A",
            dial_color_token: "#22d97e",
        },
    },
    Tier {
        min_score: 65,
        verdict: Verdict {
            label: "Good",
            description: "Solid SEO with room for improvement. Address the warnings to boost your ranking potential.",
            color_token: "#00e5cc",
            grade: "B",
            dial_color_token: "#00e5cc",
        },
    },
    Tier {
        min_score: 50,
        verdict: Verdict {
            label: "Fair",
            description: "Average SEO health. Several important factors need attention to compete effectively.",
            color_token: "#f5c542",
            grade: "C",
            dial_color_token: "#f5c542",
        },
    },
    Tier {
        min_score: 30,
        verdict: Verdict {
            label: "Poor",
            description: "Significant SEO issues detected. Start with the critical tips.",
            color_token: "#ff7a35",
            grade: "D",
            dial_color_token: "#ff7a35",
        },
    },
];

const CRITICAL: Verdict = Verdict {
    label: "Critical",
    description: "This page has major SEO problems that likely prevent it from ranking in search results.",
    color_token: "#ff4060",
    grade: "F",
    dial_color_token: "#ff4060",
};

pub fn classify(scale: Scale, score: Score) -> Verdict {
    scale
        .tiers
        .iter()
        .find(|tier| score >= tier.min_score)
        .map(|tier| tier.verdict)
        .unwrap_or(scale.floor)
}
