//! The rule catalogue: one row per on-page signal, evaluated in order.
//!
//! Max points across the catalogue sum to exactly 100, so the aggregate
//! needs no renormalization.

use crate::types::scoring::{CheckResult, Status};
use crate::types::signals::PageSignals;

pub struct Rule {
    pub id: &'static str,
    pub max_points: u32,
    evaluate: fn(&PageSignals, u32) -> Option<Outcome>,
}

struct Outcome {
    status: Status,
    title: String,
    detail: String,
    points: u32,
    impact: u8,
}

impl Outcome {
    fn new(status: Status, points: u32, impact: u8, title: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            detail: String::new(),
            points,
            impact,
        }
    }

    fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

impl Rule {
    pub fn check(&self, signals: &PageSignals) -> Option<CheckResult> {
        (self.evaluate)(signals, self.max_points).map(|outcome| CheckResult {
            id: self.id,
            status: outcome.status,
            title: outcome.title,
            detail: outcome.detail,
            points_earned: outcome.points.min(self.max_points),
            points_max: self.max_points,
            impact_weight: outcome.impact,
        })
    }
}

pub const CATALOGUE: &[Rule] = &[
    Rule { id: "title", max_points: 15, evaluate: title },
    Rule { id: "desc", max_points: 12, evaluate: description },
    Rule { id: "h1", max_points: 10, evaluate: h1 },
    Rule { id: "https", max_points: 10, evaluate: https },
    Rule { id: "img", max_points: 8, evaluate: image_alt },
    Rule { id: "canonical", max_points: 7, evaluate: canonical },
    Rule { id: "og", max_points: 6, evaluate: open_graph },
    Rule { id: "viewport", max_points: 5, evaluate: viewport },
    Rule { id: "lang", max_points: 5, evaluate: lang },
    Rule { id: "schema", max_points: 5, evaluate: schema },
    Rule { id: "content", max_points: 5, evaluate: content },
    Rule { id: "favicon", max_points: 4, evaluate: favicon },
    Rule { id: "h2", max_points: 3, evaluate: h2 },
    Rule { id: "twitter", max_points: 3, evaluate: twitter },
    Rule { id: "lazy", max_points: 2, evaluate: lazy_loading },
];

pub fn max_total(rules: &[Rule]) -> u32 {
    rules.iter().map(|rule| rule.max_points).sum()
}

fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// `round(max * part / whole)` in integer arithmetic, exact halves rounded up.
fn scaled_round(max: u32, part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let numerator = u64::from(max) * u64::from(part);
    let whole = u64::from(whole);
    ((2 * numerator + whole) / (2 * whole)) as u32
}

fn title(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let text = signals.title.text.trim();
    let length = signals.title.effective_length();
    let outcome = if text.is_empty() {
        Outcome::new(Status::Fail, 0, 95, "Missing <title> tag").detail(
            "The page title is crucial for SEO: it appears in search results and browser tabs.",
        )
    } else if length < 30 {
        Outcome::new(Status::Warn, 8, 70, format!("Title too short ({length} chars)")).detail(
            format!("\"{}\" - Ideal range is 30-60 characters.", excerpt(text, 48)),
        )
    } else if length > 60 {
        Outcome::new(Status::Warn, 9, 60, format!("Title too long ({length} chars)")).detail(
            format!(
                "\"{}...\" - Google truncates titles over 60 chars.",
                excerpt(text, 48)
            ),
        )
    } else {
        Outcome::new(Status::Ok, max, 95, format!("Title optimized ({length} chars)"))
            .detail(format!("\"{}\"", excerpt(text, 55)))
    };
    Some(outcome)
}

fn description(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let meta = &signals.meta_description;
    let length = meta.effective_length();
    let outcome = if !meta.exists {
        Outcome::new(Status::Fail, 0, 85, "Missing meta description").detail(
            "A compelling description directly impacts click-through rates in search results.",
        )
    } else if length < 70 {
        Outcome::new(
            Status::Warn,
            6,
            65,
            format!("Description too short ({length} chars)"),
        )
        .detail("Aim for 70-160 characters to fill the search result snippet.")
    } else if length > 160 {
        Outcome::new(
            Status::Warn,
            7,
            55,
            format!("Description too long ({length} chars)"),
        )
        .detail("Google will truncate descriptions over 160 characters.")
    } else {
        Outcome::new(
            Status::Ok,
            max,
            85,
            format!("Meta description optimized ({length} chars)"),
        )
        .detail(format!("\"{}...\"", excerpt(&meta.text, 60)))
    };
    Some(outcome)
}

fn h1(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let headings = &signals.headings.h1;
    let outcome = match headings.as_slice() {
        [] => Outcome::new(Status::Fail, 0, 80, "No H1 heading found")
            .detail("Every page needs exactly one H1 containing your primary keyword."),
        [only] => Outcome::new(Status::Ok, max, 80, "Single H1 heading")
            .detail(format!("\"{}\"", excerpt(only, 52))),
        [first, ..] => Outcome::new(
            Status::Warn,
            6,
            60,
            format!("Multiple H1 tags ({})", headings.len()),
        )
        .detail(format!(
            "First: \"{}\" - Use only one H1 per page.",
            excerpt(first, 40)
        )),
    };
    Some(outcome)
}

fn https(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let outcome = if signals.https.secure {
        Outcome::new(Status::Ok, max, 90, "HTTPS enabled")
            .detail("Secure connection is a confirmed Google ranking signal.")
    } else {
        Outcome::new(Status::Fail, 0, 90, "Site is not HTTPS").detail(
            "Google deprioritizes HTTP sites. Get a free certificate via Let's Encrypt.",
        )
    };
    Some(outcome)
}

fn image_alt(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let images = &signals.images;
    let total = images.total;
    let missing = images.missing_alt();
    let outcome = if total == 0 {
        Outcome::new(Status::Info, max, 30, "No images found")
            .detail("No image alt text to evaluate on this page.")
    } else if missing == 0 {
        Outcome::new(
            Status::Ok,
            max,
            65,
            format!("All {total} images have alt text"),
        )
        .detail("Alt text helps crawlers index images and improves accessibility.")
    } else {
        let points = scaled_round(max, total - missing, total);
        let status = if missing > total - missing {
            Status::Fail
        } else {
            Status::Warn
        };
        Outcome::new(
            status,
            points,
            65,
            format!("{missing}/{total} images missing alt"),
        )
        .detail(format!(
            "{} images have alt text; {missing} do not.",
            total - missing
        ))
    };
    Some(outcome)
}

fn canonical(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let outcome = if signals.canonical.exists {
        Outcome::new(Status::Ok, max, 70, "Canonical tag present").detail(format!(
            "<link rel=\"canonical\" href=\"{}\">",
            excerpt(&signals.canonical.url, 40)
        ))
    } else {
        Outcome::new(Status::Warn, 0, 70, "No canonical tag")
            .detail("Without canonical, duplicate content may dilute your rankings.")
    };
    Some(outcome)
}

fn open_graph(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let og = &signals.open_graph;
    let present = og.present_count();
    let outcome = if present >= 3 {
        Outcome::new(
            Status::Ok,
            max,
            50,
            format!("Open Graph tags complete ({present}/4)"),
        )
        .detail("og:title, og:description and og:image control social previews.")
    } else if present > 0 {
        let missing = og
            .missing()
            .iter()
            .map(|tag| format!("og:{tag}"))
            .collect::<Vec<_>>()
            .join(", ");
        Outcome::new(
            Status::Warn,
            2 * present,
            50,
            format!("Open Graph incomplete ({present}/4)"),
        )
        .detail(format!("Missing: {missing}"))
    } else {
        Outcome::new(Status::Fail, 0, 50, "No Open Graph tags")
            .detail("OG tags control how your page looks when shared on social media.")
    };
    Some(outcome)
}

fn viewport(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let viewport = &signals.viewport;
    let outcome = if viewport.exists {
        let content = if viewport.content.is_empty() {
            "width=device-width, initial-scale=1"
        } else {
            viewport.content.as_str()
        };
        Outcome::new(Status::Ok, max, 75, "Viewport meta tag set").detail(content)
    } else {
        Outcome::new(Status::Fail, 0, 75, "No viewport meta tag")
            .detail("Missing viewport breaks mobile rendering, a key mobile-first ranking factor.")
    };
    Some(outcome)
}

fn lang(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let outcome = if signals.lang.exists {
        Outcome::new(
            Status::Ok,
            max,
            45,
            format!("Language declared: {}", signals.lang.value),
        )
        .detail("Helps search engines serve the right content to the right audience.")
    } else {
        Outcome::new(Status::Warn, 0, 45, "No lang attribute on <html>")
            .detail("Add lang=\"en\" (or your locale) to the HTML element.")
    };
    Some(outcome)
}

fn schema(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let data = &signals.structured_data;
    let outcome = if data.count > 0 {
        let plural = if data.count > 1 { "s" } else { "" };
        let types = data
            .types
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let types = if types.is_empty() {
            "Unknown".to_string()
        } else {
            types
        };
        Outcome::new(
            Status::Ok,
            max,
            60,
            format!("{} Schema.org block{plural}", data.count),
        )
        .detail(format!("Types: {types}"))
    } else {
        Outcome::new(Status::Warn, 0, 60, "No structured data found")
            .detail("Add JSON-LD schema to unlock rich snippets in Google results.")
    };
    Some(outcome)
}

fn content(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let words = signals.content.word_count;
    let outcome = if words >= 300 {
        Outcome::new(
            Status::Ok,
            max,
            55,
            format!("Good content length ({words} words)"),
        )
        .detail("Longer, in-depth content tends to rank better in search results.")
    } else if words >= 100 {
        Outcome::new(Status::Warn, 2, 55, format!("Thin content ({words} words)"))
            .detail("Aim for at least 300 words for pages targeting search traffic.")
    } else {
        Outcome::new(
            Status::Fail,
            0,
            55,
            format!("Very little content ({words} words)"),
        )
        .detail("This page may be considered thin content and ignored by crawlers.")
    };
    Some(outcome)
}

fn favicon(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let outcome = if signals.favicon.exists {
        Outcome::new(Status::Ok, max, 30, "Favicon found")
            .detail("Displayed in browser tabs, bookmarks and some search listings.")
    } else {
        Outcome::new(Status::Warn, 0, 30, "No favicon detected")
            .detail("A favicon improves brand recognition and professionalism.")
    };
    Some(outcome)
}

fn h2(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let headings = &signals.headings;
    let outcome = match headings.h2 {
        0 => Outcome::new(Status::Warn, 0, 40, "No H2 headings")
            .detail("Use H2s to break content into scannable sections."),
        1 => Outcome::new(Status::Warn, 1, 40, "Only one H2 found")
            .detail("Multiple H2s improve content structure and keyword distribution."),
        count => Outcome::new(Status::Ok, max, 40, format!("{count} H2 headings found")).detail(
            format!(
                "H3s: {}, H4s: {} - solid heading hierarchy.",
                headings.h3, headings.h4
            ),
        ),
    };
    Some(outcome)
}

fn twitter(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let card = &signals.twitter_card;
    let outcome = if card.exists {
        let kind = if card.card_type.is_empty() {
            "found"
        } else {
            card.card_type.as_str()
        };
        Outcome::new(Status::Ok, max, 35, format!("Twitter Card: {kind}"))
            .detail("Controls preview appearance when shared on Twitter/X.")
    } else {
        Outcome::new(Status::Warn, 0, 35, "No Twitter Card meta").detail(
            "Add twitter:card, twitter:title and twitter:description for better sharing.",
        )
    };
    Some(outcome)
}

/// Silent unless the page has images that lazy loading would matter for.
fn lazy_loading(signals: &PageSignals, max: u32) -> Option<Outcome> {
    let total = signals.images.total;
    if total > 0 && signals.performance.has_lazy_images {
        Some(
            Outcome::new(Status::Ok, max, 40, "Lazy loading detected")
                .detail("loading=\"lazy\" improves page speed, which is a ranking factor."),
        )
    } else if total > 3 {
        Some(
            Outcome::new(Status::Warn, 0, 40, "No lazy loading on images").detail(
                "Add loading=\"lazy\" to below-the-fold images to improve Core Web Vitals.",
            ),
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::signals::fixtures::ideal_signals;
    use std::collections::HashSet;

    fn rule(id: &str) -> &'static Rule {
        CATALOGUE
            .iter()
            .find(|rule| rule.id == id)
            .expect("rule should exist")
    }

    fn run(id: &str, signals: &PageSignals) -> CheckResult {
        rule(id).check(signals).expect("rule should emit a check")
    }

    #[test]
    fn catalogue_max_points_sum_to_one_hundred() {
        assert_eq!(max_total(CATALOGUE), 100);
    }

    #[test]
    fn catalogue_ids_are_unique() {
        let ids: HashSet<_> = CATALOGUE.iter().map(|rule| rule.id).collect();
        assert_eq!(ids.len(), CATALOGUE.len());
    }

    #[test]
    fn scaled_round_rounds_exact_halves_up() {
        assert_eq!(scaled_round(8, 15, 16), 8);
        assert_eq!(scaled_round(8, 7, 16), 4);
        assert_eq!(scaled_round(8, 4, 10), 3);
        assert_eq!(scaled_round(8, 1, 16), 1);
        assert_eq!(scaled_round(8, 3, 0), 0);
    }

    #[test]
    fn title_thresholds() {
        let mut signals = ideal_signals();
        signals.title.text = String::new();
        signals.title.length = 0;
        let check = run("title", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Fail, 0));

        signals.title.text = "Short".to_string();
        signals.title.length = 5;
        let check = run("title", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Warn, 8));

        signals.title.text = "x".repeat(61);
        signals.title.length = 61;
        let check = run("title", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Warn, 9));

        for length in [30, 60] {
            signals.title.text = "x".repeat(length);
            signals.title.length = length as u32;
            let check = run("title", &signals);
            assert_eq!((check.status, check.points_earned), (Status::Ok, 15));
        }
    }

    #[test]
    fn description_thresholds() {
        let mut signals = ideal_signals();
        signals.meta_description.exists = false;
        assert_eq!(run("desc", &signals).status, Status::Fail);

        signals.meta_description.exists = true;
        signals.meta_description.length = 69;
        assert_eq!(run("desc", &signals).points_earned, 6);

        signals.meta_description.length = 161;
        assert_eq!(run("desc", &signals).points_earned, 7);

        signals.meta_description.length = 160;
        let check = run("desc", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Ok, 12));
    }

    #[test]
    fn h1_counts() {
        let mut signals = ideal_signals();
        signals.headings.h1.clear();
        assert_eq!(run("h1", &signals).status, Status::Fail);

        signals.headings.h1 = vec!["One".to_string(), "Two".to_string()];
        let check = run("h1", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Warn, 6));
        assert!(check.title.contains("(2)"));
    }

    #[test]
    fn all_images_with_alt_earn_full_points() {
        let mut signals = ideal_signals();
        signals.images.total = 10;
        signals.images.with_alt = 10;
        signals.images.without_alt = 0;
        let check = run("img", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Ok, 8));
    }

    #[test]
    fn mostly_missing_alt_fails_with_partial_credit() {
        let mut signals = ideal_signals();
        signals.images.total = 10;
        signals.images.with_alt = 4;
        signals.images.without_alt = 6;
        let check = run("img", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Fail, 3));
    }

    #[test]
    fn half_missing_alt_only_warns() {
        let mut signals = ideal_signals();
        signals.images.total = 4;
        signals.images.with_alt = 2;
        signals.images.without_alt = 2;
        let check = run("img", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Warn, 4));
    }

    #[test]
    fn no_images_is_informational_with_full_points() {
        let mut signals = ideal_signals();
        signals.images = Default::default();
        let check = run("img", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Info, 8));
    }

    #[test]
    fn open_graph_partial_credit() {
        let mut signals = ideal_signals();
        signals.open_graph = Default::default();
        assert_eq!(run("og", &signals).status, Status::Fail);

        signals.open_graph.title = true;
        signals.open_graph.image = true;
        let check = run("og", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Warn, 4));
        assert_eq!(check.detail, "Missing: og:description, og:url");

        signals.open_graph.url = true;
        let check = run("og", &signals);
        assert_eq!((check.status, check.points_earned), (Status::Ok, 6));
    }

    #[test]
    fn content_word_count_tiers() {
        let mut signals = ideal_signals();
        for (words, status, points) in [
            (99, Status::Fail, 0),
            (100, Status::Warn, 2),
            (299, Status::Warn, 2),
            (300, Status::Ok, 5),
        ] {
            signals.content.word_count = words;
            let check = run("content", &signals);
            assert_eq!((check.status, check.points_earned), (status, points));
        }
    }

    #[test]
    fn h2_partial_credit() {
        let mut signals = ideal_signals();
        let cases = [(0, Status::Warn, 0), (1, Status::Warn, 1), (2, Status::Ok, 3)];
        for (count, status, points) in cases {
            signals.headings.h2 = count;
            let check = run("h2", &signals);
            assert_eq!((check.status, check.points_earned), (status, points));
        }
    }

    #[test]
    fn presence_rules_warn_or_fail_when_absent() {
        let signals = PageSignals::default();
        assert_eq!(run("https", &signals).status, Status::Fail);
        assert_eq!(run("viewport", &signals).status, Status::Fail);
        for id in ["canonical", "lang", "schema", "favicon", "twitter"] {
            let check = run(id, &signals);
            assert_eq!((check.status, check.points_earned), (Status::Warn, 0), "{id}");
        }
    }

    #[test]
    fn lazy_rule_is_silent_for_few_images() {
        let mut signals = ideal_signals();
        signals.performance.has_lazy_images = false;
        signals.images.total = 3;
        assert!(rule("lazy").check(&signals).is_none());

        signals.images.total = 4;
        let check = rule("lazy").check(&signals).expect("lazy should warn");
        assert_eq!((check.status, check.points_earned), (Status::Warn, 0));

        signals.images.total = 0;
        signals.performance.has_lazy_images = true;
        assert!(rule("lazy").check(&signals).is_none());

        signals.images.total = 1;
        let check = rule("lazy").check(&signals).expect("lazy should pass");
        assert_eq!((check.status, check.points_earned), (Status::Ok, 2));
    }

    #[test]
    fn every_rule_respects_its_max_points() {
        for signals in [PageSignals::default(), ideal_signals()] {
            for rule in CATALOGUE {
                if let Some(check) = rule.check(&signals) {
                    assert!(check.points_earned <= check.points_max, "{}", rule.id);
                    assert_eq!(check.points_max, rule.max_points);
                    assert!(check.impact_weight <= 100);
                }
            }
        }
    }
}
