//! Remediation tips keyed off check ids.
//!
//! The tip book is evaluated top to bottom without short-circuiting, so the
//! output order is the authoring order and several tips can fire at once.

use crate::types::report::{Priority, Tip};
use crate::types::scoring::{CheckResult, Status};
use crate::types::signals::PageSignals;

#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    Fails(&'static str),
    NotOk(&'static str),
    WarnsOrFails(&'static str),
    Warns(&'static str),
}

impl Trigger {
    fn id(self) -> &'static str {
        match self {
            Trigger::Fails(id)
            | Trigger::NotOk(id)
            | Trigger::WarnsOrFails(id)
            | Trigger::Warns(id) => id,
        }
    }

    fn accepts(self, status: Status) -> bool {
        match self {
            Trigger::Fails(_) => status == Status::Fail,
            Trigger::NotOk(_) => status != Status::Ok,
            Trigger::WarnsOrFails(_) => matches!(status, Status::Warn | Status::Fail),
            Trigger::Warns(_) => status == Status::Warn,
        }
    }

    /// A check id with no result never fires.
    fn fires(self, checks: &[CheckResult]) -> bool {
        checks
            .iter()
            .find(|check| check.id == self.id())
            .is_some_and(|check| self.accepts(check.status))
    }
}

/// `{missing_alt}` and `{word_count}` in a template are filled from the signals.
pub struct TipTemplate {
    pub priority: Priority,
    pub title: &'static str,
    pub body: &'static str,
    pub impact_weight: u8,
}

impl TipTemplate {
    fn render(&self, signals: &PageSignals) -> Tip {
        Tip {
            priority: self.priority,
            title: fill(self.title, signals),
            body: fill(self.body, signals),
            impact_weight: self.impact_weight,
        }
    }
}

pub struct TipTrigger {
    pub trigger: Trigger,
    pub tip: TipTemplate,
}

fn fill(template: &str, signals: &PageSignals) -> String {
    template
        .replace("{missing_alt}", &signals.images.missing_alt().to_string())
        .replace("{word_count}", &signals.content.word_count.to_string())
}

pub const TIP_BOOK: &[TipTrigger] = &[
    TipTrigger {
        trigger: Trigger::Fails("https"),
        tip: TipTemplate {
            priority: Priority::Crit,
            title: "Enable HTTPS / SSL",
            body: "HTTPS is a confirmed Google ranking signal and builds user trust. Get a free certificate from Let's Encrypt or enable it in your hosting provider's control panel.",
            impact_weight: 95,
        },
    },
    TipTrigger {
        trigger: Trigger::Fails("title"),
        tip: TipTemplate {
            priority: Priority::Crit,
            title: "Add a <title> tag",
            body: "Every page needs a unique, descriptive title of 30-60 characters containing your primary keyword. It is the single most impactful on-page SEO element.",
            impact_weight: 95,
        },
    },
    TipTrigger {
        trigger: Trigger::Fails("desc"),
        tip: TipTemplate {
            priority: Priority::Crit,
            title: "Write a meta description",
            body: "Craft a compelling 70-160 character description with your keyword. It is not a direct ranking factor but strongly affects click-through from search results.",
            impact_weight: 85,
        },
    },
    TipTrigger {
        trigger: Trigger::Fails("h1"),
        tip: TipTemplate {
            priority: Priority::Crit,
            title: "Add a single H1 heading",
            body: "Place your primary keyword in one H1 tag near the top of the page. It signals the page's main topic to users and search engines.",
            impact_weight: 80,
        },
    },
    TipTrigger {
        trigger: Trigger::Fails("viewport"),
        tip: TipTemplate {
            priority: Priority::High,
            title: "Add viewport meta tag",
            body: "Insert <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> so the page renders properly on mobile. Mobile-first indexing makes this essential.",
            impact_weight: 75,
        },
    },
    TipTrigger {
        trigger: Trigger::NotOk("canonical"),
        tip: TipTemplate {
            priority: Priority::High,
            title: "Implement canonical URLs",
            body: "Add <link rel=\"canonical\" href=\"https://yoursite.com/page\"> to consolidate link equity and prevent duplicate content across paginated or parameter-driven URLs.",
            impact_weight: 70,
        },
    },
    TipTrigger {
        trigger: Trigger::NotOk("og"),
        tip: TipTemplate {
            priority: Priority::High,
            title: "Complete Open Graph tags",
            body: "Add og:title, og:description, og:image and og:url. They control how your page previews when shared on social networks and messaging apps.",
            impact_weight: 65,
        },
    },
    TipTrigger {
        trigger: Trigger::WarnsOrFails("img"),
        tip: TipTemplate {
            priority: Priority::High,
            title: "Fix {missing_alt} missing alt texts",
            body: "Write descriptive alt attributes for all images. This aids image search indexing, improves accessibility and provides keyword context.",
            impact_weight: 65,
        },
    },
    TipTrigger {
        trigger: Trigger::NotOk("schema"),
        tip: TipTemplate {
            priority: Priority::Med,
            title: "Add JSON-LD structured data",
            body: "Implement Schema.org markup (Article, Product, FAQPage, BreadcrumbList) to unlock rich snippets and lift click-through rates.",
            impact_weight: 60,
        },
    },
    TipTrigger {
        trigger: Trigger::NotOk("twitter"),
        tip: TipTemplate {
            priority: Priority::Med,
            title: "Add Twitter Card meta tags",
            body: "Include twitter:card, twitter:title, twitter:description and twitter:image to control how your content renders when shared on X (Twitter).",
            impact_weight: 35,
        },
    },
    TipTrigger {
        trigger: Trigger::NotOk("content"),
        tip: TipTemplate {
            priority: Priority::Med,
            title: "Expand page content",
            body: "With only {word_count} words, this page may be seen as thin content. Aim for 600+ words of genuinely useful information with relevant keywords and headings.",
            impact_weight: 55,
        },
    },
    TipTrigger {
        trigger: Trigger::NotOk("h2"),
        tip: TipTemplate {
            priority: Priority::Low,
            title: "Improve heading hierarchy",
            body: "Add multiple H2 and H3 headings to break up content. This improves readability and helps search engines understand the page structure.",
            impact_weight: 40,
        },
    },
    TipTrigger {
        trigger: Trigger::NotOk("lang"),
        tip: TipTemplate {
            priority: Priority::Low,
            title: "Declare page language",
            body: "Add lang=\"en\" (or your locale) to the <html> element so search engines serve the right language results.",
            impact_weight: 45,
        },
    },
    TipTrigger {
        trigger: Trigger::Warns("lazy"),
        tip: TipTemplate {
            priority: Priority::Low,
            title: "Add lazy loading to images",
            body: "Add loading=\"lazy\" to images below the fold. This improves Core Web Vitals, which are direct Google ranking factors.",
            impact_weight: 40,
        },
    },
];

pub const FALLBACK_TIP: TipTemplate = TipTemplate {
    priority: Priority::Low,
    title: "Outstanding SEO health!",
    body: "This page ticks all the key SEO boxes. Focus on content quality, earning authoritative backlinks and monitoring Core Web Vitals for continued growth.",
    impact_weight: 20,
};

pub fn fallback_tip(signals: &PageSignals) -> Tip {
    FALLBACK_TIP.render(signals)
}

pub fn generate_tips(
    book: &[TipTrigger],
    signals: &PageSignals,
    checks: &[CheckResult],
) -> Vec<Tip> {
    let tips: Vec<Tip> = book
        .iter()
        .filter(|entry| entry.trigger.fires(checks))
        .map(|entry| entry.tip.render(signals))
        .collect();
    if tips.is_empty() {
        vec![fallback_tip(signals)]
    } else {
        tips
    }
}
