use crate::types::report::{FeatureFlag, PageOverview};
use crate::types::signals::PageSignals;

pub fn page_overview(signals: &PageSignals) -> PageOverview {
    let images = &signals.images;
    let links = &signals.links;
    PageOverview {
        word_count: signals.content.word_count,
        images_total: images.total,
        images_with_alt: images.total - images.missing_alt(),
        links_total: links.total,
        links_internal: links.internal,
        links_external: links.external,
        h1_count: signals.headings.h1.len(),
        h2_count: signals.headings.h2,
        h3_count: signals.headings.h3,
        schema_blocks: signals.structured_data.count,
        open_graph_tags: signals.open_graph.present_count(),
        flags: feature_flags(signals),
    }
}

fn feature_flags(signals: &PageSignals) -> Vec<FeatureFlag> {
    [
        ("HTTPS", signals.https.secure),
        ("Canonical", signals.canonical.exists),
        ("Viewport", signals.viewport.exists),
        ("lang attr", signals.lang.exists),
        ("Favicon", signals.favicon.exists),
        ("Twitter Card", signals.twitter_card.exists),
        ("Schema.org", signals.structured_data.count > 0),
        ("Lazy Images", signals.performance.has_lazy_images),
    ]
    .into_iter()
    .map(|(name, on)| FeatureFlag { name, on })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::signals::fixtures::ideal_signals;

    #[test]
    fn overview_mirrors_page_statistics() {
        let overview = page_overview(&ideal_signals());
        assert_eq!(overview.word_count, 500);
        assert_eq!(overview.images_total, 12);
        assert_eq!(overview.images_with_alt, 12);
        assert_eq!((overview.links_internal, overview.links_external), (32, 8));
        assert_eq!((overview.h1_count, overview.h2_count, overview.h3_count), (1, 4, 6));
        assert_eq!(overview.open_graph_tags, 4);
        assert!(overview.flags.iter().all(|flag| flag.on));
    }

    #[test]
    fn flags_are_off_for_absent_signals() {
        let overview = page_overview(&PageSignals::default());
        assert_eq!(overview.flags.len(), 8);
        assert!(overview.flags.iter().all(|flag| !flag.on));
        assert_eq!(overview.flags[0].name, "HTTPS");
    }
}
