//! Flat record of on-page signals as produced by the page extractor.
//!
//! Every field deserializes leniently: a missing, null, negative or
//! wrong-typed value collapses to its absent default instead of failing,
//! so the rules downstream only ever see well-typed input.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_else(|err| {
        debug!(%err, "signal field has unexpected shape, using absent default");
        T::default()
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSignals {
    #[serde(deserialize_with = "lenient")]
    pub title: TitleSignal,
    #[serde(deserialize_with = "lenient")]
    pub meta_description: MetaDescription,
    #[serde(deserialize_with = "lenient")]
    pub meta_keywords: MetaKeywords,
    #[serde(deserialize_with = "lenient")]
    pub headings: Headings,
    #[serde(deserialize_with = "lenient")]
    pub images: Images,
    #[serde(deserialize_with = "lenient")]
    pub links: Links,
    #[serde(deserialize_with = "lenient")]
    pub canonical: Canonical,
    #[serde(deserialize_with = "lenient")]
    pub open_graph: OpenGraph,
    #[serde(deserialize_with = "lenient")]
    pub twitter_card: TwitterCard,
    #[serde(deserialize_with = "lenient")]
    pub robots: MetaTag,
    #[serde(deserialize_with = "lenient")]
    pub viewport: MetaTag,
    #[serde(deserialize_with = "lenient")]
    pub structured_data: StructuredData,
    #[serde(deserialize_with = "lenient")]
    pub content: Content,
    #[serde(deserialize_with = "lenient")]
    pub https: Https,
    #[serde(deserialize_with = "lenient")]
    pub lang: Lang,
    #[serde(deserialize_with = "lenient")]
    pub url: PageUrl,
    #[serde(deserialize_with = "lenient")]
    pub favicon: Favicon,
    #[serde(deserialize_with = "lenient")]
    pub performance: Performance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSignal {
    #[serde(deserialize_with = "lenient")]
    pub text: String,
    #[serde(deserialize_with = "lenient")]
    pub length: u32,
}

impl TitleSignal {
    /// Reported length, or the character count when the extractor left it at zero.
    pub fn effective_length(&self) -> u32 {
        effective_length(&self.text, self.length)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaDescription {
    #[serde(deserialize_with = "lenient")]
    pub text: String,
    #[serde(deserialize_with = "lenient")]
    pub length: u32,
    #[serde(deserialize_with = "lenient")]
    pub exists: bool,
}

impl MetaDescription {
    pub fn effective_length(&self) -> u32 {
        effective_length(&self.text, self.length)
    }
}

fn effective_length(text: &str, reported: u32) -> u32 {
    if reported == 0 {
        u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
    } else {
        reported
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaKeywords {
    #[serde(deserialize_with = "lenient")]
    pub text: String,
    #[serde(deserialize_with = "lenient")]
    pub exists: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Headings {
    #[serde(deserialize_with = "lenient")]
    pub h1: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub h2: u32,
    #[serde(deserialize_with = "lenient")]
    pub h3: u32,
    #[serde(deserialize_with = "lenient")]
    pub h4: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Images {
    #[serde(deserialize_with = "lenient")]
    pub total: u32,
    #[serde(deserialize_with = "lenient")]
    pub with_alt: u32,
    #[serde(deserialize_with = "lenient")]
    pub without_alt: u32,
}

impl Images {
    /// Images missing alt text, never more than the total.
    pub fn missing_alt(&self) -> u32 {
        self.without_alt.min(self.total)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(deserialize_with = "lenient")]
    pub total: u32,
    #[serde(deserialize_with = "lenient")]
    pub internal: u32,
    #[serde(deserialize_with = "lenient")]
    pub external: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canonical {
    #[serde(deserialize_with = "lenient")]
    pub exists: bool,
    #[serde(deserialize_with = "lenient")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraph {
    #[serde(deserialize_with = "lenient")]
    pub title: bool,
    #[serde(deserialize_with = "lenient")]
    pub description: bool,
    #[serde(deserialize_with = "lenient")]
    pub image: bool,
    #[serde(deserialize_with = "lenient")]
    pub url: bool,
}

impl OpenGraph {
    pub const TAGS: [&'static str; 4] = ["title", "description", "image", "url"];

    fn flags(&self) -> [bool; 4] {
        [self.title, self.description, self.image, self.url]
    }

    pub fn present_count(&self) -> u32 {
        self.flags().iter().filter(|present| **present).count() as u32
    }

    pub fn missing(&self) -> Vec<&'static str> {
        Self::TAGS
            .iter()
            .zip(self.flags())
            .filter(|(_, present)| !present)
            .map(|(tag, _)| *tag)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterCard {
    #[serde(deserialize_with = "lenient")]
    pub exists: bool,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub card_type: String,
}

/// A `<meta name=...>` tag reduced to presence plus its content attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaTag {
    #[serde(deserialize_with = "lenient")]
    pub exists: bool,
    #[serde(deserialize_with = "lenient")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredData {
    #[serde(deserialize_with = "lenient")]
    pub count: u32,
    #[serde(deserialize_with = "lenient")]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Content {
    #[serde(deserialize_with = "lenient")]
    pub word_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Https {
    #[serde(deserialize_with = "lenient")]
    pub secure: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lang {
    #[serde(deserialize_with = "lenient")]
    pub exists: bool,
    #[serde(deserialize_with = "lenient")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageUrl {
    #[serde(deserialize_with = "lenient")]
    pub full: String,
    #[serde(deserialize_with = "lenient")]
    pub hostname: String,
    #[serde(deserialize_with = "lenient")]
    pub has_underscores: bool,
    #[serde(deserialize_with = "lenient")]
    pub length: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Favicon {
    #[serde(deserialize_with = "lenient")]
    pub exists: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Performance {
    #[serde(deserialize_with = "lenient")]
    pub has_lazy_images: bool,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Signals that satisfy every rule in the catalogue.
    pub fn ideal_signals() -> PageSignals {
        let title = "Handmade ceramic mugs and bowls | Clayworks";
        let description = "Browse handmade ceramic mugs, bowls and plates thrown in small \
                           batches. Free shipping on orders over fifty dollars.";
        PageSignals {
            title: TitleSignal {
                text: title.to_string(),
                length: title.chars().count() as u32,
            },
            meta_description: MetaDescription {
                text: description.to_string(),
                length: description.chars().count() as u32,
                exists: true,
            },
            headings: Headings {
                h1: vec!["Handmade ceramics".to_string()],
                h2: 4,
                h3: 6,
                h4: 0,
            },
            images: Images {
                total: 12,
                with_alt: 12,
                without_alt: 0,
            },
            links: Links {
                total: 40,
                internal: 32,
                external: 8,
            },
            canonical: Canonical {
                exists: true,
                url: "https://clayworks.example/".to_string(),
            },
            open_graph: OpenGraph {
                title: true,
                description: true,
                image: true,
                url: true,
            },
            twitter_card: TwitterCard {
                exists: true,
                card_type: "summary_large_image".to_string(),
            },
            viewport: MetaTag {
                exists: true,
                content: "width=device-width, initial-scale=1".to_string(),
            },
            structured_data: StructuredData {
                count: 1,
                types: vec!["Organization".to_string()],
            },
            content: Content { word_count: 500 },
            https: Https { secure: true },
            lang: Lang {
                exists: true,
                value: "en".to_string(),
            },
            url: PageUrl {
                full: "https://clayworks.example/".to_string(),
                hostname: "clayworks.example".to_string(),
                has_underscores: false,
                length: 26,
            },
            favicon: Favicon { exists: true },
            performance: Performance {
                has_lazy_images: true,
            },
            ..PageSignals::default()
        }
    }
}
