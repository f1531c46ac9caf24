use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentItem {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CtaBlock {
    pub title: String,
    pub subtitle: String,
    pub button: String,
}

/// Editable copy of the public site.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: HeroBlock,
    pub services: Vec<ContentItem>,
    pub testimonials: Vec<Testimonial>,
    pub cta: CtaBlock,
}
