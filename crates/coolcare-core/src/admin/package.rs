use crate::repository::{Entity, Searchable, contains_ignore_case};
use serde::{Deserialize, Serialize};

/// A priced service package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    /// Display price, as entered (e.g. `"₹399"`).
    pub price: String,
    pub features: Vec<String>,
    pub badge: String,
    pub details: String,
}

impl Entity for Package {
    const ENTITY_TYPE: &'static str = "package";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Package {
    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query)
            || self.price.contains(query)
            || contains_ignore_case(&self.badge, query)
    }
}

/// Splits a comma separated feature list, trimming entries and dropping
/// empty ones.
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(ToString::to_string)
        .collect()
}
