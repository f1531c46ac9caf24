use crate::repository::{Entity, Searchable, contains_ignore_case};
use serde::{Deserialize, Serialize};

/// A service card on the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, rename = "img")]
    pub image_url: String,
}

impl Entity for ServiceOffering {
    const ENTITY_TYPE: &'static str = "service";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for ServiceOffering {
    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query) || contains_ignore_case(&self.description, query)
    }
}
