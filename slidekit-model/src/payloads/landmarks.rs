use serde::{Deserialize, Serialize};

/// Search response of the landmark lookup (`list=search` query).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LandmarkSearch {
    #[serde(default)]
    pub query: Option<LandmarkSearchQuery>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LandmarkSearchQuery {
    #[serde(default)]
    pub search: Vec<LandmarkHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkHit {
    pub title: String,
}

impl LandmarkSearch {
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.query
            .iter()
            .flat_map(|query| query.search.iter())
            .map(|hit| hit.title.as_str())
    }
}
