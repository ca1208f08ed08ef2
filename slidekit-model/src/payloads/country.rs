use serde::{Deserialize, Serialize};

/// One entry of the country lookup response (the API returns an array).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub flags: CountryFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountryFlags {
    #[serde(default)]
    pub svg: String,
}

impl CountryRecord {
    /// Timezone zone id of the first capital, `Region/Capital_Name`.
    ///
    /// Whitespace runs in the capital collapse to a single `_`. Returns
    /// `None` when the record lists no capital.
    pub fn zone_id(&self) -> Option<String> {
        let capital = self.capital.first()?;
        let capital = capital.split_whitespace().collect::<Vec<_>>().join("_");
        Some(format!("{}/{}", self.region, capital))
    }
}
