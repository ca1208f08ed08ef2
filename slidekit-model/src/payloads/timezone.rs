use serde::{Deserialize, Serialize};

/// Timezone lookup response; only the local time is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneInfo {
    pub current_local_time: String,
}
