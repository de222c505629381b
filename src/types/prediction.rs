use serde::{Deserialize, Serialize};

/// One autocomplete suggestion. `place_id` is always non-empty; predictions
/// the provider returns without one are dropped during normalization since
/// they can never be resolved to a detail fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacePrediction {
    #[serde(rename = "placeID")]
    pub place_id: String,
    pub description: String,
    pub primary_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<i64>,
}
