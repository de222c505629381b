use serde::{Deserialize, Serialize};

/// A possibly-incomplete coordinate as received from a caller. Both parts
/// must be present and finite before it counts as a coordinate; the filter
/// builder drops it otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateParam {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsParam {
    pub north_east: Option<CoordinateParam>,
    pub south_west: Option<CoordinateParam>,
}

/// Abstract geo/category filter for prediction and text searches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictionFilters {
    pub types: Vec<String>,
    pub countries: Vec<String>,
    pub location_bias: Option<BoundsParam>,
    pub location_restriction: Option<BoundsParam>,
    pub origin: Option<CoordinateParam>,
}
