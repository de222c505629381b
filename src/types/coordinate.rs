use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBounds {
    pub north_east: Coordinate,
    pub south_west: Coordinate,
}

/// A provider viewport is kept even when degenerate; `valid` tells the
/// caller whether the box spans a real area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub north_east: Coordinate,
    pub south_west: Coordinate,
    pub valid: bool,
}
