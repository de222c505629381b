use crate::types::coordinate::{Coordinate, LocationBounds};
use crate::types::filters::{BoundsParam, CoordinateParam, PredictionFilters};

/// Provider-native filter: the query-parameter encodings the places web
/// service expects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeFilter {
    pub types: Vec<String>,
    /// `country:fr|country:us`
    pub components: Option<String>,
    /// `rectangle:south,west|north,east`
    pub location_bias: Option<String>,
    pub location_restriction: Option<String>,
    /// `lat,lng`
    pub origin: Option<String>,
}

/// Counts of sub-filters dropped for being malformed. Dropping is never a
/// hard failure; the facade logs these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterDiagnostics {
    pub dropped_bounds: u32,
    pub dropped_origins: u32,
}

impl FilterDiagnostics {
    pub fn dropped_total(&self) -> u32 {
        self.dropped_bounds + self.dropped_origins
    }
}

/// A coordinate param only parses when both parts are present and finite.
pub fn parse_coordinate(param: &CoordinateParam) -> Option<Coordinate> {
    match (param.latitude, param.longitude) {
        (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
            Some(Coordinate {
                latitude,
                longitude,
            })
        }
        _ => None,
    }
}

/// A bounds only parses when both corners parse.
pub fn parse_bounds(param: &BoundsParam) -> Option<LocationBounds> {
    let north_east = parse_coordinate(param.north_east.as_ref()?)?;
    let south_west = parse_coordinate(param.south_west.as_ref()?)?;

    Some(LocationBounds {
        north_east,
        south_west,
    })
}

fn encode_rectangle(bounds: &LocationBounds) -> String {
    format!(
        "rectangle:{},{}|{},{}",
        bounds.south_west.latitude,
        bounds.south_west.longitude,
        bounds.north_east.latitude,
        bounds.north_east.longitude
    )
}

fn non_empty(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .collect()
}

/// Builds the provider filter from the abstract one. Each optional geo field
/// is validated independently; invalid or partially-specified sub-objects
/// are dropped and counted rather than failing the request.
pub fn build_filter(filters: &PredictionFilters) -> (NativeFilter, FilterDiagnostics) {
    let mut native = NativeFilter {
        types: non_empty(&filters.types),
        ..Default::default()
    };
    let mut diagnostics = FilterDiagnostics::default();

    let countries = non_empty(&filters.countries);
    if !countries.is_empty() {
        native.components = Some(
            countries
                .iter()
                .map(|c| format!("country:{}", c))
                .collect::<Vec<_>>()
                .join("|"),
        );
    }

    if let Some(bias) = &filters.location_bias {
        match parse_bounds(bias) {
            Some(bounds) => native.location_bias = Some(encode_rectangle(&bounds)),
            None => diagnostics.dropped_bounds += 1,
        }
    }

    if let Some(restriction) = &filters.location_restriction {
        match parse_bounds(restriction) {
            Some(bounds) => native.location_restriction = Some(encode_rectangle(&bounds)),
            None => diagnostics.dropped_bounds += 1,
        }
    }

    if let Some(origin) = &filters.origin {
        match parse_coordinate(origin) {
            Some(coordinate) => {
                native.origin = Some(format!("{},{}", coordinate.latitude, coordinate.longitude))
            }
            None => diagnostics.dropped_origins += 1,
        }
    }

    (native, diagnostics)
}
