use serde::{Deserialize, Serialize};

// Raw response shapes for the places web service. Serialize is derived too
// so tests can build mock bodies from the same structs.

#[derive(Serialize, Deserialize)]
pub struct RawStructuredFormatting {
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RawPrediction {
    #[serde(default)]
    pub place_id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub structured_formatting: Option<RawStructuredFormatting>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub distance_meters: Option<i64>,
}

#[derive(Serialize, Deserialize)]
pub struct RawPredictionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub predictions: Vec<RawPrediction>,
}

#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct RawLatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
pub struct RawViewport {
    #[serde(default)]
    pub northeast: Option<RawLatLng>,
    #[serde(default)]
    pub southwest: Option<RawLatLng>,
}

#[derive(Serialize, Deserialize)]
pub struct RawGeometry {
    #[serde(default)]
    pub location: Option<RawLatLng>,
    #[serde(default)]
    pub viewport: Option<RawViewport>,
}

#[derive(Serialize, Deserialize)]
pub struct RawPlusCode {
    #[serde(default)]
    pub compound_code: Option<String>,
    #[serde(default)]
    pub global_code: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RawOpeningHours {
    #[serde(default)]
    pub weekday_text: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct RawAddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RawPhoto {
    #[serde(default)]
    pub html_attributions: Vec<String>,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub photo_reference: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RawPlace {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub plus_code: Option<RawPlusCode>,
    pub geometry: Option<RawGeometry>,
    pub opening_hours: Option<RawOpeningHours>,
    pub formatted_phone_number: Option<String>,
    pub types: Option<Vec<String>>,
    pub price_level: Option<i32>,
    pub website: Option<String>,
    pub formatted_address: Option<String>,
    pub address_components: Option<Vec<RawAddressComponent>>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    pub utc_offset: Option<i32>,
    pub business_status: Option<String>,
    pub icon: Option<String>,
    pub takeout: Option<bool>,
    pub delivery: Option<bool>,
    pub dine_in: Option<bool>,
    pub curbside_pickup: Option<bool>,
    pub photos: Option<Vec<RawPhoto>>,
}

#[derive(Serialize, Deserialize)]
pub struct RawPlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
    #[serde(default)]
    pub result: Option<RawPlace>,
}

#[derive(Serialize, Deserialize)]
pub struct RawSearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
    #[serde(default)]
    pub results: Vec<RawPlace>,
}
