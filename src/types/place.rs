use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, Viewport};

/// Yes/no/unknown place attribute. "Unknown" means the provider did not
/// know, which is distinct from "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriState {
    True,
    False,
    Unknown,
}

impl TriState {
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => TriState::True,
            Some(false) => TriState::False,
            None => TriState::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    Unknown,
}

impl BusinessStatus {
    /// Decodes the provider's status string. Values outside the known set
    /// fall through to `Unknown` so provider enum growth never breaks us.
    pub fn from_provider(status: Option<&str>) -> Self {
        match status {
            Some("OPERATIONAL") => BusinessStatus::Operational,
            Some("CLOSED_TEMPORARILY") => BusinessStatus::ClosedTemporarily,
            Some("CLOSED_PERMANENTLY") => BusinessStatus::ClosedPermanently,
            _ => BusinessStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponent {
    pub types: Vec<String>,
    pub name: String,
    pub short_name: String,
}

/// `attribution_url` is always a string: the first hyperlink found in the
/// provider's attribution blob, or empty when none was embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub attribution_url: String,
    pub attribution_name: String,
    pub width: i32,
    pub height: i32,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlusCode {
    pub compound_code: String,
    pub global_code: String,
}

/// Stable place record shared by detail fetches and searches. Optional
/// fields are omitted from JSON when the provider did not return them;
/// absence never collapses into a zero or empty placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "placeID", skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_components: Option<Vec<AddressComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
    #[serde(rename = "iconImageURL", skip_serializing_if = "Option::is_none")]
    pub icon_image_url: Option<String>,
    pub business_status: BusinessStatus,
    pub takeout: TriState,
    pub delivery: TriState,
    pub dine_in: TriState,
    pub curbside_pickup: TriState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,
}
