use crate::types::coordinate::{Coordinate, Viewport};
use crate::types::place::{
    AddressComponent, BusinessStatus, Photo, Place, PlusCode, TriState,
};
use crate::types::prediction::PlacePrediction;

use super::types::provider_response::{
    RawLatLng, RawPhoto, RawPlace, RawPrediction, RawViewport,
};

fn coordinate_from_raw(raw: &RawLatLng) -> Coordinate {
    Coordinate {
        latitude: raw.lat,
        longitude: raw.lng,
    }
}

/// A prediction without a place identifier can never be resolved to a
/// detail fetch, so it is dropped instead of surfaced with a null key.
pub fn normalize_prediction(raw: RawPrediction) -> Option<PlacePrediction> {
    let place_id = raw.place_id.filter(|id| !id.is_empty())?;

    let (primary_text, secondary_text) = match raw.structured_formatting {
        Some(formatting) => (formatting.main_text, formatting.secondary_text),
        None => (raw.description.clone(), None),
    };

    Some(PlacePrediction {
        place_id,
        description: raw.description,
        primary_text,
        secondary_text,
        types: raw.types,
        distance_meters: raw.distance_meters,
    })
}

pub fn normalize_predictions(raws: Vec<RawPrediction>) -> Vec<PlacePrediction> {
    raws.into_iter().filter_map(normalize_prediction).collect()
}

/// Strips markup tags from an attribution blob, leaving its text content.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Finds the first embedded hyperlink in an attribution blob. Returns an
/// empty string when none is found so the attribution URL is always a
/// string joined with the attribution name.
fn first_url(text: &str) -> String {
    let start = match text.find("https://").or_else(|| text.find("http://")) {
        Some(idx) => idx,
        None => return String::new(),
    };

    let rest = &text[start..];
    let end = rest
        .find(|ch: char| ch.is_whitespace() || matches!(ch, '"' | '\'' | '<' | '>'))
        .unwrap_or(rest.len());

    rest[..end].to_string()
}

fn normalize_photo(raw: RawPhoto) -> Photo {
    let blob = raw.html_attributions.join(" ");

    Photo {
        attribution_url: first_url(&blob),
        attribution_name: strip_markup(&blob).trim().to_string(),
        width: raw.width,
        height: raw.height,
        reference: raw.photo_reference.unwrap_or_default(),
    }
}

/// Both corners are required for a viewport. A degenerate box (collapsed on
/// either axis) is still returned, marked invalid, so the caller decides
/// whether to trust it. Longitude is only compared for equality because a
/// box may legitimately wrap the antimeridian.
fn normalize_viewport(raw: &RawViewport) -> Option<Viewport> {
    let north_east = coordinate_from_raw(raw.northeast.as_ref()?);
    let south_west = coordinate_from_raw(raw.southwest.as_ref()?);

    let valid = north_east.latitude > south_west.latitude
        && north_east.longitude != south_west.longitude;

    Some(Viewport {
        north_east,
        south_west,
        valid,
    })
}

/// Maps every field the provider returned, independent of which fields were
/// requested. Absent numerics stay absent instead of collapsing to zero.
pub fn normalize_place(raw: RawPlace, attributions: &[String]) -> Place {
    let (coordinate, viewport) = match &raw.geometry {
        Some(geometry) => (
            geometry.location.as_ref().map(coordinate_from_raw),
            geometry.viewport.as_ref().and_then(normalize_viewport),
        ),
        None => (None, None),
    };

    let plus_code = raw.plus_code.map(|code| PlusCode {
        compound_code: code.compound_code.unwrap_or_default(),
        global_code: code.global_code.unwrap_or_default(),
    });

    let opening_hours = raw.opening_hours.and_then(|hours| hours.weekday_text);

    let address_components = raw.address_components.map(|components| {
        components
            .into_iter()
            .map(|component| AddressComponent {
                types: component.types,
                name: component.long_name,
                short_name: component.short_name,
            })
            .collect()
    });

    let photos = raw
        .photos
        .map(|photos| photos.into_iter().map(normalize_photo).collect());

    let place_attributions = if attributions.is_empty() {
        None
    } else {
        Some(attributions.join(", "))
    };

    Place {
        name: raw.name,
        place_id: raw.place_id,
        plus_code,
        coordinate,
        opening_hours,
        phone_number: raw.formatted_phone_number,
        types: raw.types,
        price_level: raw.price_level,
        website: raw.website,
        viewport,
        formatted_address: raw.formatted_address,
        address_components,
        attributions: place_attributions,
        rating: raw.rating,
        user_ratings_total: raw.user_ratings_total,
        utc_offset_minutes: raw.utc_offset,
        icon_image_url: raw.icon,
        business_status: BusinessStatus::from_provider(raw.business_status.as_deref()),
        takeout: TriState::from_flag(raw.takeout),
        delivery: TriState::from_flag(raw.delivery),
        dine_in: TriState::from_flag(raw.dine_in),
        curbside_pickup: TriState::from_flag(raw.curbside_pickup),
        photos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::places_client::types::provider_response::{
        RawAddressComponent, RawGeometry, RawOpeningHours, RawPlusCode, RawStructuredFormatting,
    };

    fn populated_raw_place() -> RawPlace {
        RawPlace {
            name: Some("Eiffel Tower".to_string()),
            place_id: Some("place-1".to_string()),
            plus_code: Some(RawPlusCode {
                compound_code: Some("V75V+8Q Paris".to_string()),
                global_code: Some("8FW4V75V+8Q".to_string()),
            }),
            geometry: Some(RawGeometry {
                location: Some(RawLatLng {
                    lat: 48.8584,
                    lng: 2.2945,
                }),
                viewport: Some(RawViewport {
                    northeast: Some(RawLatLng {
                        lat: 48.8597,
                        lng: 2.2958,
                    }),
                    southwest: Some(RawLatLng {
                        lat: 48.857,
                        lng: 2.2931,
                    }),
                }),
            }),
            opening_hours: Some(RawOpeningHours {
                weekday_text: Some(vec!["Monday: 9:00 AM - 11:45 PM".to_string()]),
            }),
            formatted_phone_number: Some("+33 892 70 12 39".to_string()),
            types: Some(vec!["tourist_attraction".to_string()]),
            price_level: Some(2),
            website: Some("https://www.toureiffel.paris/".to_string()),
            formatted_address: Some("Champ de Mars, Paris".to_string()),
            address_components: Some(vec![RawAddressComponent {
                long_name: "Paris".to_string(),
                short_name: "Paris".to_string(),
                types: vec!["locality".to_string()],
            }]),
            rating: Some(4.7),
            user_ratings_total: Some(310000),
            utc_offset: Some(60),
            business_status: Some("OPERATIONAL".to_string()),
            icon: Some("https://example.com/icon.png".to_string()),
            takeout: Some(true),
            delivery: Some(false),
            dine_in: None,
            curbside_pickup: Some(true),
            photos: Some(vec![RawPhoto {
                html_attributions: vec![
                    "<a href=\"https://maps.example.com/contrib/42\">Jane Doe</a>".to_string(),
                ],
                width: 4000,
                height: 3000,
                photo_reference: Some("photo-ref-1".to_string()),
            }]),
        }
    }

    #[test]
    fn prediction_without_place_id_is_dropped() {
        let raws = vec![
            RawPrediction {
                place_id: None,
                description: "anonymous".to_string(),
                structured_formatting: None,
                types: vec![],
                distance_meters: None,
            },
            RawPrediction {
                place_id: Some("place-2".to_string()),
                description: "Eiffel Tower, Paris".to_string(),
                structured_formatting: Some(RawStructuredFormatting {
                    main_text: "Eiffel Tower".to_string(),
                    secondary_text: Some("Paris".to_string()),
                }),
                types: vec!["establishment".to_string()],
                distance_meters: Some(1200),
            },
        ];

        let predictions = normalize_predictions(raws);

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].place_id, "place-2");
        assert_eq!(predictions[0].primary_text, "Eiffel Tower");
        assert_eq!(predictions[0].secondary_text.as_deref(), Some("Paris"));
        assert_eq!(predictions[0].distance_meters, Some(1200));
    }

    #[test]
    fn prediction_with_empty_place_id_is_dropped() {
        let raw = RawPrediction {
            place_id: Some("".to_string()),
            description: "empty".to_string(),
            structured_formatting: None,
            types: vec![],
            distance_meters: None,
        };

        assert!(normalize_prediction(raw).is_none());
    }

    #[test]
    fn populated_place_round_trips_every_scalar() {
        let place = normalize_place(populated_raw_place(), &["Listing by Test".to_string()]);

        let json = serde_json::to_value(&place).unwrap();
        let back: Place = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, place);

        assert_eq!(json["name"], "Eiffel Tower");
        assert_eq!(json["placeID"], "place-1");
        assert_eq!(json["coordinate"]["latitude"], 48.8584);
        assert_eq!(json["rating"], 4.7);
        assert_eq!(json["userRatingsTotal"], 310000);
        assert_eq!(json["utcOffsetMinutes"], 60);
        assert_eq!(json["businessStatus"], "OPERATIONAL");
        assert_eq!(json["takeout"], "TRUE");
        assert_eq!(json["delivery"], "FALSE");
        assert_eq!(json["dineIn"], "UNKNOWN");
        assert_eq!(json["curbsidePickup"], "TRUE");
        assert_eq!(json["viewport"]["valid"], true);
        assert_eq!(json["attributions"], "Listing by Test");
        assert_eq!(json["iconImageURL"], "https://example.com/icon.png");
    }

    #[test]
    fn absent_fields_stay_absent() {
        let place = normalize_place(RawPlace::default(), &[]);

        assert_eq!(place.rating, None);
        assert_eq!(place.user_ratings_total, None);
        assert_eq!(place.price_level, None);
        assert_eq!(place.coordinate, None);
        assert_eq!(place.viewport, None);
        assert_eq!(place.attributions, None);
        assert_eq!(place.business_status, BusinessStatus::Unknown);
        assert_eq!(place.takeout, TriState::Unknown);

        let json = serde_json::to_value(&place).unwrap();
        assert!(json.get("rating").is_none());
        assert!(json.get("coordinate").is_none());
        assert!(json.get("photos").is_none());
    }

    #[test]
    fn unknown_business_status_falls_back_to_unknown() {
        let raw = RawPlace {
            business_status: Some("CLOSED_FOR_RENOVATION".to_string()),
            ..RawPlace::default()
        };

        let place = normalize_place(raw, &[]);

        assert_eq!(place.business_status, BusinessStatus::Unknown);
    }

    #[test]
    fn viewport_with_one_corner_is_absent() {
        let raw = RawPlace {
            geometry: Some(RawGeometry {
                location: None,
                viewport: Some(RawViewport {
                    northeast: Some(RawLatLng { lat: 1.0, lng: 2.0 }),
                    southwest: None,
                }),
            }),
            ..RawPlace::default()
        };

        assert_eq!(normalize_place(raw, &[]).viewport, None);
    }

    #[test]
    fn point_sized_viewport_is_returned_but_invalid() {
        let corner = RawLatLng {
            lat: 48.8584,
            lng: 2.2945,
        };
        let raw = RawPlace {
            geometry: Some(RawGeometry {
                location: None,
                viewport: Some(RawViewport {
                    northeast: Some(corner),
                    southwest: Some(corner),
                }),
            }),
            ..RawPlace::default()
        };

        let viewport = normalize_place(raw, &[]).viewport.unwrap();

        assert!(!viewport.valid);
        assert_eq!(viewport.north_east.latitude, 48.8584);
    }

    #[test]
    fn photo_attribution_url_is_first_hyperlink() {
        let photo = normalize_photo(RawPhoto {
            html_attributions: vec![
                "<a href=\"https://maps.example.com/contrib/42\">Jane Doe</a>".to_string(),
            ],
            width: 100,
            height: 50,
            photo_reference: Some("ref".to_string()),
        });

        assert_eq!(photo.attribution_url, "https://maps.example.com/contrib/42");
        assert_eq!(photo.attribution_name, "Jane Doe");
    }

    #[test]
    fn photo_attribution_url_is_empty_string_when_no_link() {
        let photo = normalize_photo(RawPhoto {
            html_attributions: vec!["Jane Doe".to_string()],
            width: 100,
            height: 50,
            photo_reference: None,
        });

        assert_eq!(photo.attribution_url, "");
        assert_eq!(photo.attribution_name, "Jane Doe");
        assert_eq!(photo.reference, "");
    }
}
