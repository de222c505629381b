/// Canonical mapping from the abstract field names callers use to the
/// provider's field-mask flags. Every operation that needs a field mask
/// resolves through this one table.
pub const PLACE_FIELDS: &[(&str, &str)] = &[
    ("name", "name"),
    ("placeID", "place_id"),
    ("plusCode", "plus_code"),
    ("coordinate", "geometry/location"),
    ("openingHours", "opening_hours"),
    ("phoneNumber", "formatted_phone_number"),
    ("types", "types"),
    ("priceLevel", "price_level"),
    ("website", "website"),
    ("viewport", "geometry/viewport"),
    ("formattedAddress", "formatted_address"),
    ("addressComponents", "address_components"),
    ("rating", "rating"),
    ("userRatingsTotal", "user_ratings_total"),
    ("utcOffsetMinutes", "utc_offset"),
    ("businessStatus", "business_status"),
    ("iconImageURL", "icon"),
    ("takeout", "takeout"),
    ("delivery", "delivery"),
    ("dineIn", "dine_in"),
    ("curbsidePickup", "curbside_pickup"),
    ("photos", "photos"),
    ("attributions", "html_attributions"),
];

/// Resolves requested field names to provider flags. Unrecognized names are
/// dropped without error; if nothing survives (empty input included), the
/// full known set is requested instead, favoring over-fetching over an
/// empty-mask request.
pub fn resolve_fields<'a, I>(requested: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut flags: Vec<&'static str> = Vec::new();
    for name in requested {
        if let Some(&(_, flag)) = PLACE_FIELDS.iter().find(|(known, _)| *known == name) {
            if !flags.contains(&flag) {
                flags.push(flag);
            }
        }
    }

    if flags.is_empty() {
        return PLACE_FIELDS.iter().map(|(_, flag)| *flag).collect();
    }

    flags
}
