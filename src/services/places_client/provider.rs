use urlencoding::encode;

use crate::types::coordinate::Coordinate;

use super::filter::NativeFilter;
use super::session::SessionToken;
use super::types::places_error::PlacesError;
use super::types::provider_response::{
    RawPlace, RawPlaceDetailsResponse, RawPrediction, RawPredictionsResponse, RawSearchResponse,
};

#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub host: String,
}

/// HTTP client for the places web service. Everything above this layer
/// works with normalized types; everything below it is the provider's
/// wire format.
#[derive(Clone)]
pub struct ProviderClient {
    config: ProviderConfig,
    client: reqwest::Client,
}

fn transport_error(context: &str, err: reqwest::Error) -> PlacesError {
    PlacesError::Provider {
        code: "NETWORK_ERROR".to_string(),
        message: format!("{}: {}", context, err),
    }
}

/// Maps the provider's status envelope onto the error taxonomy. Any status
/// other than OK or ZERO_RESULTS passes through with its message untouched.
fn check_status(status: &str, error_message: Option<String>) -> Result<(), PlacesError> {
    match status {
        "OK" => Ok(()),
        "ZERO_RESULTS" => Err(PlacesError::NoResults),
        other => Err(PlacesError::Provider {
            code: other.to_string(),
            message: error_message.unwrap_or_default(),
        }),
    }
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, PlacesError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error("Failed to send request", e))?;

        resp.json::<T>()
            .await
            .map_err(|e| transport_error("Failed to read response body", e))
    }

    pub async fn predict(
        &self,
        input: &str,
        filter: &NativeFilter,
        session_token: Option<&SessionToken>,
    ) -> Result<Vec<RawPrediction>, PlacesError> {
        let mut url = format!(
            "{}/maps/api/place/autocomplete/json?input={}&key={}",
            self.config.host,
            encode(input),
            self.config.api_key
        );

        if !filter.types.is_empty() {
            url.push_str(&format!("&types={}", encode(&filter.types.join("|"))));
        }
        if let Some(components) = &filter.components {
            url.push_str(&format!("&components={}", encode(components)));
        }
        if let Some(bias) = &filter.location_bias {
            url.push_str(&format!("&locationbias={}", encode(bias)));
        }
        if let Some(restriction) = &filter.location_restriction {
            url.push_str(&format!("&locationrestriction={}", encode(restriction)));
        }
        if let Some(origin) = &filter.origin {
            url.push_str(&format!("&origin={}", encode(origin)));
        }
        if let Some(token) = session_token {
            url.push_str(&format!("&sessiontoken={}", encode(token.as_str())));
        }

        let body = self.get_json::<RawPredictionsResponse>(&url).await?;
        check_status(&body.status, body.error_message)?;

        Ok(body.predictions)
    }

    /// Returns the raw place plus the response-level attribution blobs.
    pub async fn fetch_details(
        &self,
        place_id: &str,
        field_flags: &[&str],
        session_token: Option<&SessionToken>,
    ) -> Result<(RawPlace, Vec<String>), PlacesError> {
        let mut url = format!(
            "{}/maps/api/place/details/json?place_id={}&fields={}&key={}",
            self.config.host,
            encode(place_id),
            encode(&field_flags.join(",")),
            self.config.api_key
        );

        if let Some(token) = session_token {
            url.push_str(&format!("&sessiontoken={}", encode(token.as_str())));
        }

        let body = self.get_json::<RawPlaceDetailsResponse>(&url).await?;
        check_status(&body.status, body.error_message)?;

        match body.result {
            Some(place) => Ok((place, body.html_attributions)),
            None => Err(PlacesError::NoResults),
        }
    }

    pub async fn search_text(
        &self,
        query: &str,
        filter: &NativeFilter,
    ) -> Result<(Vec<RawPlace>, Vec<String>), PlacesError> {
        let mut url = format!(
            "{}/maps/api/place/textsearch/json?query={}&key={}",
            self.config.host,
            encode(query),
            self.config.api_key
        );

        if !filter.types.is_empty() {
            url.push_str(&format!("&type={}", encode(&filter.types.join("|"))));
        }
        if let Some(components) = &filter.components {
            url.push_str(&format!("&region={}", encode(components)));
        }

        let body = self.get_json::<RawSearchResponse>(&url).await?;
        check_status(&body.status, body.error_message)?;

        Ok((body.results, body.html_attributions))
    }

    pub async fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: f64,
        included_types: &[String],
    ) -> Result<(Vec<RawPlace>, Vec<String>), PlacesError> {
        let mut url = format!(
            "{}/maps/api/place/nearbysearch/json?location={},{}&radius={}&key={}",
            self.config.host, center.latitude, center.longitude, radius_meters, self.config.api_key
        );

        if !included_types.is_empty() {
            url.push_str(&format!("&type={}", encode(&included_types.join("|"))));
        }

        let body = self.get_json::<RawSearchResponse>(&url).await?;
        check_status(&body.status, body.error_message)?;

        Ok((body.results, body.html_attributions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ok_status_passes_code_and_message_through() {
        let err = check_status(
            "REQUEST_DENIED",
            Some("The provided API key is invalid.".to_string()),
        )
        .unwrap_err();

        assert_eq!(
            err,
            PlacesError::Provider {
                code: "REQUEST_DENIED".to_string(),
                message: "The provided API key is invalid.".to_string(),
            }
        );
    }

    #[test]
    fn zero_results_maps_to_no_results() {
        assert_eq!(
            check_status("ZERO_RESULTS", None).unwrap_err(),
            PlacesError::NoResults
        );
    }

    #[test]
    fn ok_status_is_ok() {
        assert!(check_status("OK", None).is_ok());
    }
}
