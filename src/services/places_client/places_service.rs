use std::sync::{Arc, Mutex, RwLock};

use tracing::warn;

use crate::types::filters::{CoordinateParam, PredictionFilters};
use crate::types::place::Place;
use crate::types::prediction::PlacePrediction;

use super::field_mask::resolve_fields;
use super::filter::{build_filter, parse_coordinate};
use super::normalize::{normalize_place, normalize_predictions};
use super::provider::{ProviderClient, ProviderConfig};
use super::session::{ClearOutcome, SessionTokenManager};
use super::types::places_error::PlacesError;

/// Orchestration facade over the places provider: resolves field masks,
/// builds native filters, manages the autocomplete session token and
/// normalizes responses. The only component routes talk to.
///
/// The provider client is absent until `initialize` runs; every other
/// operation fails with `NotInitialized` before that. Session state is
/// guarded by a plain mutex and never held across an await.
#[derive(Clone)]
pub struct PlacesService {
    host: String,
    client: Arc<RwLock<Option<ProviderClient>>>,
    session: Arc<Mutex<SessionTokenManager>>,
}

impl PlacesService {
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            client: Arc::new(RwLock::new(None)),
            session: Arc::new(Mutex::new(SessionTokenManager::new())),
        }
    }

    /// Idempotent setup; calling again replaces the configured key.
    pub fn initialize(&self, api_key: &str) {
        let config = ProviderConfig {
            api_key: api_key.to_string(),
            host: self.host.clone(),
        };
        *self.client.write().expect("provider lock poisoned") = Some(ProviderClient::new(config));
    }

    fn provider(&self) -> Result<ProviderClient, PlacesError> {
        self.client
            .read()
            .expect("provider lock poisoned")
            .clone()
            .ok_or(PlacesError::NotInitialized)
    }

    pub async fn fetch_predictions(
        &self,
        query: &str,
        filters: &PredictionFilters,
    ) -> Result<Vec<PlacePrediction>, PlacesError> {
        let provider = self.provider()?;

        let (native_filter, diagnostics) = build_filter(filters);
        if diagnostics.dropped_total() > 0 {
            warn!(
                "Dropped {} malformed filter sub-object(s) from prediction request",
                diagnostics.dropped_total()
            );
        }

        let token = self
            .session
            .lock()
            .expect("session lock poisoned")
            .attach_or_create();

        let raw = provider.predict(query, &native_filter, Some(&token)).await?;

        Ok(normalize_predictions(raw))
    }

    pub async fn fetch_place_by_id(
        &self,
        place_id: &str,
        fields: &[String],
    ) -> Result<Place, PlacesError> {
        let provider = self.provider()?;

        if place_id.trim().is_empty() {
            return Err(PlacesError::InvalidParams(
                "placeID must not be empty".to_string(),
            ));
        }

        let flags = resolve_fields(fields.iter().map(String::as_str));
        let token = self
            .session
            .lock()
            .expect("session lock poisoned")
            .active()
            .cloned();

        let (raw, attributions) = provider
            .fetch_details(place_id, &flags, token.as_ref())
            .await?;

        // The session is spent only once its paired detail fetch succeeds;
        // a failed fetch leaves the token held.
        self.session
            .lock()
            .expect("session lock poisoned")
            .consume();

        Ok(normalize_place(raw, &attributions))
    }

    pub async fn search_by_text(
        &self,
        query: &str,
        filters: &PredictionFilters,
    ) -> Result<Vec<Place>, PlacesError> {
        let provider = self.provider()?;

        let (native_filter, diagnostics) = build_filter(filters);
        if diagnostics.dropped_total() > 0 {
            warn!(
                "Dropped {} malformed filter sub-object(s) from text search",
                diagnostics.dropped_total()
            );
        }

        let (raw, attributions) = provider.search_text(query, &native_filter).await?;

        Ok(raw
            .into_iter()
            .map(|place| normalize_place(place, &attributions))
            .collect())
    }

    pub async fn search_nearby(
        &self,
        center: Option<&CoordinateParam>,
        radius_meters: Option<f64>,
        included_types: &[String],
    ) -> Result<Vec<Place>, PlacesError> {
        let provider = self.provider()?;

        let center = center.and_then(parse_coordinate).ok_or_else(|| {
            PlacesError::InvalidParams(
                "nearby search requires a numeric center coordinate".to_string(),
            )
        })?;
        let radius_meters = match radius_meters {
            Some(radius) if radius.is_finite() && radius > 0.0 => radius,
            _ => {
                return Err(PlacesError::InvalidParams(
                    "nearby search requires a positive numeric radiusMeters".to_string(),
                ))
            }
        };

        let (raw, attributions) = provider
            .search_nearby(center, radius_meters, included_types)
            .await?;

        Ok(raw
            .into_iter()
            .map(|place| normalize_place(place, &attributions))
            .collect())
    }

    pub fn start_new_session(&self) -> Result<(), PlacesError> {
        self.provider()?;
        self.session
            .lock()
            .expect("session lock poisoned")
            .start_new();
        Ok(())
    }

    pub fn clear_session(&self) -> Result<ClearOutcome, PlacesError> {
        self.provider()?;
        Ok(self.session.lock().expect("session lock poisoned").clear())
    }

    #[cfg(test)]
    pub fn active_session_token(&self) -> Option<String> {
        self.session
            .lock()
            .expect("session lock poisoned")
            .active()
            .map(|token| token.as_str().to_string())
    }
}
