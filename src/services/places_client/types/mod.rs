pub mod places_error;
pub mod provider_response;
