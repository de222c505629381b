pub mod debounce;
pub mod field_mask;
pub mod filter;
pub mod normalize;
pub mod places_service;
pub mod provider;
pub mod session;
pub mod types;
