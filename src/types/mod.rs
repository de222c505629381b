pub mod app_state;
pub mod coordinate;
pub mod filters;
pub mod place;
pub mod prediction;
