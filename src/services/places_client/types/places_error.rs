/// Error taxonomy for every places operation.
///
/// `Provider` carries the provider's own code and message untouched so the
/// caller can render provider-specific diagnostics. `NoResults` marks a call
/// that succeeded but produced an empty payload, which is not the same thing
/// as a zero-length success list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacesError {
    NotInitialized,
    InvalidParams(String),
    Provider { code: String, message: String },
    NoResults,
}

impl std::fmt::Display for PlacesError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PlacesError::NotInitialized => write!(
                f,
                "Places client not initialized. Call initialize before any other operation"
            ),
            PlacesError::InvalidParams(msg) => write!(f, "Invalid parameters: {}", msg),
            PlacesError::Provider { code, message } => {
                write!(f, "Provider error {}: {}", code, message)
            }
            PlacesError::NoResults => write!(f, "No results"),
        }
    }
}
