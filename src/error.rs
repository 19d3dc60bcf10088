use std::fmt;

/// Custom error type for control plane operations
#[derive(Debug)]
pub enum SecaError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// Region descriptor does not advertise the requested provider
    ProviderNotFound { provider: String, region: String },
    /// Resolver already holds a client for a different provider
    ResolverBound { bound: String, requested: String },
    /// Provider endpoint URL could not be used to build a client
    InvalidEndpoint(String),
    /// A scope field required by the operation was not set
    MissingRequiredField(&'static str),
    /// Token not found in any source
    TokenNotFound(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for SecaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecaError::Http(e) => write!(f, "HTTP request failed: {}", e),
            SecaError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            SecaError::Json(msg) => write!(f, "JSON error: {}", msg),
            SecaError::ProviderNotFound { provider, region } => {
                write!(
                    f,
                    "Provider '{}' not found in region '{}'",
                    provider, region
                )
            }
            SecaError::ResolverBound { bound, requested } => write!(
                f,
                "Client already resolved for provider '{}', cannot serve '{}'",
                bound, requested
            ),
            SecaError::InvalidEndpoint(msg) => write!(f, "Invalid provider endpoint: {}", msg),
            SecaError::MissingRequiredField(field) => {
                write!(f, "Missing required field: {}", field)
            }
            SecaError::TokenNotFound(msg) => write!(f, "{}", msg),
            SecaError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SecaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SecaError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SecaError {
    fn from(err: reqwest::Error) -> Self {
        SecaError::Http(err)
    }
}

impl From<serde_json::Error> for SecaError {
    fn from(err: serde_json::Error) -> Self {
        SecaError::Json(err.to_string())
    }
}

/// Result type alias for control plane operations
pub type Result<T> = std::result::Result<T, SecaError>;
