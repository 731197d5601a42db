use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the pricing service.
///
/// These never cross the store boundary: `PriceFetcher::fetch_price` folds
/// them into a failure `PriceResult`.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Request could not be sent or the response could not be read
    #[error("HTTP request error: {0}")]
    Network(#[from] reqwest::Error),

    /// Pricing service answered with a non-2xx status
    #[error("HTTP error! Status: {}", .status.as_u16())]
    BadStatus { status: StatusCode },

    /// Response body is not JSON or does not have the expected shape
    #[error("Failed to parse pricing response: {0}")]
    Parse(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PricingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl PricingError {
    /// Short machine-readable name, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network_failure",
            Self::BadStatus { .. } => "bad_status",
            Self::Parse(_) => "parse_failure",
            Self::Config(_) => "config_error",
        }
    }
}
