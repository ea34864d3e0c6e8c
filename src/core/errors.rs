use thiserror::Error;

/// Error type for gateway and request operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A request object could not be constructed from the supplied
    /// parameters. Indicates a programming error in the calling gateway.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A parameter required at send time was absent or null.
    #[error("The {0} parameter is required")]
    MissingParameter(String),

    /// A parameter was present but malformed.
    #[error("Invalid parameter {0}: {1}")]
    InvalidParameter(String, String),

    /// No gateway registered under the requested name.
    #[error("Unknown gateway: {0}")]
    UnknownGateway(String),

    /// Currency code not present in the ISO 4217 table.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Outbound HTTP failure.
    #[error("HTTP transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_parameter() {
        let err = GatewayError::MissingParameter("amount".to_string());
        assert_eq!(format!("{}", err), "The amount parameter is required");
    }

    #[test]
    fn test_display_invalid_parameter() {
        let err = GatewayError::InvalidParameter("amount".to_string(), "not a number".to_string());
        assert_eq!(format!("{}", err), "Invalid parameter amount: not a number");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GatewayError = json_err.into();
        match err {
            GatewayError::InvalidResponse(_) => {}
            other => panic!("Expected InvalidResponse, got {:?}", other),
        }
    }
}
