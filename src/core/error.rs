//! Error types for vanilla-options

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid or missing API key")]
    InvalidApiKey,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub type OptionsResult<T> = Result<T, OptionsError>;

impl OptionsError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = OptionsError::domain("volatility must be positive");
        assert!(format!("{}", err).contains("volatility"));

        let err = OptionsError::InvalidApiKey;
        assert!(format!("{}", err).contains("API key"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OptionsError>();
    }
}
