// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Errors produced while loading settings or talking to the NASA services.
///
/// Variants carry plain strings so the error stays `Clone` and can travel
/// inside Iced messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Transport failure, displayed verbatim as reported by the HTTP client.
    #[error("{0}")]
    Http(String),

    /// The service answered with a non-success status code.
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The response body did not match the expected schema.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The service answered successfully but returned nothing usable.
    #[error("{0}")]
    Empty(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Status(status.as_u16()),
            None => Error::Http(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn http_error_is_shown_verbatim() {
        let err = Error::Http("error sending request for url (https://api.nasa.gov/)".into());
        assert_eq!(
            err.to_string(),
            "error sending request for url (https://api.nasa.gov/)"
        );
    }

    #[test]
    fn status_error_mentions_code() {
        assert_eq!(
            Error::Status(429).to_string(),
            "Request failed with status code 429"
        );
    }

    #[test]
    fn json_error_becomes_decode_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
