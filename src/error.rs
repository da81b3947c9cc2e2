// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised while fetching or decoding a card image.
///
/// A single failed card never aborts a batch; the fetch loop logs the error
/// and moves on to the next item.
#[derive(Debug, Clone)]
pub enum Error {
    /// Network transport or HTTP status failure.
    Http(String),
    /// The response body could not be parsed (JSON record or image bytes).
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "HTTP Error: connection refused");
    }

    #[test]
    fn display_formats_decode_error() {
        let err = Error::Decode("not a JSON object".to_string());
        assert_eq!(format!("{}", err), "Decode Error: not a JSON object");
    }

    #[test]
    fn from_image_error_produces_decode_variant() {
        let image_error = image_rs::ImageError::Unsupported(
            image_rs::error::UnsupportedError::from_format_and_kind(
                image_rs::error::ImageFormatHint::Unknown,
                image_rs::error::UnsupportedErrorKind::GenericFeature("boom".to_string()),
            ),
        );
        let err: Error = image_error.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
