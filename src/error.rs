//! Error handling for catalog loading and query validation.
//!
//! Load failures are fatal and surface through these variants. Query-time
//! "no data" conditions are not errors and never appear here; they are
//! encoded in the returned result shapes instead.

use std::path::Path;
use thiserror::Error;

/// Result type alias for water monitor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog, history and query operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON could not be parsed
    #[error("JSON parsing error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Bulk station data could not be turned into a catalog
    #[error("Catalog load failed: {message}")]
    CatalogLoad { message: String },

    /// A record failed validation
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Two records share the same station id
    #[error("Duplicate station id '{id}' in catalog input")]
    DuplicateStation { id: String },

    /// Query parameters violate the input contract
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Station not found
    #[error("Station not found: id = {id}")]
    StationNotFound { id: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error naming the file that failed
    pub fn io_at(path: &Path, source: std::io::Error) -> Self {
        Self::io(format!("failed to read {}", path.display()), source)
    }

    /// Create a JSON parsing error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a catalog load error
    pub fn catalog_load(message: impl Into<String>) -> Self {
        Self::CatalogLoad {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a duplicate station error
    pub fn duplicate_station(id: impl Into<String>) -> Self {
        Self::DuplicateStation { id: id.into() }
    }

    /// Create an invalid query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a station not found error
    pub fn station_not_found(id: impl Into<String>) -> Self {
        Self::StationNotFound { id: id.into() }
    }

    /// True for errors caused by the caller's query parameters
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, Self::InvalidQuery { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON parsing failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::duplicate_station("MH-PUN-SW-001");
        assert_eq!(
            err.to_string(),
            "Duplicate station id 'MH-PUN-SW-001' in catalog input"
        );

        let err = Error::invalid_query("limit must be greater than 0");
        assert_eq!(err.to_string(), "Invalid query: limit must be greater than 0");
        assert!(err.is_invalid_query());
        assert!(!Error::station_not_found("x").is_invalid_query());
    }

    #[test]
    fn test_io_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io_at(Path::new("/tmp/stations.json"), source);
        assert_eq!(err.to_string(), "I/O error: failed to read /tmp/stations.json");
        assert!(std::error::Error::source(&err).is_some());
    }
}
