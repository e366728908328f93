use thiserror::Error;

/// Errors that can occur in the vanilla farm portal.
#[derive(Error, Debug)]
pub enum FarmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Upload rejected: {0}")]
    Upload(String),

    #[error("Holding period of {years} years is outside 1..=16")]
    YearsOutOfRange { years: u32 },
}

impl From<toml::de::Error> for FarmError {
    fn from(e: toml::de::Error) -> Self {
        FarmError::Config(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for FarmError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        FarmError::Excel(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = FarmError::from(io_err);
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = FarmError::ValidationError("area must be positive".to_string());
        assert_eq!(err.to_string(), "Validation error: area must be positive");
    }

    #[test]
    fn test_not_found_display() {
        let err = FarmError::NotFound("farm 42".to_string());
        assert_eq!(err.to_string(), "Not found: farm 42");
    }

    #[test]
    fn test_years_out_of_range_display() {
        let err = FarmError::YearsOutOfRange { years: 17 };
        assert_eq!(
            err.to_string(),
            "Holding period of 17 years is outside 1..=16"
        );
    }

    #[test]
    fn test_json_error_from_conversion() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("not valid json{{{");
        let json_err = result.unwrap_err();
        let err: FarmError = json_err.into();
        assert!(matches!(err, FarmError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_toml_error_becomes_config_error() {
        let result: Result<toml::Value, _> = toml::from_str("store_path = ");
        let err: FarmError = result.unwrap_err().into();
        assert!(matches!(err, FarmError::Config(_)));
    }

    #[test]
    fn test_store_error_from_conversion() {
        let err: FarmError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, FarmError::Store(_)));
        assert!(err.to_string().starts_with("Store error"));
    }
}
