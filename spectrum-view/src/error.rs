use thiserror::Error;

/// Errors raised while building a properties bag or loading slot defaults.
///
/// Rendering never fails: every value that reaches a container has already
/// been validated by one of the constructors that return these errors.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),
    #[error("Invalid dimension value: {0:?}")]
    InvalidDimension(String),
    #[error("Invalid `{property}` value: {value:?}")]
    InvalidStyleValue {
        property: &'static str,
        value: String,
    },
    #[error("Invalid slot name: {0:?}")]
    InvalidSlotName(String),
    #[error("JSON parsing error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::ViewError;

    #[test]
    fn messages_quote_the_offending_value() {
        let err = ViewError::InvalidAttributeName("on click".to_string());
        assert_eq!(err.to_string(), "Invalid attribute name: \"on click\"");
        let err = ViewError::InvalidDimension("12px;".to_string());
        assert!(err.to_string().contains("12px;"));
    }

    #[test]
    fn json_errors_convert_into_config_variant() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ViewError = json_err.into();
        assert!(matches!(err, ViewError::Config(_)));
        assert!(err.to_string().starts_with("JSON parsing error"));
    }
}
