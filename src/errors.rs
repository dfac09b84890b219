use thiserror::Error;

use crate::model::FieldType;

/// Errors raised while turning wire JSON into model values
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Expected a JSON integer, got: {0}")]
    ExpectedInteger(String),
    #[error("Not an integer value: {0}")]
    InvalidInteger(String),
    #[error("Item entry has no ',' separator: \"{0}\"")]
    MissingItemSeparator(String),
    #[error("Member '{member}' must be {expected}, got: {found}")]
    UnexpectedType {
        member: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("Config '{config_id}' holds {options_shape}, field type is {field_type}")]
    OptionsMismatch {
        config_id: String,
        options_shape: &'static str,
        field_type: FieldType,
    },
    #[error("Unknown member '{0}' has the name of a declared member")]
    DeclaredMemberAsUnknown(String),
    #[error("Options payload must be a JSON object, got: {0}")]
    NotAnObject(String),
    /// Message of the underlying serde error, unprefixed
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Errors of the command line tool
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode fields: {0}")]
    Decode(#[from] DecodeError),
    #[error("Failed to retrieve the user's directories")]
    NotFoundUserDir,
    #[error("Couldn't parse the config")]
    NotParseConfig,
    #[error("Field with ID == {0} not found")]
    FieldNotFound(u32),
    #[error("Field with ID == {0} has no item list")]
    NoItems(u32),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_integer() {
        assert_eq!(
            DecodeError::ExpectedInteger("\"1\"".to_string()).to_string(),
            "Expected a JSON integer, got: \"1\""
        );
    }

    #[test]
    fn test_missing_item_separator() {
        assert_eq!(
            DecodeError::MissingItemSeparator("badentry".to_string()).to_string(),
            "Item entry has no ',' separator: \"badentry\""
        );
    }

    #[test]
    fn test_unexpected_type() {
        let error = DecodeError::UnexpectedType {
            member: "isRequired",
            expected: "a boolean",
            found: "1".to_string(),
        };
        assert_eq!(error.to_string(), "Member 'isRequired' must be a boolean, got: 1");
    }

    #[test]
    fn test_serde_error() {
        // Пытаемся десериализовать невалидный json
        let serde_error = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let decode_error = DecodeError::from(serde_error);

        assert!(matches!(decode_error, DecodeError::Json(_)));
        assert!(
            decode_error.to_string().starts_with("expected value"),
            "Ожидали сообщение serde_json без префикса, получили {}",
            decode_error
        );
    }

    #[test]
    fn test_decode_error_passes_through_app_error() {
        let error = AppError::from(DecodeError::InvalidInteger("1.5".to_string()));
        assert!(matches!(error, AppError::Decode(DecodeError::InvalidInteger(_))));
        assert_eq!(error.to_string(), "Failed to decode fields: Not an integer value: 1.5");
    }

    #[test]
    fn test_options_mismatch() {
        let error = DecodeError::OptionsMismatch {
            config_id: "cfg-1".to_string(),
            options_shape: "CheckboxOptions",
            field_type: FieldType::String,
        };
        assert_eq!(error.to_string(), "Config 'cfg-1' holds CheckboxOptions, field type is STRING");
    }

    #[test]
    fn test_field_not_found() {
        assert_eq!(AppError::FieldNotFound(12).to_string(), "Field with ID == 12 not found");
    }

    #[test]
    fn test_not_found_user_dir() {
        assert_eq!(
            AppError::NotFoundUserDir.to_string(),
            "Failed to retrieve the user's directories"
        );
    }
}
