//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Unique identifier, assigned by the client
    pub isbn: String,
    pub title: String,
}

impl Book {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
        }
    }
}

/// Create book request
///
/// Missing fields deserialize as empty strings so that they are reported
/// by validation rather than by the JSON decoder.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "must not be blank"))]
    pub isbn: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "must not be blank"))]
    pub title: String,
}

impl From<CreateBook> for Book {
    fn from(data: CreateBook) -> Self {
        Book::new(data.isbn, data.title)
    }
}

/// Book list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Only return books whose title contains this text
    pub text: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CreateBook {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_payload() {
        let data = parse(r#"{"isbn": "111", "title": "Dune"}"#);
        assert!(data.validate().is_ok());
        assert_eq!(Book::from(data), Book::new("111", "Dune"));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let errors = parse(r#"{"isbn": "  ", "title": ""}"#).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("isbn"));
        assert!(fields.contains_key("title"));
    }

    #[test]
    fn test_missing_field_rejected() {
        let errors = parse(r#"{"isbn": "111"}"#).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(!fields.contains_key("isbn"));
    }

    #[test]
    fn test_book_json_shape() {
        let value = serde_json::to_value(Book::new("111", "Dune")).unwrap();
        assert_eq!(value, serde_json::json!({"isbn": "111", "title": "Dune"}));
    }
}
