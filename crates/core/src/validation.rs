//! Boundary validation.
//!
//! Input DTOs derive [`validator::Validate`]. [`validate_input`] runs those
//! rules and folds any failure into [`CoreError::Validation`] with a message
//! naming each offending field, e.g. `Invalid input: email (email); slug (length)`.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived validation rules for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render validation errors as `field (code, ...)` entries sorted by field.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
            format!("{field} ({})", codes.join(", "))
        })
        .collect();
    fields.sort();

    format!("Invalid input: {}", fields.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Signup {
        #[validate(length(min = 1))]
        name: String,
        #[validate(email)]
        email: String,
        #[validate(url)]
        website: Option<String>,
    }

    fn signup(name: &str, email: &str, website: Option<&str>) -> Signup {
        Signup {
            name: name.to_string(),
            email: email.to_string(),
            website: website.map(str::to_string),
        }
    }

    #[test]
    fn valid_input_passes() {
        let input = signup("Ada", "ada@example.com", Some("https://example.com"));
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn absent_optional_field_is_not_checked() {
        let input = signup("Ada", "ada@example.com", None);
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn failures_name_every_field_in_order() {
        let input = signup("", "not-an-email", Some("nope"));
        let err = validate_input(&input).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg
            == "Invalid input: email (email); name (length); website (url)");
    }
}
