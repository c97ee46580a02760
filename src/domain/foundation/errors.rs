//! Error types for the domain layer.

use thiserror::Error;

/// Rejections raised while parsing or constructing domain values.
///
/// All of these are boundary errors: once a value exists it is valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("unknown role '{0}', expected 'applicant' or 'recruiter'")]
    UnknownRole(String),

    #[error("tier level '{0}' may only contain lowercase letters, digits and '_'")]
    MalformedTierLevel(String),

    #[error("tier '{0}' is not of the form <role>_<level>")]
    MissingTierSeparator(String),
}

impl ValidationError {
    pub fn empty_field(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_names_the_field() {
        assert_eq!(
            ValidationError::empty_field("user_id").to_string(),
            "user_id must not be empty"
        );
    }

    #[test]
    fn unknown_role_lists_accepted_roles() {
        let message = ValidationError::UnknownRole("admin".to_string()).to_string();
        assert!(message.contains("'admin'"));
        assert!(message.contains("applicant"));
    }

    #[test]
    fn missing_separator_quotes_identifier() {
        assert_eq!(
            ValidationError::MissingTierSeparator("premium".to_string()).to_string(),
            "tier 'premium' is not of the form <role>_<level>"
        );
    }
}
