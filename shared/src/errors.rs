//! Shared error types for the site domain

use thiserror::Error;

use crate::onboarding::WizardStep;
use crate::types::OrderStatus;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Order not found: {id}")]
    OrderNotFound { id: String },

    #[error("Order {id} cannot be accepted while {status}")]
    OrderNotPending { id: String, status: OrderStatus },

    #[error("Malformed registration draft: {message}")]
    InvalidDraft { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Required-field failures raised by the site's forms.
///
/// The `Display` text of each variant is exactly what the toast shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields before proceeding.")]
    IncompleteStep {
        step: WizardStep,
        missing: Vec<&'static str>,
    },

    #[error("Please fill in all required fields for the menu item.")]
    IncompleteMenuItem { missing: Vec<&'static str> },

    #[error("Please fill out all fields.")]
    IncompleteTicket { missing: Vec<&'static str> },

    #[error("Registration can only be completed from the menu setup step.")]
    NotReadyToSubmit { step: WizardStep },
}

impl ValidationError {
    /// Names of the fields that were missing, empty for ordering errors
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            ValidationError::IncompleteStep { missing, .. }
            | ValidationError::IncompleteMenuItem { missing }
            | ValidationError::IncompleteTicket { missing } => missing,
            ValidationError::NotReadyToSubmit { .. } => &[],
        }
    }
}

/// Collect the names of empty required fields, in declaration order
pub(crate) fn missing_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_keeps_order_and_accepts_whitespace() {
        let missing = missing_fields(&[("name", ""), ("email", " "), ("phone", "")]);
        assert_eq!(missing, vec!["name", "phone"]);
    }

    #[test]
    fn test_validation_messages_match_toasts() {
        let err = ValidationError::IncompleteTicket { missing: vec!["subject"] };
        assert_eq!(err.to_string(), "Please fill out all fields.");
        assert_eq!(err.missing_fields(), &["subject"]);
    }
}
