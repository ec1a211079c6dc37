//! Entrant validation errors
//!
//! Every variant is a normal, recoverable outcome of checking user input.

use std::collections::BTreeSet;
use thiserror::Error;

use crate::types::EntrantField;

fn field_list(fields: &BTreeSet<EntrantField>) -> String {
    fields.iter().map(EntrantField::display_name).collect::<Vec<_>>().join(", ")
}

/// Reasons an entrant could not be validated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required fields were absent or blank
    #[error("Missing required information: {}", field_list(.0))]
    MissingInformation(BTreeSet<EntrantField>),

    /// Free text fields were longer than allowed
    #[error("Too many characters in: {}", field_list(.0))]
    ExceedsMaxLength(BTreeSet<EntrantField>),

    /// Fields could not be parsed
    #[error("Invalid format: {}", field_list(.0))]
    InvalidFormat(BTreeSet<EntrantField>),

    /// The entrant is outside the subtype's age window
    #[error("Wrong age: {0}")]
    WrongAge(String),

    /// The project number is not on the allow-list
    #[error("Project number {0} is not recognized")]
    InvalidProjectNumber(u16),

    /// The company is not on the allow-list
    #[error("Company \"{0}\" is not recognized")]
    InvalidCompany(String),
}

impl ValidationError {
    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            ValidationError::MissingInformation(_) => "Missing Information",
            ValidationError::ExceedsMaxLength(_) => "Exceeds Max Length",
            ValidationError::InvalidFormat(_) => "Invalid Format",
            ValidationError::WrongAge(_) => "Wrong Age",
            ValidationError::InvalidProjectNumber(_) => "Invalid Project Number",
            ValidationError::InvalidCompany(_) => "Invalid Company",
        }
    }

    /// The offending fields, for the field-batched variants
    pub fn fields(&self) -> Option<&BTreeSet<EntrantField>> {
        match self {
            ValidationError::MissingInformation(fields)
            | ValidationError::ExceedsMaxLength(fields)
            | ValidationError::InvalidFormat(fields) => Some(fields),
            ValidationError::WrongAge(_)
            | ValidationError::InvalidProjectNumber(_)
            | ValidationError::InvalidCompany(_) => None,
        }
    }

    /// Lines for a user-facing alert: one field display name per line, or the
    /// error description when no field set applies
    pub fn alert_lines(&self) -> Vec<String> {
        match self.fields() {
            Some(fields) => fields.iter().map(|field| field.display_name().to_string()).collect(),
            None => vec![self.to_string()],
        }
    }
}
