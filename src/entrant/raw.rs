//! Raw entrant input
//!
//! Field values exactly as typed at the terminal, before any validation.

use serde::{Deserialize, Serialize};

use crate::types::EntrantField;

/// Unvalidated entrant field strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEntrantFields {
    /// Date of birth, `MM/dd/yyyy`
    pub date_of_birth: Option<String>,
    /// Social security number
    pub ssn: Option<String>,
    /// Project number
    pub project_number: Option<String>,
    /// Company
    pub company: Option<String>,
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// Street address
    pub street_address: Option<String>,
    /// City
    pub city: Option<String>,
    /// State
    pub state: Option<String>,
    /// Zip code
    pub zip_code: Option<String>,
}

impl RawEntrantFields {
    /// Create an empty set of fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: EntrantField, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    /// Set or clear a field
    pub fn set(&mut self, field: EntrantField, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    /// The raw value of a field, untouched
    pub fn get(&self, field: EntrantField) -> Option<&str> {
        match field {
            EntrantField::DateOfBirth => self.date_of_birth.as_deref(),
            EntrantField::Ssn => self.ssn.as_deref(),
            EntrantField::ProjectNumber => self.project_number.as_deref(),
            EntrantField::Company => self.company.as_deref(),
            EntrantField::FirstName => self.first_name.as_deref(),
            EntrantField::LastName => self.last_name.as_deref(),
            EntrantField::StreetAddress => self.street_address.as_deref(),
            EntrantField::City => self.city.as_deref(),
            EntrantField::State => self.state.as_deref(),
            EntrantField::ZipCode => self.zip_code.as_deref(),
        }
    }

    /// The trimmed value of a field, or `None` when it is absent or blank
    pub fn present(&self, field: EntrantField) -> Option<&str> {
        self.get(field).map(str::trim).filter(|value| !value.is_empty())
    }

    /// Fields that carry a non-blank value
    pub fn present_fields(&self) -> Vec<EntrantField> {
        EntrantField::ALL.iter().copied().filter(|field| self.present(*field).is_some()).collect()
    }

    fn slot_mut(&mut self, field: EntrantField) -> &mut Option<String> {
        match field {
            EntrantField::DateOfBirth => &mut self.date_of_birth,
            EntrantField::Ssn => &mut self.ssn,
            EntrantField::ProjectNumber => &mut self.project_number,
            EntrantField::Company => &mut self.company,
            EntrantField::FirstName => &mut self.first_name,
            EntrantField::LastName => &mut self.last_name,
            EntrantField::StreetAddress => &mut self.street_address,
            EntrantField::City => &mut self.city,
            EntrantField::State => &mut self.state,
            EntrantField::ZipCode => &mut self.zip_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_not_present() {
        let raw = RawEntrantFields::new()
            .with(EntrantField::FirstName, "   ")
            .with(EntrantField::LastName, "\t\n")
            .with(EntrantField::City, "")
            .with(EntrantField::State, " CA ");

        assert_eq!(raw.get(EntrantField::FirstName), Some("   "));
        assert_eq!(raw.present(EntrantField::FirstName), None);
        assert_eq!(raw.present(EntrantField::LastName), None);
        assert_eq!(raw.present(EntrantField::City), None);
        assert_eq!(raw.present(EntrantField::State), Some("CA"));
        assert_eq!(raw.present(EntrantField::ZipCode), None);
        assert_eq!(raw.present_fields(), vec![EntrantField::State]);
    }

    #[test]
    fn test_set_and_clear() {
        let mut raw = RawEntrantFields::new();
        raw.set(EntrantField::Company, Some("Acme".to_string()));
        assert_eq!(raw.get(EntrantField::Company), Some("Acme"));
        raw.set(EntrantField::Company, None);
        assert_eq!(raw.get(EntrantField::Company), None);
    }

    #[test]
    fn test_deserialize_partial() {
        let raw: RawEntrantFields =
            serde_json::from_str(r#"{"first_name": "Ada", "zip_code": "90210"}"#).unwrap();
        assert_eq!(raw.present(EntrantField::FirstName), Some("Ada"));
        assert_eq!(raw.present(EntrantField::ZipCode), Some("90210"));
        assert!(raw.ssn.is_none());
    }
}
