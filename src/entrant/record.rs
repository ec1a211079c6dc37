//! Validated entrant record
//!
//! An `EntrantRecord` can only be produced by the validator, so holding one
//! means every field its subtype requires is present and well formed.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;

use super::parse::DATE_FORMAT;
use super::RawEntrantFields;
use crate::types::{EntrantField, EntrantSubtype};

/// Social security number split into its three groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ssn {
    /// First group
    pub area: u64,
    /// Middle group
    pub group: u64,
    /// Last group
    pub serial: u64,
}

impl fmt::Display for Ssn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}-{:02}-{:04}", self.area, self.group, self.serial)
    }
}

/// Zip code with optional four digit extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ZipCode {
    /// Five digit base
    pub base: u32,
    /// Four digit extension, if one was given
    pub extension: Option<u32>,
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.extension {
            Some(extension) => write!(f, "{:05}-{:04}", self.base, extension),
            None => write!(f, "{:05}", self.base),
        }
    }
}

/// Whole years between `date_of_birth` and `today`, counting a year only once
/// the birthday has been reached
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years
}

/// Immutable, validated information about one entrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrantRecord {
    pub(crate) subtype: EntrantSubtype,
    pub(crate) date_of_birth: Option<NaiveDate>,
    pub(crate) ssn: Option<Ssn>,
    pub(crate) project_number: Option<u16>,
    pub(crate) company: Option<String>,
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) street_address: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) zip_code: Option<ZipCode>,
    pub(crate) date_of_visit: NaiveDate,
}

impl EntrantRecord {
    /// The subtype this record was validated for
    pub fn subtype(&self) -> EntrantSubtype {
        self.subtype
    }

    /// Date of birth
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    /// Social security number
    pub fn ssn(&self) -> Option<Ssn> {
        self.ssn
    }

    /// Project number
    pub fn project_number(&self) -> Option<u16> {
        self.project_number
    }

    /// Company
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// First name
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Last name
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Street address
    pub fn street_address(&self) -> Option<&str> {
        self.street_address.as_deref()
    }

    /// City
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Two character state
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Zip code
    pub fn zip_code(&self) -> Option<ZipCode> {
        self.zip_code
    }

    /// Date the record was validated, i.e. the day of the visit
    pub fn date_of_visit(&self) -> NaiveDate {
        self.date_of_visit
    }

    /// "First Last", only when both names are known
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => None,
        }
    }

    /// Whether today is the entrant's birthday; `None` without a date of birth
    pub fn is_birthday(&self) -> Option<bool> {
        self.is_birthday_on(Local::now().date_naive())
    }

    /// Whether `date` falls on the entrant's birthday, comparing month and day
    pub fn is_birthday_on(&self, date: NaiveDate) -> Option<bool> {
        self.date_of_birth
            .map(|dob| dob.month() == date.month() && dob.day() == date.day())
    }

    /// Age in whole years on `date`; `None` without a date of birth
    pub fn age_on(&self, date: NaiveDate) -> Option<i32> {
        self.date_of_birth.map(|dob| age_on(dob, date))
    }

    /// Render the record back into raw field strings
    ///
    /// Validating the result for the same subtype yields an equal record.
    pub fn to_raw_fields(&self) -> RawEntrantFields {
        let mut raw = RawEntrantFields::new();
        raw.set(
            EntrantField::DateOfBirth,
            self.date_of_birth.map(|dob| dob.format(DATE_FORMAT).to_string()),
        );
        raw.set(EntrantField::Ssn, self.ssn.map(|ssn| ssn.to_string()));
        raw.set(EntrantField::ProjectNumber, self.project_number.map(|n| format!("{:04}", n)));
        raw.set(EntrantField::Company, self.company.clone());
        raw.set(EntrantField::FirstName, self.first_name.clone());
        raw.set(EntrantField::LastName, self.last_name.clone());
        raw.set(EntrantField::StreetAddress, self.street_address.clone());
        raw.set(EntrantField::City, self.city.clone());
        raw.set(EntrantField::State, self.state.clone());
        raw.set(EntrantField::ZipCode, self.zip_code.map(|zip| zip.to_string()));
        raw
    }
}
