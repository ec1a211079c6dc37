//! Entrant validation pipeline
//!
//! Raw fields are checked in four layers, each of which short-circuits the
//! next: presence, length, format, and finally domain rules (age windows and
//! allow-lists). Within the first three layers every offending field is
//! collected before failing.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::parse;
use super::record::age_on;
use super::{EntrantRecord, RawEntrantFields, ValidationError};
use crate::permissions::required_fields;
use crate::types::{Clock, EntrantField, EntrantSubtype, SystemClock};

/// Validation limits and allow-lists
pub mod limits {
    /// Maximum characters in a free text field
    pub const MAX_TEXT_LENGTH: usize = 100;

    /// Child guests must be younger than this
    pub const CHILD_AGE_CUTOFF: i32 = 5;

    /// Senior guests must be at least this old
    pub const SENIOR_AGE_CUTOFF: i32 = 65;

    /// Recognized contract project numbers
    pub const VALID_PROJECT_NUMBERS: [u16; 5] = [1001, 1002, 1003, 2001, 2002];

    /// Recognized vendor companies
    pub const VALID_COMPANIES: [&str; 4] = ["Acme", "Orkin", "Fedex", "NW Electrical"];
}

/// Switches that relax or tighten validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Report format failures for every present field, not only required ones
    pub strict_format: bool,
    /// Reject project numbers and companies that are not on the allow-lists
    pub enforce_allow_lists: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            strict_format: false,
            enforce_allow_lists: true,
        }
    }
}

/// Turns raw entrant fields into an [`EntrantRecord`]
#[derive(Debug, Clone)]
pub struct EntrantValidator {
    options: ValidatorOptions,
    clock: Arc<dyn Clock>,
}

impl Default for EntrantValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EntrantValidator {
    /// Create a validator using the system clock and default options
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a validator reading "today" from `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            options: ValidatorOptions::default(),
            clock,
        }
    }

    /// Replace the validator options
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options
    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Validate `raw` for `subtype`
    #[instrument(skip(self, raw), fields(subtype = %subtype))]
    pub fn validate(
        &self,
        subtype: EntrantSubtype,
        raw: &RawEntrantFields,
    ) -> Result<EntrantRecord, ValidationError> {
        let required = required_fields(subtype);
        let result = self.run_checks(subtype, &required, raw);

        match &result {
            Ok(_) => debug!("Entrant validated"),
            Err(error) => warn!(category = error.category(), "Entrant rejected: {}", error),
        }
        result
    }

    fn run_checks(
        &self,
        subtype: EntrantSubtype,
        required: &BTreeSet<EntrantField>,
        raw: &RawEntrantFields,
    ) -> Result<EntrantRecord, ValidationError> {
        self.check_missing(required, raw)?;
        self.check_lengths(raw)?;
        let record = self.parse_fields(subtype, required, raw)?;
        self.check_domain(&record, required)?;
        Ok(record)
    }

    fn check_missing(
        &self,
        required: &BTreeSet<EntrantField>,
        raw: &RawEntrantFields,
    ) -> Result<(), ValidationError> {
        let missing: BTreeSet<EntrantField> =
            required.iter().copied().filter(|field| raw.present(*field).is_none()).collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingInformation(missing))
        }
    }

    fn check_lengths(&self, raw: &RawEntrantFields) -> Result<(), ValidationError> {
        let too_long: BTreeSet<EntrantField> = EntrantField::ALL
            .iter()
            .copied()
            .filter(|field| field.is_length_limited())
            .filter(|field| {
                raw.present(*field)
                    .is_some_and(|value| value.chars().count() > limits::MAX_TEXT_LENGTH)
            })
            .collect();

        if too_long.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::ExceedsMaxLength(too_long))
        }
    }

    fn parse_fields(
        &self,
        subtype: EntrantSubtype,
        required: &BTreeSet<EntrantField>,
        raw: &RawEntrantFields,
    ) -> Result<EntrantRecord, ValidationError> {
        let mut invalid = BTreeSet::new();
        let field = |field: EntrantField| FieldParser {
            field,
            value: raw.present(field),
            report: self.options.strict_format || required.contains(&field),
        };

        let date_of_birth = field(EntrantField::DateOfBirth).parse(parse::parse_date, &mut invalid);
        let ssn = field(EntrantField::Ssn).parse(parse::parse_ssn, &mut invalid);
        let project_number =
            field(EntrantField::ProjectNumber).parse(parse::parse_project_number, &mut invalid);
        let state = field(EntrantField::State).parse(parse::parse_state, &mut invalid);
        let zip_code = field(EntrantField::ZipCode).parse(parse::parse_zip_code, &mut invalid);

        if !invalid.is_empty() {
            return Err(ValidationError::InvalidFormat(invalid));
        }

        let text = |field: EntrantField| raw.present(field).map(str::to_string);

        Ok(EntrantRecord {
            subtype,
            date_of_birth,
            ssn,
            project_number,
            company: text(EntrantField::Company),
            first_name: text(EntrantField::FirstName),
            last_name: text(EntrantField::LastName),
            street_address: text(EntrantField::StreetAddress),
            city: text(EntrantField::City),
            state,
            zip_code,
            date_of_visit: self.clock.today(),
        })
    }

    fn check_domain(
        &self,
        record: &EntrantRecord,
        required: &BTreeSet<EntrantField>,
    ) -> Result<(), ValidationError> {
        if required.contains(&EntrantField::DateOfBirth) {
            if let Some(dob) = record.date_of_birth {
                check_age(record.subtype, dob, self.clock.today())?;
            }
        }

        if !self.options.enforce_allow_lists {
            return Ok(());
        }

        if let Some(project_number) = record.project_number {
            if required.contains(&EntrantField::ProjectNumber)
                && !limits::VALID_PROJECT_NUMBERS.contains(&project_number)
            {
                return Err(ValidationError::InvalidProjectNumber(project_number));
            }
        }

        if let Some(company) = record.company.as_deref() {
            if required.contains(&EntrantField::Company)
                && !limits::VALID_COMPANIES.contains(&company)
            {
                return Err(ValidationError::InvalidCompany(company.to_string()));
            }
        }

        Ok(())
    }
}

struct FieldParser<'a> {
    field: EntrantField,
    value: Option<&'a str>,
    report: bool,
}

impl FieldParser<'_> {
    fn parse<T>(
        self,
        parser: impl Fn(&str) -> Option<T>,
        invalid: &mut BTreeSet<EntrantField>,
    ) -> Option<T> {
        let value = self.value?;
        let parsed = parser(value);
        if parsed.is_none() {
            if self.report {
                invalid.insert(self.field);
            } else {
                debug!(field = %self.field, "Dropping unparseable optional field");
            }
        }
        parsed
    }
}

fn check_age(
    subtype: EntrantSubtype,
    date_of_birth: NaiveDate,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if date_of_birth > today {
        return Err(ValidationError::WrongAge(format!(
            "Date of birth {} is in the future",
            date_of_birth.format(parse::DATE_FORMAT)
        )));
    }

    let age = age_on(date_of_birth, today);
    match subtype {
        EntrantSubtype::ChildGuest if age >= limits::CHILD_AGE_CUTOFF => {
            Err(ValidationError::WrongAge(format!(
                "Entrant must be younger than {}. age: {}",
                limits::CHILD_AGE_CUTOFF,
                age
            )))
        }
        EntrantSubtype::SeniorGuest if age < limits::SENIOR_AGE_CUTOFF => {
            Err(ValidationError::WrongAge(format!(
                "Entrant must be {} or older. age: {}",
                limits::SENIOR_AGE_CUTOFF,
                age
            )))
        }
        _ => Ok(()),
    }
}

/// Validate `raw` for `subtype` with default options and the system clock
pub fn create_entrant(
    subtype: EntrantSubtype,
    raw: &RawEntrantFields,
) -> Result<EntrantRecord, ValidationError> {
    EntrantValidator::new().validate(subtype, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ManualClock;

    fn validator() -> EntrantValidator {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        EntrantValidator::with_clock(Arc::new(ManualClock::on_date(today)))
    }

    fn employee_fields() -> RawEntrantFields {
        RawEntrantFields::new()
            .with(EntrantField::FirstName, "Grace")
            .with(EntrantField::LastName, "Hopper")
            .with(EntrantField::StreetAddress, "1 Ride Way")
            .with(EntrantField::City, "Orlando")
            .with(EntrantField::State, "FL")
            .with(EntrantField::ZipCode, "32801")
    }

    #[test]
    fn test_classic_guest_needs_nothing() {
        let record = validator().validate(EntrantSubtype::ClassicGuest, &RawEntrantFields::new());
        let record = record.unwrap();
        assert_eq!(record.subtype(), EntrantSubtype::ClassicGuest);
        assert_eq!(record.full_name(), None);
        assert_eq!(record.date_of_visit(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn test_missing_collects_every_required_field() {
        let raw = RawEntrantFields::new()
            .with(EntrantField::FirstName, "Grace")
            .with(EntrantField::City, "   ");
        let error = validator().validate(EntrantSubtype::HourlyEmployeeMaintenance, &raw);

        let expected: BTreeSet<_> = [
            EntrantField::LastName,
            EntrantField::StreetAddress,
            EntrantField::City,
            EntrantField::State,
            EntrantField::ZipCode,
        ]
        .into();
        assert_eq!(error, Err(ValidationError::MissingInformation(expected)));
    }

    #[test]
    fn test_missing_wins_over_length_and_format() {
        let raw = employee_fields()
            .with(EntrantField::FirstName, "x".repeat(101))
            .with(EntrantField::ZipCode, "123")
            .with(EntrantField::State, "");
        let error = validator().validate(EntrantSubtype::Manager, &raw).unwrap_err();
        assert_eq!(error, ValidationError::MissingInformation([EntrantField::State].into()));
    }

    #[test]
    fn test_length_checked_on_optional_fields_too() {
        let raw = RawEntrantFields::new()
            .with(EntrantField::Company, "c".repeat(101))
            .with(EntrantField::City, "c".repeat(100));
        let error = validator().validate(EntrantSubtype::ClassicGuest, &raw).unwrap_err();
        assert_eq!(error, ValidationError::ExceedsMaxLength([EntrantField::Company].into()));
    }

    #[test]
    fn test_length_wins_over_format() {
        let raw = employee_fields()
            .with(EntrantField::LastName, "h".repeat(150))
            .with(EntrantField::ZipCode, "abc");
        let error = validator().validate(EntrantSubtype::Manager, &raw).unwrap_err();
        assert!(matches!(error, ValidationError::ExceedsMaxLength(_)));
    }

    #[test]
    fn test_format_errors_collected_for_required_fields() {
        let raw = employee_fields()
            .with(EntrantField::State, "Florida")
            .with(EntrantField::ZipCode, "9021")
            .with(EntrantField::ProjectNumber, "12");
        let error = validator().validate(EntrantSubtype::ContractEmployee, &raw).unwrap_err();
        assert_eq!(
            error,
            ValidationError::InvalidFormat(
                [EntrantField::ProjectNumber, EntrantField::State, EntrantField::ZipCode].into()
            )
        );
    }

    #[test]
    fn test_optional_bad_format_dropped_unless_strict() {
        let raw = RawEntrantFields::new()
            .with(EntrantField::Ssn, "12-34")
            .with(EntrantField::DateOfBirth, "June 1st");
        let record = validator().validate(EntrantSubtype::ClassicGuest, &raw).unwrap();
        assert_eq!(record.ssn(), None);
        assert_eq!(record.date_of_birth(), None);

        let strict = validator().with_options(ValidatorOptions {
            strict_format: true,
            ..Default::default()
        });
        let error = strict.validate(EntrantSubtype::ClassicGuest, &raw).unwrap_err();
        assert_eq!(
            error,
            ValidationError::InvalidFormat([EntrantField::DateOfBirth, EntrantField::Ssn].into())
        );
    }

    #[test]
    fn test_child_age_boundary() {
        let v = validator();
        let almost_five = RawEntrantFields::new().with(EntrantField::DateOfBirth, "06/16/2019");
        assert!(v.validate(EntrantSubtype::ChildGuest, &almost_five).is_ok());

        let five = RawEntrantFields::new().with(EntrantField::DateOfBirth, "06/15/2019");
        let error = v.validate(EntrantSubtype::ChildGuest, &five).unwrap_err();
        assert!(matches!(error, ValidationError::WrongAge(_)));
    }

    #[test]
    fn test_senior_age_boundary() {
        let v = validator();
        let raw = |dob: &str| {
            RawEntrantFields::new()
                .with(EntrantField::FirstName, "Old")
                .with(EntrantField::LastName, "Timer")
                .with(EntrantField::DateOfBirth, dob)
        };
        assert!(v.validate(EntrantSubtype::SeniorGuest, &raw("06/15/1959")).is_ok());
        assert!(matches!(
            v.validate(EntrantSubtype::SeniorGuest, &raw("06/16/1959")),
            Err(ValidationError::WrongAge(_))
        ));
    }

    #[test]
    fn test_future_date_of_birth_rejected() {
        let raw = RawEntrantFields::new().with(EntrantField::DateOfBirth, "01/01/2030");
        let error = validator().validate(EntrantSubtype::ChildGuest, &raw).unwrap_err();
        assert!(matches!(error, ValidationError::WrongAge(_)));
    }

    #[test]
    fn test_project_number_allow_list() {
        let raw = employee_fields().with(EntrantField::ProjectNumber, "3003");
        let error = validator().validate(EntrantSubtype::ContractEmployee, &raw).unwrap_err();
        assert_eq!(error, ValidationError::InvalidProjectNumber(3003));

        let lenient = validator().with_options(ValidatorOptions {
            enforce_allow_lists: false,
            ..Default::default()
        });
        let record = lenient.validate(EntrantSubtype::ContractEmployee, &raw).unwrap();
        assert_eq!(record.project_number(), Some(3003));
    }

    #[test]
    fn test_company_allow_list() {
        let raw = |company: &str| {
            RawEntrantFields::new()
                .with(EntrantField::FirstName, "Vera")
                .with(EntrantField::LastName, "Vendor")
                .with(EntrantField::DateOfBirth, "02/02/1980")
                .with(EntrantField::Company, company)
        };
        let v = validator();
        assert!(v.validate(EntrantSubtype::Vendor, &raw(" NW Electrical ")).is_ok());
        assert_eq!(
            v.validate(EntrantSubtype::Vendor, &raw("Acme2")),
            Err(ValidationError::InvalidCompany("Acme2".to_string()))
        );
    }

    #[test]
    fn test_age_checked_before_allow_lists() {
        let raw = RawEntrantFields::new().with(EntrantField::DateOfBirth, "01/01/2000");
        assert!(matches!(
            validator().validate(EntrantSubtype::ChildGuest, &raw),
            Err(ValidationError::WrongAge(_))
        ));
    }

    #[test]
    fn test_values_are_trimmed() {
        let raw = employee_fields()
            .with(EntrantField::FirstName, "  Grace ")
            .with(EntrantField::ZipCode, " 32801-1234 ");
        let record = validator()
            .validate(EntrantSubtype::HourlyEmployeeFoodServices, &raw)
            .unwrap();
        assert_eq!(record.first_name(), Some("Grace"));
        assert_eq!(record.zip_code().map(|zip| zip.extension), Some(Some(1234)));
    }

    #[test]
    fn test_revalidating_serialized_record_is_idempotent() {
        let v = validator();
        let raw = employee_fields()
            .with(EntrantField::ProjectNumber, "1002")
            .with(EntrantField::Ssn, "123-45-6789")
            .with(EntrantField::DateOfBirth, "7/4/1990");
        let record = v.validate(EntrantSubtype::ContractEmployee, &raw).unwrap();
        let again = v.validate(EntrantSubtype::ContractEmployee, &record.to_raw_fields()).unwrap();
        assert_eq!(record, again);
    }
}
