//! Sample entrant data
//!
//! Produces raw fields that pass validation for a requested subtype, for
//! demos and for filling in the terminal form quickly.

use chrono::{Datelike, Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use super::parse::DATE_FORMAT;
use super::validator::limits;
use super::RawEntrantFields;
use crate::permissions::required_fields;
use crate::types::{EntrantField, EntrantSubtype};

const FIRST_NAMES: &[&str] =
    &["Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "Ken", "Frances", "Linus"];

const LAST_NAMES: &[&str] =
    &["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Thompson"];

const STREETS: &[&str] = &["Main St", "Coaster Ave", "Carousel Blvd", "Midway Rd", "Lagoon Ln"];

const CITIES: &[(&str, &str)] = &[
    ("Orlando", "FL"),
    ("Anaheim", "CA"),
    ("Sandusky", "OH"),
    ("Valencia", "CA"),
    ("Arlington", "TX"),
];

/// Generator for valid sample entrant fields
pub struct SampleEntrantGenerator {
    rng: Box<dyn rand::RngCore>,
}

impl fmt::Debug for SampleEntrantGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleEntrantGenerator").finish()
    }
}

impl Default for SampleEntrantGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleEntrantGenerator {
    /// Create a generator backed by the thread RNG
    pub fn new() -> Self {
        Self {
            rng: Box::new(rand::thread_rng()),
        }
    }

    /// Create a generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }

    /// Generate fields for `subtype` as of `today`
    ///
    /// Every required field is filled in. Names are always included so the
    /// pass summary has something to show.
    pub fn generate(&mut self, subtype: EntrantSubtype, today: NaiveDate) -> RawEntrantFields {
        let required = required_fields(subtype);
        let mut raw = RawEntrantFields::new()
            .with(EntrantField::FirstName, self.pick(FIRST_NAMES))
            .with(EntrantField::LastName, self.pick(LAST_NAMES));

        if required.contains(&EntrantField::StreetAddress) {
            let number = self.rng.gen_range(1..=9999);
            let (city, state) = CITIES.choose(&mut self.rng).copied().unwrap_or(("Orlando", "FL"));
            let zip = self.rng.gen_range(10000..=99999);
            raw = raw
                .with(EntrantField::StreetAddress, format!("{} {}", number, self.pick(STREETS)))
                .with(EntrantField::City, city)
                .with(EntrantField::State, state)
                .with(EntrantField::ZipCode, zip.to_string());
        }

        if required.contains(&EntrantField::DateOfBirth) || subtype.kind().is_staff() {
            let dob = self.date_of_birth(subtype, today);
            raw = raw.with(EntrantField::DateOfBirth, dob.format(DATE_FORMAT).to_string());
        }

        if required.contains(&EntrantField::ProjectNumber) {
            let project = limits::VALID_PROJECT_NUMBERS
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(limits::VALID_PROJECT_NUMBERS[0]);
            raw = raw.with(EntrantField::ProjectNumber, project.to_string());
        }

        if required.contains(&EntrantField::Company) {
            let company = self.pick(&limits::VALID_COMPANIES);
            raw = raw.with(EntrantField::Company, company);
        }

        if subtype.kind().is_staff() {
            let ssn = format!(
                "{:03}-{:02}-{:04}",
                self.rng.gen_range(100..=899),
                self.rng.gen_range(1..=99),
                self.rng.gen_range(1..=9999)
            );
            raw = raw.with(EntrantField::Ssn, ssn);
        }

        raw
    }

    fn pick<'a>(&mut self, values: &[&'a str]) -> &'a str {
        values.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn date_of_birth(&mut self, subtype: EntrantSubtype, today: NaiveDate) -> NaiveDate {
        let (min_age, max_age) = match subtype {
            EntrantSubtype::ChildGuest => (0, limits::CHILD_AGE_CUTOFF - 1),
            EntrantSubtype::SeniorGuest => (limits::SENIOR_AGE_CUTOFF, 90),
            _ => (18, 64),
        };
        let years = self.rng.gen_range(min_age..=max_age);
        // Less than a year past the birthday, so the age stays at `years`
        let offset_days = self.rng.gen_range(1..=360);
        years_before(today, years) - Duration::days(offset_days)
    }
}

/// Same month and day `years` earlier, falling back to Feb 28 for leap days
fn years_before(today: NaiveDate, years: i32) -> NaiveDate {
    let year = today.year() - years;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, today.month(), 28))
        .unwrap_or(today)
}
