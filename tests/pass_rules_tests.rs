//! Tests for pass swipes across the policy table
//!
//! Every pass here runs against a manual clock so cooldown and birthday
//! behaviour is deterministic.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use park_pass_generator::entrant::{EntrantValidator, ValidatorOptions};
use park_pass_generator::pass::{
    BIRTHDAY_NOT_ALLOWED, BIRTHDAY_WELCOME, NOT_ALLOWED, SWIPED_TOO_SOON, WELCOME,
};
use park_pass_generator::*;
use std::sync::Arc;

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()))
}

fn address() -> RawEntrantFields {
    RawEntrantFields::new()
        .with(EntrantField::FirstName, "Ada")
        .with(EntrantField::LastName, "Lovelace")
        .with(EntrantField::StreetAddress, "10 Analytical Way")
        .with(EntrantField::City, "Orlando")
        .with(EntrantField::State, "FL")
        .with(EntrantField::ZipCode, "32801")
}

fn issue(subtype: EntrantSubtype, raw: &RawEntrantFields, clock: &Arc<ManualClock>) -> Pass {
    issue_with(subtype, raw, clock, ValidatorOptions::default())
}

fn issue_with(
    subtype: EntrantSubtype,
    raw: &RawEntrantFields,
    clock: &Arc<ManualClock>,
    options: ValidatorOptions,
) -> Pass {
    let entrant = EntrantValidator::with_clock(clock.clone())
        .with_options(options)
        .validate(subtype, raw)
        .unwrap();
    Pass::create(subtype, entrant).unwrap().with_clock(clock.clone())
}

#[test]
fn test_ride_cooldown_sequence() {
    let clock = clock();
    let mut pass = issue(EntrantSubtype::ClassicGuest, &RawEntrantFields::new(), &clock);

    let first = pass.swipe_ride(RideAccess::AllRides, true);
    assert_eq!(first, SwipeResult::new(true, WELCOME));

    clock.advance(Duration::seconds(2));
    let second = pass.swipe_ride(RideAccess::AllRides, true);
    assert!(!second.success);
    assert_eq!(second.message, SWIPED_TOO_SOON);

    // The refused swipe restarted the window
    clock.advance(Duration::seconds(4));
    assert!(!pass.swipe_ride(RideAccess::AllRides, true).success);

    clock.advance(Duration::seconds(5));
    assert!(pass.swipe_ride(RideAccess::AllRides, true).success);
}

#[test]
fn test_unchecked_swipe_ignores_cooldown() {
    let clock = clock();
    let mut pass = issue(EntrantSubtype::VipGuest, &RawEntrantFields::new(), &clock);

    assert!(pass.swipe_ride(RideAccess::AllRides, true).success);
    assert!(pass.swipe_ride(RideAccess::AllRides, false).success);
    assert!(pass.swipe_ride(RideAccess::SkipLines, false).success);
    assert!(!pass.swipe_ride(RideAccess::SkipLines, true).success);
}

#[test]
fn test_denied_ride_does_not_touch_cooldown() {
    let clock = clock();
    let raw = RawEntrantFields::new().with(EntrantField::DateOfBirth, "01/01/2022");
    let mut pass = issue(EntrantSubtype::ChildGuest, &raw, &clock);

    assert_eq!(pass.swipe_ride(RideAccess::AllRides, true).message, NOT_ALLOWED);
    assert_eq!(pass.last_swipe_time(), None);
    assert_eq!(pass.swipe_state(), SwipeState::NeverSwiped);
}

#[test]
fn test_area_and_discount_swipes_keep_ride_timer() {
    let clock = clock();
    let mut pass = issue(EntrantSubtype::Manager, &address(), &clock);

    assert!(pass.swipe_ride(RideAccess::AllRides, true).success);
    let last = pass.last_swipe_time();
    assert!(last.is_some());

    clock.advance(Duration::seconds(3));
    assert!(pass.swipe_area(ParkArea::Office).success);
    assert_eq!(pass.swipe_discount(DiscountType::Food), 0.25);
    assert!(pass.swipe_discount_result(DiscountType::Merchandise).success);
    assert_eq!(pass.last_swipe_time(), last);

    // Still measured from the ride swipe, not the later area swipes
    clock.advance(Duration::seconds(2));
    assert!(pass.swipe_ride(RideAccess::AllRides, true).success);
}

#[test]
fn test_birthday_messages() {
    let clock = clock();
    let raw = address().with(EntrantField::DateOfBirth, "06/15/1990");
    let pass = issue(EntrantSubtype::HourlyEmployeeFoodServices, &raw, &clock);

    assert_eq!(pass.swipe_area(ParkArea::Kitchen).message, BIRTHDAY_WELCOME);
    assert_eq!(pass.swipe_area(ParkArea::Office).message, BIRTHDAY_NOT_ALLOWED);

    clock.advance(Duration::days(1));
    assert_eq!(pass.swipe_area(ParkArea::Kitchen).message, WELCOME);
}

#[test]
fn test_leap_day_birthday_only_on_leap_years() {
    let clock = Arc::new(ManualClock::on_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    let raw = address().with(EntrantField::DateOfBirth, "02/29/2000");
    let pass = issue(EntrantSubtype::Manager, &raw, &clock);
    assert_eq!(pass.swipe_area(ParkArea::Office).message, BIRTHDAY_WELCOME);

    clock.set(Utc.with_ymd_and_hms(2025, 2, 28, 12, 0, 0).unwrap());
    assert_eq!(pass.swipe_area(ParkArea::Office).message, WELCOME);
}

#[test]
fn test_contract_employee_project_2002() {
    let clock = clock();
    let raw = address().with(EntrantField::ProjectNumber, "2002");
    let mut pass = issue(EntrantSubtype::ContractEmployee, &raw, &clock);

    assert!(pass.swipe_area(ParkArea::Kitchen).success);
    assert!(pass.swipe_area(ParkArea::Maintenance).success);
    assert!(!pass.swipe_area(ParkArea::Amusement).success);
    assert!(!pass.swipe_area(ParkArea::Office).success);
    assert!(!pass.swipe_best_ride().success);
    assert_eq!(pass.swipe_discount(DiscountType::Food), 0.0);
    assert_eq!(
        pass.granted_areas(),
        AreaSet::of(&[ParkArea::Kitchen, ParkArea::Maintenance])
    );
}

#[test]
fn test_vendor_nw_electrical_opens_everything() {
    let clock = clock();
    let raw = RawEntrantFields::new()
        .with(EntrantField::FirstName, "Nikola")
        .with(EntrantField::LastName, "Tesla")
        .with(EntrantField::Company, "NW Electrical")
        .with(EntrantField::DateOfBirth, "07/10/1956");
    let mut pass = issue(EntrantSubtype::Vendor, &raw, &clock);

    for area in ParkArea::ALL {
        assert!(pass.swipe_area(area).success, "{} should open", area);
    }
    assert!(!pass.swipe_ride(RideAccess::AllRides, true).success);
}

#[test]
fn test_unrecognized_company_is_denied_at_the_door() {
    let clock = clock();
    let raw = RawEntrantFields::new()
        .with(EntrantField::FirstName, "Wile")
        .with(EntrantField::LastName, "Coyote")
        .with(EntrantField::Company, "Acme2")
        .with(EntrantField::DateOfBirth, "06/15/1980");

    let strict = EntrantValidator::with_clock(clock.clone());
    assert!(matches!(
        strict.validate(EntrantSubtype::Vendor, &raw),
        Err(ValidationError::InvalidCompany(company)) if company == "Acme2"
    ));

    let lenient = ValidatorOptions {
        enforce_allow_lists: false,
        ..Default::default()
    };
    let pass = issue_with(EntrantSubtype::Vendor, &raw, &clock, lenient);

    // Unrecognized wins over the birthday message
    let result = pass.swipe_area(ParkArea::Kitchen);
    assert!(!result.success);
    assert_eq!(result.message, "Company \"Acme2\" is not recognized. Access denied.");
    assert!(pass.granted_areas().is_empty());
}

#[test]
fn test_manager_pass() {
    let clock = clock();
    let mut pass = issue(EntrantSubtype::Manager, &address(), &clock);

    assert_eq!(pass.granted_areas(), AreaSet::ALL);
    assert!(pass.swipe_ride(RideAccess::AllRides, true).success);
    assert!(!pass.swipe_ride(RideAccess::SkipLines, false).success);
    assert_eq!(pass.swipe_discount(DiscountType::Food), 0.25);
    assert_eq!(pass.swipe_discount(DiscountType::Merchandise), 0.25);
    assert_eq!(pass.swipe_discount_result(DiscountType::Food).message, "25% discount");
}

#[test]
fn test_best_ride_prefers_skip_lines() {
    let clock = clock();
    let mut vip = issue(EntrantSubtype::VipGuest, &RawEntrantFields::new(), &clock);
    let result = vip.swipe_best_ride();
    assert!(result.success);
    assert_eq!(result.message, format!("Skip Lines: {}", WELCOME));

    let mut classic = issue(EntrantSubtype::ClassicGuest, &RawEntrantFields::new(), &clock);
    assert_eq!(classic.swipe_best_ride(), SwipeResult::new(true, WELCOME));
}

#[test]
fn test_discount_table() {
    let clock = clock();
    let cases = [
        (EntrantSubtype::VipGuest, 0.10, 0.20),
        (EntrantSubtype::SeasonPassGuest, 0.10, 0.20),
        (EntrantSubtype::HourlyEmployeeRideServices, 0.15, 0.25),
        (EntrantSubtype::ClassicGuest, 0.0, 0.0),
    ];

    for (subtype, food, merchandise) in cases {
        let pass = issue(subtype, &address(), &clock);
        assert_eq!(pass.swipe_discount(DiscountType::Food), food, "{}", subtype);
        assert_eq!(pass.swipe_discount(DiscountType::Merchandise), merchandise, "{}", subtype);
    }

    let classic = issue(EntrantSubtype::ClassicGuest, &RawEntrantFields::new(), &clock);
    assert!(!classic.swipe_discount_result(DiscountType::Food).success);
}

#[test]
fn test_pass_summary() {
    let clock = clock();
    let pass = issue(EntrantSubtype::SeasonPassGuest, &address(), &clock);
    let summary = pass.summary();

    assert_eq!(summary.full_name, "Ada Lovelace");
    assert_eq!(summary.pass_name, "Season Guest Pass");
    assert_eq!(summary.ride_access, PassSummary::SKIP_RIDE_LINES);
    assert_eq!(summary.food_discount_percent, 10);
    assert_eq!(summary.merchandise_discount_percent, 20);

    let anonymous = issue(EntrantSubtype::ClassicGuest, &RawEntrantFields::new(), &clock);
    assert_eq!(anonymous.summary().full_name, PassSummary::UNKNOWN_NAME);
}

#[test]
fn test_pass_rejects_foreign_record() {
    let entrant = create_entrant(EntrantSubtype::ClassicGuest, &RawEntrantFields::new()).unwrap();
    assert!(matches!(
        Pass::create(EntrantSubtype::VipGuest, entrant),
        Err(PassError::SubtypeMismatch { .. })
    ));
}
