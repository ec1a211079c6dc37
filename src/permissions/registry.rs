//! Policy table
//!
//! One static [`PassPolicy`] per [`EntrantSubtype`], selected by an
//! exhaustive match so adding a subtype without a policy does not compile.

use std::collections::BTreeSet;

use super::{AreaRule, AreaSet, PassPolicy};
use crate::types::{EntrantField, EntrantSubtype, ParkArea, RideAccess};

use EntrantField::{City, Company, DateOfBirth, FirstName, LastName, ProjectNumber, State};
use EntrantField::{StreetAddress, ZipCode};

const ADDRESS_FIELDS: &[EntrantField] = &[FirstName, LastName, StreetAddress, City, State, ZipCode];

const ALL_RIDES: &[RideAccess] = &[RideAccess::AllRides];
const ALL_AND_SKIP: &[RideAccess] = &[RideAccess::AllRides, RideAccess::SkipLines];

const AMUSEMENT: AreaSet = AreaSet::of(&[ParkArea::Amusement]);

static CHILD_GUEST: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::ChildGuest,
    display_name: "Free Child Guest Pass",
    required_fields: &[DateOfBirth],
    area_rule: AreaRule::Fixed(AMUSEMENT),
    ride_access: &[],
    food_discount: 0.0,
    merchandise_discount: 0.0,
};

static CLASSIC_GUEST: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::ClassicGuest,
    display_name: "Classic Guest Pass",
    required_fields: &[],
    area_rule: AreaRule::Fixed(AMUSEMENT),
    ride_access: ALL_RIDES,
    food_discount: 0.0,
    merchandise_discount: 0.0,
};

static SENIOR_GUEST: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::SeniorGuest,
    display_name: "Senior Guest Pass",
    required_fields: &[FirstName, LastName, DateOfBirth],
    area_rule: AreaRule::Fixed(AMUSEMENT),
    ride_access: ALL_AND_SKIP,
    food_discount: 0.10,
    merchandise_discount: 0.10,
};

static VIP_GUEST: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::VipGuest,
    display_name: "VIP Guest Pass",
    required_fields: &[],
    area_rule: AreaRule::Fixed(AMUSEMENT),
    ride_access: ALL_AND_SKIP,
    food_discount: 0.10,
    merchandise_discount: 0.20,
};

static SEASON_PASS_GUEST: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::SeasonPassGuest,
    display_name: "Season Guest Pass",
    required_fields: ADDRESS_FIELDS,
    area_rule: AreaRule::Fixed(AMUSEMENT),
    ride_access: ALL_AND_SKIP,
    food_discount: 0.10,
    merchandise_discount: 0.20,
};

static FOOD_SERVICES: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::HourlyEmployeeFoodServices,
    display_name: "Hourly Employee - Food Services Pass",
    required_fields: ADDRESS_FIELDS,
    area_rule: AreaRule::Fixed(AreaSet::of(&[ParkArea::Amusement, ParkArea::Kitchen])),
    ride_access: ALL_RIDES,
    food_discount: 0.15,
    merchandise_discount: 0.25,
};

static RIDE_SERVICES: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::HourlyEmployeeRideServices,
    display_name: "Hourly Employee - Ride Services Pass",
    required_fields: ADDRESS_FIELDS,
    area_rule: AreaRule::Fixed(AreaSet::of(&[ParkArea::Amusement, ParkArea::RideControl])),
    ride_access: ALL_RIDES,
    food_discount: 0.15,
    merchandise_discount: 0.25,
};

static MAINTENANCE: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::HourlyEmployeeMaintenance,
    display_name: "Hourly Employee - Maintenance Pass",
    required_fields: ADDRESS_FIELDS,
    area_rule: AreaRule::Fixed(AreaSet::of(&[
        ParkArea::Amusement,
        ParkArea::Kitchen,
        ParkArea::RideControl,
        ParkArea::Maintenance,
    ])),
    ride_access: ALL_RIDES,
    food_discount: 0.15,
    merchandise_discount: 0.25,
};

static CONTRACT_EMPLOYEE: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::ContractEmployee,
    display_name: "Contract Employee Pass",
    required_fields: &[ProjectNumber, FirstName, LastName, StreetAddress, City, State, ZipCode],
    area_rule: AreaRule::ByProjectNumber,
    ride_access: &[],
    food_discount: 0.0,
    merchandise_discount: 0.0,
};

static MANAGER: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::Manager,
    display_name: "Manager Pass",
    required_fields: ADDRESS_FIELDS,
    area_rule: AreaRule::Fixed(AreaSet::ALL),
    ride_access: ALL_RIDES,
    food_discount: 0.25,
    merchandise_discount: 0.25,
};

static VENDOR: PassPolicy = PassPolicy {
    subtype: EntrantSubtype::Vendor,
    display_name: "Vendor Pass",
    required_fields: &[FirstName, LastName, Company, DateOfBirth],
    area_rule: AreaRule::ByCompany,
    ride_access: &[],
    food_discount: 0.0,
    merchandise_discount: 0.0,
};

/// The policy for `subtype`
pub fn policy_for(subtype: EntrantSubtype) -> &'static PassPolicy {
    match subtype {
        EntrantSubtype::ChildGuest => &CHILD_GUEST,
        EntrantSubtype::ClassicGuest => &CLASSIC_GUEST,
        EntrantSubtype::SeniorGuest => &SENIOR_GUEST,
        EntrantSubtype::VipGuest => &VIP_GUEST,
        EntrantSubtype::SeasonPassGuest => &SEASON_PASS_GUEST,
        EntrantSubtype::HourlyEmployeeFoodServices => &FOOD_SERVICES,
        EntrantSubtype::HourlyEmployeeRideServices => &RIDE_SERVICES,
        EntrantSubtype::HourlyEmployeeMaintenance => &MAINTENANCE,
        EntrantSubtype::ContractEmployee => &CONTRACT_EMPLOYEE,
        EntrantSubtype::Manager => &MANAGER,
        EntrantSubtype::Vendor => &VENDOR,
    }
}

/// Fields an entrant of `subtype` must provide
pub fn required_fields(subtype: EntrantSubtype) -> BTreeSet<EntrantField> {
    policy_for(subtype).required_field_set()
}

/// Name printed on passes for `subtype`
pub fn display_name(subtype: EntrantSubtype) -> &'static str {
    policy_for(subtype).display_name
}

/// Every policy, in [`EntrantSubtype::ALL`] order
pub fn all_policies() -> impl Iterator<Item = &'static PassPolicy> {
    EntrantSubtype::ALL.into_iter().map(policy_for)
}
