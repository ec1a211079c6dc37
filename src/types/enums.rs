//! Enumeration types for the park pass generator
//!
//! This module contains all enumeration types used throughout the rules engine,
//! including entrant subtypes and kinds, entrant fields, park areas, ride access
//! kinds, discount kinds, and output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalize user input for enum parsing ("Ride Control", "ride-control" and
/// "ride_control" all become "ridecontrol")
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Broad category of entrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrantKind {
    /// Paying or free guests
    Guest,
    /// Hourly and contract employees
    Employee,
    /// Park managers
    Manager,
    /// Outside vendors
    Vendor,
}

impl EntrantKind {
    /// All entrant kinds in display order
    pub const ALL: [EntrantKind; 4] =
        [EntrantKind::Guest, EntrantKind::Employee, EntrantKind::Manager, EntrantKind::Vendor];

    /// The subtypes that belong to this kind, in display order
    pub fn subtypes(&self) -> Vec<EntrantSubtype> {
        EntrantSubtype::ALL.iter().copied().filter(|subtype| subtype.kind() == *self).collect()
    }

    /// Employees and managers, who carry a social security number
    pub fn is_staff(&self) -> bool {
        matches!(self, EntrantKind::Employee | EntrantKind::Manager)
    }
}

impl fmt::Display for EntrantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrantKind::Guest => write!(f, "Guest"),
            EntrantKind::Employee => write!(f, "Employee"),
            EntrantKind::Manager => write!(f, "Manager"),
            EntrantKind::Vendor => write!(f, "Vendor"),
        }
    }
}

/// Every kind of entrant a pass can be issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrantSubtype {
    /// Free child guest, must be younger than five
    ChildGuest,
    /// Classic adult guest
    ClassicGuest,
    /// Senior guest, 65 or older
    SeniorGuest,
    /// VIP guest
    VipGuest,
    /// Season pass holder
    SeasonPassGuest,
    /// Hourly employee working food services
    HourlyEmployeeFoodServices,
    /// Hourly employee operating rides
    HourlyEmployeeRideServices,
    /// Hourly employee doing maintenance
    HourlyEmployeeMaintenance,
    /// Contract employee bound to a project
    ContractEmployee,
    /// Park manager
    Manager,
    /// Vendor representing a company
    Vendor,
}

impl EntrantSubtype {
    /// All subtypes in display order
    pub const ALL: [EntrantSubtype; 11] = [
        EntrantSubtype::ChildGuest,
        EntrantSubtype::ClassicGuest,
        EntrantSubtype::SeniorGuest,
        EntrantSubtype::VipGuest,
        EntrantSubtype::SeasonPassGuest,
        EntrantSubtype::HourlyEmployeeFoodServices,
        EntrantSubtype::HourlyEmployeeRideServices,
        EntrantSubtype::HourlyEmployeeMaintenance,
        EntrantSubtype::ContractEmployee,
        EntrantSubtype::Manager,
        EntrantSubtype::Vendor,
    ];

    /// The broad kind this subtype belongs to
    pub fn kind(&self) -> EntrantKind {
        match self {
            EntrantSubtype::ChildGuest
            | EntrantSubtype::ClassicGuest
            | EntrantSubtype::SeniorGuest
            | EntrantSubtype::VipGuest
            | EntrantSubtype::SeasonPassGuest => EntrantKind::Guest,
            EntrantSubtype::HourlyEmployeeFoodServices
            | EntrantSubtype::HourlyEmployeeRideServices
            | EntrantSubtype::HourlyEmployeeMaintenance
            | EntrantSubtype::ContractEmployee => EntrantKind::Employee,
            EntrantSubtype::Manager => EntrantKind::Manager,
            EntrantSubtype::Vendor => EntrantKind::Vendor,
        }
    }

    /// Short label used when choosing a subtype within its kind
    pub fn label(&self) -> &'static str {
        match self {
            EntrantSubtype::ChildGuest => "Child",
            EntrantSubtype::ClassicGuest => "Adult",
            EntrantSubtype::SeniorGuest => "Senior",
            EntrantSubtype::VipGuest => "VIP",
            EntrantSubtype::SeasonPassGuest => "Season Pass",
            EntrantSubtype::HourlyEmployeeFoodServices => "Food Services",
            EntrantSubtype::HourlyEmployeeRideServices => "Ride Services",
            EntrantSubtype::HourlyEmployeeMaintenance => "Maintenance",
            EntrantSubtype::ContractEmployee => "Contract",
            EntrantSubtype::Manager => "Manager",
            EntrantSubtype::Vendor => "Vendor",
        }
    }
}

impl fmt::Display for EntrantSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrantSubtype::ChildGuest => write!(f, "Child Guest"),
            EntrantSubtype::ClassicGuest => write!(f, "Classic Guest"),
            EntrantSubtype::SeniorGuest => write!(f, "Senior Guest"),
            EntrantSubtype::VipGuest => write!(f, "VIP Guest"),
            EntrantSubtype::SeasonPassGuest => write!(f, "Season Pass Guest"),
            EntrantSubtype::HourlyEmployeeFoodServices => {
                write!(f, "Hourly Employee - Food Services")
            }
            EntrantSubtype::HourlyEmployeeRideServices => {
                write!(f, "Hourly Employee - Ride Services")
            }
            EntrantSubtype::HourlyEmployeeMaintenance => write!(f, "Hourly Employee - Maintenance"),
            EntrantSubtype::ContractEmployee => write!(f, "Contract Employee"),
            EntrantSubtype::Manager => write!(f, "Manager"),
            EntrantSubtype::Vendor => write!(f, "Vendor"),
        }
    }
}

impl FromStr for EntrantSubtype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "child" | "childguest" | "freechild" => Ok(EntrantSubtype::ChildGuest),
            "classic" | "classicguest" | "adult" | "guest" => Ok(EntrantSubtype::ClassicGuest),
            "senior" | "seniorguest" => Ok(EntrantSubtype::SeniorGuest),
            "vip" | "vipguest" => Ok(EntrantSubtype::VipGuest),
            "season" | "seasonpass" | "seasonpassguest" => Ok(EntrantSubtype::SeasonPassGuest),
            "food" | "foodservices" | "hourlyemployeefoodservices" => {
                Ok(EntrantSubtype::HourlyEmployeeFoodServices)
            }
            "ride" | "rideservices" | "hourlyemployeerideservices" => {
                Ok(EntrantSubtype::HourlyEmployeeRideServices)
            }
            "maintenance" | "hourlyemployeemaintenance" => {
                Ok(EntrantSubtype::HourlyEmployeeMaintenance)
            }
            "contract" | "contractemployee" => Ok(EntrantSubtype::ContractEmployee),
            "manager" => Ok(EntrantSubtype::Manager),
            "vendor" => Ok(EntrantSubtype::Vendor),
            _ => Err(format!("Unknown entrant subtype: {}", s)),
        }
    }
}

/// Fields of entrant information a pass may require
///
/// The declaration order is the order fields are reported in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrantField {
    /// Date of birth, `MM/dd/yyyy`
    DateOfBirth,
    /// Social security number, `###-##-####`
    Ssn,
    /// Four digit project number
    ProjectNumber,
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Vendor company
    Company,
    /// Street address
    StreetAddress,
    /// City
    City,
    /// Two letter state
    State,
    /// Five digit zip code with optional four digit extension
    ZipCode,
}

impl EntrantField {
    /// All fields in declaration order
    pub const ALL: [EntrantField; 10] = [
        EntrantField::DateOfBirth,
        EntrantField::Ssn,
        EntrantField::ProjectNumber,
        EntrantField::FirstName,
        EntrantField::LastName,
        EntrantField::Company,
        EntrantField::StreetAddress,
        EntrantField::City,
        EntrantField::State,
        EntrantField::ZipCode,
    ];

    /// The user-friendly display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EntrantField::DateOfBirth => "Date of Birth",
            EntrantField::Ssn => "SSN",
            EntrantField::ProjectNumber => "Project #",
            EntrantField::FirstName => "First Name",
            EntrantField::LastName => "Last Name",
            EntrantField::Company => "Company",
            EntrantField::StreetAddress => "Street Address",
            EntrantField::City => "City",
            EntrantField::State => "State",
            EntrantField::ZipCode => "Zip Code",
        }
    }

    /// Whether the field is free text subject to the maximum length rule
    pub fn is_length_limited(&self) -> bool {
        matches!(
            self,
            EntrantField::Company
                | EntrantField::FirstName
                | EntrantField::LastName
                | EntrantField::StreetAddress
                | EntrantField::City
        )
    }
}

impl fmt::Display for EntrantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Areas of the park a pass can be swiped at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParkArea {
    /// The public amusement area
    Amusement,
    /// Kitchens where food service employees work
    Kitchen,
    /// Ride control booths
    RideControl,
    /// Maintenance areas
    Maintenance,
    /// Manager offices
    Office,
}

impl ParkArea {
    /// All park areas
    pub const ALL: [ParkArea; 5] = [
        ParkArea::Amusement,
        ParkArea::Kitchen,
        ParkArea::RideControl,
        ParkArea::Maintenance,
        ParkArea::Office,
    ];
}

impl fmt::Display for ParkArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkArea::Amusement => write!(f, "Amusement"),
            ParkArea::Kitchen => write!(f, "Kitchen"),
            ParkArea::RideControl => write!(f, "Ride Control"),
            ParkArea::Maintenance => write!(f, "Maintenance"),
            ParkArea::Office => write!(f, "Office"),
        }
    }
}

impl FromStr for ParkArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "amusement" => Ok(ParkArea::Amusement),
            "kitchen" => Ok(ParkArea::Kitchen),
            "ridecontrol" => Ok(ParkArea::RideControl),
            "maintenance" => Ok(ParkArea::Maintenance),
            "office" => Ok(ParkArea::Office),
            _ => Err(format!("Unknown park area: {}", s)),
        }
    }
}

/// Kinds of ride access a pass can be swiped for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideAccess {
    /// Access to all rides
    AllRides,
    /// Allowed to skip ride lines
    SkipLines,
}

impl RideAccess {
    /// All ride access kinds
    pub const ALL: [RideAccess; 2] = [RideAccess::AllRides, RideAccess::SkipLines];
}

impl fmt::Display for RideAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideAccess::AllRides => write!(f, "All Rides"),
            RideAccess::SkipLines => write!(f, "Skip Lines"),
        }
    }
}

impl FromStr for RideAccess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "all" | "allrides" | "rides" => Ok(RideAccess::AllRides),
            "skip" | "skiplines" => Ok(RideAccess::SkipLines),
            _ => Err(format!("Unknown ride access: {}", s)),
        }
    }
}

/// Kinds of purchase discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// Food purchases
    Food,
    /// Merchandise purchases
    Merchandise,
}

impl DiscountType {
    /// All discount kinds
    pub const ALL: [DiscountType; 2] = [DiscountType::Food, DiscountType::Merchandise];
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountType::Food => write!(f, "Food"),
            DiscountType::Merchandise => write!(f, "Merchandise"),
        }
    }
}

impl FromStr for DiscountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "food" => Ok(DiscountType::Food),
            "merchandise" | "merch" => Ok(DiscountType::Merchandise),
            _ => Err(format!("Unknown discount type: {}", s)),
        }
    }
}

/// Output format for session results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// JSON document with events and statistics
    Json,
    /// One human readable line per event
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
