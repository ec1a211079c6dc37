//! Area grants that depend on entrant data
//!
//! Contract employees get areas by project number and vendors by company.
//! A `None` return means the value is not on the grant table at all.

use super::AreaSet;
use crate::types::ParkArea;

/// Areas granted to a contract employee working on `project_number`
pub fn project_areas(project_number: u16) -> Option<AreaSet> {
    use ParkArea::*;

    let areas = match project_number {
        1001 => AreaSet::of(&[Amusement, RideControl]),
        1002 => AreaSet::of(&[Amusement, RideControl, Maintenance]),
        1003 => AreaSet::of(&[Amusement, RideControl, Kitchen, Maintenance, Office]),
        2001 => AreaSet::of(&[Office]),
        2002 => AreaSet::of(&[Kitchen, Maintenance]),
        _ => return None,
    };
    Some(areas)
}

/// Areas granted to a vendor from `company`
///
/// Matching is exact after trimming, so "Acme2" is not "Acme".
pub fn company_areas(company: &str) -> Option<AreaSet> {
    use ParkArea::*;

    let areas = match company.trim() {
        "Acme" => AreaSet::of(&[Kitchen]),
        "Orkin" => AreaSet::of(&[Amusement, RideControl, Kitchen]),
        "Fedex" => AreaSet::of(&[Maintenance, Office]),
        "NW Electrical" => AreaSet::ALL,
        _ => return None,
    };
    Some(areas)
}
