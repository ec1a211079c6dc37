//! Pass policies
//!
//! A [`PassPolicy`] is the fixed rule set for one entrant subtype: which
//! fields the entrant must provide, which areas and rides the pass opens and
//! what discounts it carries. Policies are plain data and are evaluated
//! without touching any pass state.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::grants::{company_areas, project_areas};
use super::AreaSet;
use crate::types::{DiscountType, EntrantField, EntrantSubtype, ParkArea, RideAccess};

/// How a policy decides area access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "areas")]
pub enum AreaRule {
    /// The same areas for every entrant of the subtype
    Fixed(AreaSet),
    /// Looked up from the entrant's project number
    ByProjectNumber,
    /// Looked up from the entrant's company
    ByCompany,
}

/// Entrant data an [`AreaRule`] may depend on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessContext<'a> {
    /// Contract project number
    pub project_number: Option<u16>,
    /// Vendor company
    pub company: Option<&'a str>,
}

/// Outcome of an area check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaDecision {
    /// Access granted
    Granted,
    /// Access denied, default message applies
    Denied,
    /// Access denied because the rule could not place the entrant; carries the
    /// message to show instead of the default
    Unrecognized(String),
}

impl AreaDecision {
    /// Whether access was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, AreaDecision::Granted)
    }

    /// Explicit denial message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            AreaDecision::Unrecognized(message) => Some(message),
            AreaDecision::Granted | AreaDecision::Denied => None,
        }
    }
}

/// Rule set for one entrant subtype
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PassPolicy {
    /// Subtype the policy belongs to
    pub subtype: EntrantSubtype,
    /// Name printed on the pass
    pub display_name: &'static str,
    /// Fields the entrant must provide
    pub required_fields: &'static [EntrantField],
    /// Area access rule
    pub area_rule: AreaRule,
    /// Ride access kinds granted
    pub ride_access: &'static [RideAccess],
    /// Food discount, 0.0 to 1.0
    pub food_discount: f32,
    /// Merchandise discount, 0.0 to 1.0
    pub merchandise_discount: f32,
}

impl PassPolicy {
    /// Required fields as a set
    pub fn required_field_set(&self) -> BTreeSet<EntrantField> {
        self.required_fields.iter().copied().collect()
    }

    /// Resolve the areas this policy grants for an entrant
    ///
    /// Returns the denial message when the entrant's project number or
    /// company is not on the grant table.
    pub fn granted_areas(&self, context: AccessContext<'_>) -> Result<AreaSet, String> {
        match self.area_rule {
            AreaRule::Fixed(areas) => Ok(areas),
            AreaRule::ByProjectNumber => match context.project_number {
                Some(project) => project_areas(project).ok_or_else(|| {
                    format!("Project number {} does not grant access to any area.", project)
                }),
                None => Err("No project number on file for this pass.".to_string()),
            },
            AreaRule::ByCompany => match context.company {
                Some(company) => company_areas(company).ok_or_else(|| {
                    format!("Company \"{}\" is not recognized. Access denied.", company.trim())
                }),
                None => Err("No company on file for this pass.".to_string()),
            },
        }
    }

    /// Decide access to `area`
    pub fn access_area(&self, area: ParkArea, context: AccessContext<'_>) -> AreaDecision {
        match self.granted_areas(context) {
            Ok(areas) if areas.contains(area) => AreaDecision::Granted,
            Ok(_) => AreaDecision::Denied,
            Err(message) => AreaDecision::Unrecognized(message),
        }
    }

    /// Decide access for a ride access kind
    pub fn access_ride(&self, access: RideAccess) -> bool {
        self.ride_access.contains(&access)
    }

    /// Discount for `kind`, 0.0 to 1.0
    pub fn discount(&self, kind: DiscountType) -> f32 {
        match kind {
            DiscountType::Food => self.food_discount,
            DiscountType::Merchandise => self.merchandise_discount,
        }
    }
}

impl fmt::Display for PassPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}
