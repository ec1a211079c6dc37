//! Sets of park areas
//!
//! A compact, copyable set over the five [`ParkArea`]s. Sets can be built in
//! `const` context so policy tables stay static.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ParkArea;

const fn bit(area: ParkArea) -> u8 {
    1 << (area as u8)
}

/// Set of areas a pass may enter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<ParkArea>", from = "Vec<ParkArea>")]
pub struct AreaSet {
    bits: u8,
}

impl AreaSet {
    /// The empty set
    pub const EMPTY: AreaSet = AreaSet { bits: 0 };

    /// Every park area
    pub const ALL: AreaSet = AreaSet::of(&ParkArea::ALL);

    /// Create a new empty area set
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a set from a list of areas
    pub const fn of(areas: &[ParkArea]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < areas.len() {
            bits |= bit(areas[i]);
            i += 1;
        }
        Self { bits }
    }

    /// Add an area to the set
    pub fn insert(&mut self, area: ParkArea) {
        self.bits |= bit(area);
    }

    /// Check whether the set grants `area`
    pub const fn contains(&self, area: ParkArea) -> bool {
        self.bits & bit(area) != 0
    }

    /// Check if the set is empty
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of areas in the set
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Areas in the set, in [`ParkArea::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = ParkArea> + '_ {
        ParkArea::ALL.into_iter().filter(move |area| self.contains(*area))
    }
}

impl FromIterator<ParkArea> for AreaSet {
    fn from_iter<I: IntoIterator<Item = ParkArea>>(iter: I) -> Self {
        let mut set = AreaSet::new();
        for area in iter {
            set.insert(area);
        }
        set
    }
}

impl From<Vec<ParkArea>> for AreaSet {
    fn from(areas: Vec<ParkArea>) -> Self {
        areas.into_iter().collect()
    }
}

impl From<AreaSet> for Vec<ParkArea> {
    fn from(set: AreaSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for AreaSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = self.iter().map(|area| area.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}
