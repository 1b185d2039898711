//! Role taxonomy — the closed set of day-level assignments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One monitor's assignment for one day.
///
/// `Other` is an externally fixed absence (vacation and the like): the
/// solvers read it as a constraint but never choose it themselves.
/// Serialized with the short names the plan files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "AM1")]
    Am1,
    #[serde(rename = "AM2")]
    Am2,
    #[serde(rename = "PM")]
    Pm,
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "R")]
    Remote,
    #[serde(rename = "OTHER")]
    Other,
}

/// The three mutually exclusive monitoring slots of a day.
pub const MONITORING_ROLES: [Role; 3] = [Role::Am1, Role::Am2, Role::Pm];

impl Role {
    pub fn is_monitoring(self) -> bool {
        matches!(self, Role::Am1 | Role::Am2 | Role::Pm)
    }

    pub fn is_am(self) -> bool {
        matches!(self, Role::Am1 | Role::Am2)
    }

    /// True for roles that keep the monitor away from the office.
    pub fn is_away_from_office(self) -> bool {
        matches!(self, Role::Remote | Role::Other)
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Am1 => "AM1",
            Role::Am2 => "AM2",
            Role::Pm => "PM",
            Role::Normal => "N",
            Role::Remote => "R",
            Role::Other => "OTHER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A small set of monitoring roles, used by combo predicates that bar a
/// monitor from a subset of the day's slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);
    /// Both morning slots.
    pub const AM: RoleSet = RoleSet(0b011);

    fn bit(role: Role) -> u8 {
        match role {
            Role::Am1 => 0b001,
            Role::Am2 => 0b010,
            Role::Pm => 0b100,
            // Non-monitoring roles never appear in combo predicates.
            Role::Normal | Role::Remote | Role::Other => 0,
        }
    }

    pub fn single(role: Role) -> RoleSet {
        RoleSet(Self::bit(role))
    }

    pub fn with(self, role: Role) -> RoleSet {
        RoleSet(self.0 | Self::bit(role))
    }

    pub fn contains(self, role: Role) -> bool {
        let bit = Self::bit(role);
        bit != 0 && self.0 & bit != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}
