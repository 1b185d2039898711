//! The input bundle handed over by the external loader.
//!
//! Everything here is name-keyed, the way a loader naturally produces
//! it. `Scheduler::new` resolves the names against the roster and fails
//! fast on any name the roster does not know — nothing reaches a solver
//! with an unresolved reference.

use crate::config::RosterConfig;
use crate::monitor::Monitor;
use crate::role::Role;
use crate::types::Day;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A manual entry seeded before solving: a monitoring pin, a pre-booked
/// remote day, or an absence (`OTHER`).
#[derive(Debug, Clone, Deserialize)]
pub struct PrefilledEntry {
    pub monitor: String,
    pub day: Day,
    pub role: Role,
}

/// The full scheduling problem as the loader hands it over.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterPlan {
    /// Roster order is the deterministic tie-break order downstream.
    pub monitors: Vec<Monitor>,
    /// Name groups that must keep at least one member in the office.
    #[serde(default)]
    pub office_groups: Vec<Vec<String>>,
    /// Business days, already filtered for weekends and holidays.
    pub days: Vec<Day>,
    #[serde(default)]
    pub prefilled: Vec<PrefilledEntry>,
    /// Manual per-monitor remote quota overrides.
    #[serde(default)]
    pub remote_quota_overrides: BTreeMap<String, u32>,
    #[serde(default)]
    pub config: RosterConfig,
}
