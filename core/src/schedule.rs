//! Per-run schedule state — the only mutable resource in the engine.
//!
//! RULE: copy-on-trial, commit-on-success. Every solver trial works on a
//! private `clone()` of the state; a clone is promoted to authoritative
//! only when its trial fully succeeds (or is accepted as the best forced
//! result). A cell once assigned is never rewritten within an attempt:
//! pre-seeded entries and committed roles always win over later writes.

use crate::role::{Role, MONITORING_ROLES};
use crate::types::{Day, MonitorId};
use std::collections::BTreeMap;

/// Per-role assignment ceilings for one monitor. Only the three
/// monitoring slots and the remote role carry quotas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleQuotas {
    am1: u32,
    am2: u32,
    pm: u32,
    remote: u32,
}

impl RoleQuotas {
    pub fn get(&self, role: Role) -> u32 {
        match role {
            Role::Am1 => self.am1,
            Role::Am2 => self.am2,
            Role::Pm => self.pm,
            Role::Remote => self.remote,
            Role::Normal | Role::Other => 0,
        }
    }

    pub fn set(&mut self, role: Role, max: u32) {
        match role {
            Role::Am1 => self.am1 = max,
            Role::Am2 => self.am2 = max,
            Role::Pm => self.pm = max,
            Role::Remote => self.remote = max,
            Role::Normal | Role::Other => {}
        }
    }
}

/// One monitor's schedule for the run: a sparse day → role map plus the
/// monitor's quotas. Days are kept ordered so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorSchedule {
    assignments: BTreeMap<Day, Role>,
    quotas: RoleQuotas,
}

impl MonitorSchedule {
    pub fn role_on(&self, day: Day) -> Option<Role> {
        self.assignments.get(&day).copied()
    }

    /// Assign `role` on `day` if the cell is still empty. The solvers
    /// only ever target empty cells; an occupied cell is left alone.
    pub fn assign(&mut self, day: Day, role: Role) {
        self.assignments.entry(day).or_insert(role);
    }

    pub fn count(&self, role: Role) -> u32 {
        self.assignments.values().filter(|&&r| r == role).count() as u32
    }

    pub fn monitoring_count(&self) -> u32 {
        MONITORING_ROLES.iter().map(|&role| self.count(role)).sum()
    }

    pub fn quota(&self, role: Role) -> u32 {
        self.quotas.get(role)
    }

    pub fn set_quota(&mut self, role: Role, max: u32) {
        self.quotas.set(role, max);
    }

    /// True once the monitor has used up its ceiling for `role`.
    pub fn at_role_max(&self, role: Role) -> bool {
        self.count(role) >= self.quotas.get(role)
    }

    pub fn assignments(&self) -> impl Iterator<Item = (Day, Role)> + '_ {
        self.assignments.iter().map(|(&day, &role)| (day, role))
    }
}

/// The full Monitor × Day grid for one scheduling attempt, indexed by
/// `MonitorId`. `Clone` is the trial snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleState {
    slots: Vec<MonitorSchedule>,
}

impl ScheduleState {
    pub fn new(num_monitors: usize) -> Self {
        Self {
            slots: vec![MonitorSchedule::default(); num_monitors],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn monitor(&self, id: MonitorId) -> &MonitorSchedule {
        &self.slots[id.0]
    }

    pub fn monitor_mut(&mut self, id: MonitorId) -> &mut MonitorSchedule {
        &mut self.slots[id.0]
    }

    pub fn role_on(&self, id: MonitorId, day: Day) -> Option<Role> {
        self.slots[id.0].role_on(day)
    }

    pub fn assign(&mut self, id: MonitorId, day: Day, role: Role) {
        self.slots[id.0].assign(day, role);
    }

    pub fn iter(&self) -> impl Iterator<Item = (MonitorId, &MonitorSchedule)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(idx, ms)| (MonitorId(idx), ms))
    }
}
