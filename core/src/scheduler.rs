//! The scheduling engine — orchestrates one complete roster run.
//!
//! STAGE ORDER (fixed, never reordered):
//!   1. Resolve and seed the input (fail fast on unknown names).
//!   2. Quota allocation: monitoring ceilings, then the remote budget.
//!   3. Duty solve: AM1/AM2/PM for every business day.
//!   4. Remote solve: layered over the duty grid.
//!   5. Gap fill: every still-empty cell becomes N.

use crate::combo::gen_monitor_combos;
use crate::config::RosterConfig;
use crate::duty_solver;
use crate::error::RosterResult;
use crate::input::RosterPlan;
use crate::monitor::{OfficeGroup, Roster};
use crate::quota;
use crate::remote_solver;
use crate::rng::RosterRng;
use crate::role::{Role, MONITORING_ROLES};
use crate::schedule::ScheduleState;
use crate::types::{Day, MonitorId, Seed};
use serde::Serialize;
use std::collections::HashSet;

pub struct Scheduler {
    roster: Roster,
    office_groups: Vec<OfficeGroup>,
    days: Vec<Day>,
    state: ScheduleState,
    manual_remote: HashSet<MonitorId>,
    config: RosterConfig,
    rng: RosterRng,
}

impl Scheduler {
    /// Resolve the plan against its roster. Any office-group member,
    /// pre-fill, or quota override naming a monitor outside the roster
    /// is a fatal error here, before any solving.
    pub fn new(plan: RosterPlan, seed: Seed) -> RosterResult<Self> {
        let roster = Roster::new(plan.monitors)?;

        let mut office_groups = Vec::with_capacity(plan.office_groups.len());
        for group in &plan.office_groups {
            let mut members = Vec::with_capacity(group.len());
            for name in group {
                members.push(roster.id_of(name)?);
            }
            office_groups.push(OfficeGroup { members });
        }

        let mut days = plan.days;
        days.sort_unstable();
        days.dedup();

        let mut state = ScheduleState::new(roster.len());
        for entry in &plan.prefilled {
            let id = roster.id_of(&entry.monitor)?;
            state.assign(id, entry.day, entry.role);
        }

        let mut manual_remote = HashSet::new();
        for (name, &max) in &plan.remote_quota_overrides {
            let id = roster.id_of(name)?;
            state.monitor_mut(id).set_quota(Role::Remote, max);
            manual_remote.insert(id);
        }

        Ok(Self {
            roster,
            office_groups,
            days,
            state,
            manual_remote,
            config: plan.config,
            rng: RosterRng::from_seed(seed),
        })
    }

    /// Run the full pipeline and emit the completed grid.
    pub fn run(mut self) -> RosterOutcome {
        quota::assign_role_maxes(
            &mut self.state,
            &self.roster,
            &MONITORING_ROLES,
            self.days.len(),
            &mut self.rng,
        );
        quota::assign_remote_max(
            &mut self.state,
            &self.roster,
            self.days.len(),
            self.config.max_remotes_per_day,
            &self.manual_remote,
            &mut self.rng,
        );

        let combos = gen_monitor_combos(&self.roster);
        log::debug!(
            "scheduler: {} monitors, {} days, {} combos",
            self.roster.len(),
            self.days.len(),
            combos.len()
        );

        let ordered_days = duty_solver::day_priority_order(&self.state, &self.days);
        self.state =
            duty_solver::assign_monitors(&self.state, &combos, &ordered_days, &self.config, &mut self.rng);

        let (state, unresolved_remote_days) = remote_solver::assign_remotes(
            &self.state,
            &self.office_groups,
            &self.days,
            &self.config,
            &mut self.rng,
        );
        self.state = state;

        fill_gaps(&mut self.state, &self.days, Role::Normal);

        self.into_outcome(unresolved_remote_days)
    }

    fn into_outcome(self, unresolved_remote_days: u32) -> RosterOutcome {
        let monitors: Vec<String> = self.roster.iter().map(|(_, m)| m.name.clone()).collect();

        let grid: Vec<DayRow> = self
            .days
            .iter()
            .map(|&day| DayRow {
                day,
                roles: self
                    .roster
                    .ids()
                    .map(|id| self.state.role_on(id, day).unwrap_or(Role::Normal))
                    .collect(),
            })
            .collect();

        let summaries: Vec<MonitorSummary> = self
            .roster
            .iter()
            .map(|(id, monitor)| {
                let ms = self.state.monitor(id);
                MonitorSummary {
                    name: monitor.name.clone(),
                    am1: ms.count(Role::Am1),
                    am2: ms.count(Role::Am2),
                    pm: ms.count(Role::Pm),
                    monitoring_total: ms.monitoring_count(),
                    normal: ms.count(Role::Normal),
                    remote: ms.count(Role::Remote),
                    other: ms.count(Role::Other),
                    remote_quota: ms.quota(Role::Remote),
                }
            })
            .collect();

        RosterOutcome {
            monitors,
            grid,
            summaries,
            unresolved_remote_days,
        }
    }
}

/// Default-fill: every Monitor × Day cell still empty becomes `role`.
/// Idempotent — occupied cells are never touched.
pub fn fill_gaps(state: &mut ScheduleState, days: &[Day], role: Role) {
    for &day in days {
        for idx in 0..state.len() {
            state.assign(MonitorId(idx), day, role);
        }
    }
}

/// One day of the completed grid; `roles` is roster-ordered.
#[derive(Debug, Clone, Serialize)]
pub struct DayRow {
    pub day: Day,
    pub roles: Vec<Role>,
}

/// Per-monitor audit counts.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorSummary {
    pub name: String,
    pub am1: u32,
    pub am2: u32,
    pub pm: u32,
    pub monitoring_total: u32,
    pub normal: u32,
    pub remote: u32,
    pub other: u32,
    pub remote_quota: u32,
}

/// What a run hands back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RosterOutcome {
    /// Roster order; aligns with every `DayRow::roles`.
    pub monitors: Vec<String>,
    /// Chronological, one row per business day.
    pub grid: Vec<DayRow>,
    pub summaries: Vec<MonitorSummary>,
    /// Days the remote solver had to leave short (0 = fully solved).
    pub unresolved_remote_days: u32,
}

impl RosterOutcome {
    /// Look up one cell by monitor name.
    pub fn role_of(&self, monitor: &str, day: Day) -> Option<Role> {
        let idx = self.monitors.iter().position(|name| name == monitor)?;
        self.grid
            .iter()
            .find(|row| row.day == day)
            .map(|row| row.roles[idx])
    }
}
