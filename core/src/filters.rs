//! The two-tier constraint filter chain.
//!
//! Each named filter is a predicate factory: instantiated against the
//! current schedule state and one day, it emits zero or more concrete
//! predicates over a candidate combo (duty side) or a candidate remote
//! set (remote side). A candidate survives only if every active
//! predicate accepts it. Hard filters must hold in any accepted result;
//! soft filters are dropped when the solvers escalate.
//!
//! "Previous/next day" below always means the calendar-adjacent date,
//! not the adjacent business day: a Friday PM does not block a Monday AM.

use crate::combo::MonitorCombo;
use crate::monitor::OfficeGroup;
use crate::role::{Role, RoleSet, MONITORING_ROLES};
use crate::schedule::ScheduleState;
use crate::types::{Day, MonitorId};
use serde::{Deserialize, Serialize};

/// Filter priority. `Hard` survives every escalation tier; `Soft` is
/// dropped once the solvers relax. Ordered so `tier <= ceiling` selects
/// the active chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterTier {
    Hard = 1,
    Soft = 2,
}

/// Per-run on/off switches, one per named filter. Everything defaults
/// on; a disabled filter is excluded from the chain for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterToggles {
    pub manual_input: bool,
    pub monitoring_max: bool,
    pub am_am_in_a_row: bool,
    pub pm_am_in_a_row: bool,
    pub pm_pm_in_a_row: bool,
    pub remote_two_days_in_a_row: bool,
    pub must_work_at_office: bool,
    pub remote_max: bool,
}

impl Default for FilterToggles {
    fn default() -> Self {
        Self {
            manual_input: true,
            monitoring_max: true,
            am_am_in_a_row: true,
            pm_am_in_a_row: true,
            pm_pm_in_a_row: true,
            remote_two_days_in_a_row: true,
            must_work_at_office: true,
            remote_max: true,
        }
    }
}

// ── Duty side ────────────────────────────────────────────────────────────────

/// The named filters over candidate combos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DutyFilter {
    ManualInput,
    MonitoringMax,
    AmAmInARow,
    PmAmInARow,
    PmPmInARow,
}

pub const DUTY_FILTERS: [DutyFilter; 5] = [
    DutyFilter::ManualInput,
    DutyFilter::MonitoringMax,
    DutyFilter::AmAmInARow,
    DutyFilter::PmAmInARow,
    DutyFilter::PmPmInARow,
];

impl DutyFilter {
    pub fn tier(self) -> FilterTier {
        match self {
            DutyFilter::ManualInput | DutyFilter::MonitoringMax => FilterTier::Hard,
            DutyFilter::AmAmInARow | DutyFilter::PmAmInARow | DutyFilter::PmPmInARow => {
                FilterTier::Soft
            }
        }
    }

    fn enabled(self, toggles: &FilterToggles) -> bool {
        match self {
            DutyFilter::ManualInput => toggles.manual_input,
            DutyFilter::MonitoringMax => toggles.monitoring_max,
            DutyFilter::AmAmInARow => toggles.am_am_in_a_row,
            DutyFilter::PmAmInARow => toggles.pm_am_in_a_row,
            DutyFilter::PmPmInARow => toggles.pm_pm_in_a_row,
        }
    }

    /// Instantiate this filter's predicates for one monitor on `day`.
    fn build(self, state: &ScheduleState, id: MonitorId, day: Day, out: &mut Vec<ComboPredicate>) {
        let ms = state.monitor(id);
        let role_on = |d: Option<Day>| d.and_then(|d| ms.role_on(d));
        let prev = day.pred_opt();
        let next = day.succ_opt();
        match self {
            DutyFilter::ManualInput => {
                if let Some(role) = ms.role_on(day) {
                    if role.is_monitoring() {
                        out.push(ComboPredicate::MustHold { monitor: id, role });
                    } else if role == Role::Other {
                        out.push(ComboPredicate::MustBeOut { monitor: id });
                    }
                }
            }
            DutyFilter::MonitoringMax => {
                let mut roles = RoleSet::EMPTY;
                for &role in &MONITORING_ROLES {
                    if ms.at_role_max(role) {
                        roles = roles.with(role);
                    }
                }
                if !roles.is_empty() {
                    out.push(ComboPredicate::MustNotHold { monitor: id, roles });
                }
            }
            DutyFilter::AmAmInARow => {
                if role_on(prev).is_some_and(Role::is_am) || role_on(next).is_some_and(Role::is_am)
                {
                    out.push(ComboPredicate::MustNotHold {
                        monitor: id,
                        roles: RoleSet::AM,
                    });
                }
            }
            DutyFilter::PmAmInARow => {
                if role_on(prev) == Some(Role::Pm) {
                    out.push(ComboPredicate::MustNotHold {
                        monitor: id,
                        roles: RoleSet::AM,
                    });
                }
                if role_on(next) == Some(Role::Pm) {
                    out.push(ComboPredicate::MustNotHold {
                        monitor: id,
                        roles: RoleSet::single(Role::Pm),
                    });
                }
            }
            DutyFilter::PmPmInARow => {
                if role_on(prev) == Some(Role::Pm) || role_on(next) == Some(Role::Pm) {
                    out.push(ComboPredicate::MustNotHold {
                        monitor: id,
                        roles: RoleSet::single(Role::Pm),
                    });
                }
            }
        }
    }
}

/// A concrete, instantiated duty predicate.
#[derive(Debug, Clone, Copy)]
pub enum ComboPredicate {
    /// The combo must place `monitor` in exactly `role`.
    MustHold { monitor: MonitorId, role: Role },
    /// The combo must not place `monitor` in any role in `roles`.
    MustNotHold { monitor: MonitorId, roles: RoleSet },
    /// The combo must not contain `monitor` at all.
    MustBeOut { monitor: MonitorId },
}

impl ComboPredicate {
    pub fn accepts(&self, combo: &MonitorCombo) -> bool {
        match *self {
            ComboPredicate::MustHold { monitor, role } => combo.role_of(monitor) == Some(role),
            ComboPredicate::MustNotHold { monitor, roles } => {
                combo.role_of(monitor).map_or(true, |r| !roles.contains(r))
            }
            ComboPredicate::MustBeOut { monitor } => !combo.contains(monitor),
        }
    }
}

/// Flatten every enabled duty filter with tier ≤ `ceiling` into one
/// predicate list for `day`, monitor by monitor in roster order.
pub fn duty_predicates(
    state: &ScheduleState,
    day: Day,
    ceiling: FilterTier,
    toggles: &FilterToggles,
) -> Vec<ComboPredicate> {
    let mut out = Vec::new();
    for (id, _) in state.iter() {
        for filter in DUTY_FILTERS {
            if filter.tier() <= ceiling && filter.enabled(toggles) {
                filter.build(state, id, day, &mut out);
            }
        }
    }
    out
}

// ── Remote side ──────────────────────────────────────────────────────────────

/// The named filters over candidate remote sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteFilter {
    RemoteTwoDaysInARow,
    MustWorkAtOffice,
    RemoteMax,
}

pub const REMOTE_FILTERS: [RemoteFilter; 3] = [
    RemoteFilter::RemoteTwoDaysInARow,
    RemoteFilter::MustWorkAtOffice,
    RemoteFilter::RemoteMax,
];

impl RemoteFilter {
    pub fn tier(self) -> FilterTier {
        match self {
            RemoteFilter::RemoteTwoDaysInARow => FilterTier::Soft,
            RemoteFilter::MustWorkAtOffice | RemoteFilter::RemoteMax => FilterTier::Hard,
        }
    }

    fn enabled(self, toggles: &FilterToggles) -> bool {
        match self {
            RemoteFilter::RemoteTwoDaysInARow => toggles.remote_two_days_in_a_row,
            RemoteFilter::MustWorkAtOffice => toggles.must_work_at_office,
            RemoteFilter::RemoteMax => toggles.remote_max,
        }
    }

    fn build(
        self,
        state: &ScheduleState,
        day: Day,
        groups: &[OfficeGroup],
        out: &mut Vec<RemotePredicate>,
    ) {
        match self {
            RemoteFilter::RemoteTwoDaysInARow => {
                let prev = day.pred_opt();
                let next = day.succ_opt();
                for (id, ms) in state.iter() {
                    let remote_on =
                        |d: Option<Day>| d.and_then(|d| ms.role_on(d)) == Some(Role::Remote);
                    if remote_on(prev) || remote_on(next) {
                        out.push(RemotePredicate::Excludes { monitor: id });
                    }
                }
            }
            RemoteFilter::MustWorkAtOffice => {
                for group in groups {
                    let still_at_office: Vec<MonitorId> = group
                        .members
                        .iter()
                        .copied()
                        .filter(|&m| {
                            !state.role_on(m, day).is_some_and(Role::is_away_from_office)
                        })
                        .collect();
                    // A group already fully absent constrains nothing today.
                    if !still_at_office.is_empty() {
                        out.push(RemotePredicate::KeepsOneAtOffice { still_at_office });
                    }
                }
            }
            RemoteFilter::RemoteMax => {
                for (id, ms) in state.iter() {
                    if ms.at_role_max(Role::Remote) {
                        out.push(RemotePredicate::Excludes { monitor: id });
                    }
                }
            }
        }
    }
}

/// A concrete, instantiated predicate over a candidate remote set.
#[derive(Debug, Clone)]
pub enum RemotePredicate {
    /// `monitor` may not be in the candidate set.
    Excludes { monitor: MonitorId },
    /// The candidate set must leave at least one of these monitors in
    /// the office, i.e. must not contain them all.
    KeepsOneAtOffice { still_at_office: Vec<MonitorId> },
}

impl RemotePredicate {
    pub fn accepts(&self, candidates: &[MonitorId]) -> bool {
        match self {
            RemotePredicate::Excludes { monitor } => !candidates.contains(monitor),
            RemotePredicate::KeepsOneAtOffice { still_at_office } => {
                !still_at_office.iter().all(|m| candidates.contains(m))
            }
        }
    }
}

/// Flatten every enabled remote filter with tier ≤ `ceiling` into one
/// predicate list for `day`.
pub fn remote_predicates(
    state: &ScheduleState,
    day: Day,
    groups: &[OfficeGroup],
    ceiling: FilterTier,
    toggles: &FilterToggles,
) -> Vec<RemotePredicate> {
    let mut out = Vec::new();
    for filter in REMOTE_FILTERS {
        if filter.tier() <= ceiling && filter.enabled(toggles) {
            filter.build(state, day, groups, &mut out);
        }
    }
    out
}
