//! Candidate (AM1, AM2, PM) triples for one day.

use crate::monitor::Roster;
use crate::role::Role;
use crate::types::MonitorId;

/// One candidate assignment of a day's three monitoring slots.
/// Ephemeral: generated once per run, filtered per day, committed on
/// selection; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorCombo {
    pub am1: MonitorId,
    pub am2: MonitorId,
    pub pm: MonitorId,
}

impl MonitorCombo {
    /// The monitoring slot this combo gives to `monitor`, if any.
    pub fn role_of(&self, monitor: MonitorId) -> Option<Role> {
        if monitor == self.am1 {
            Some(Role::Am1)
        } else if monitor == self.am2 {
            Some(Role::Am2)
        } else if monitor == self.pm {
            Some(Role::Pm)
        } else {
            None
        }
    }

    pub fn contains(&self, monitor: MonitorId) -> bool {
        self.role_of(monitor).is_some()
    }
}

/// All ordered triples of distinct monitors where AM1 or AM2 is a fix
/// specialist. Fewer than three monitors yield no combos. The set is
/// computed once per run and shared, read-only, across every day and
/// every trial.
pub fn gen_monitor_combos(roster: &Roster) -> Vec<MonitorCombo> {
    let mut combos = Vec::new();
    if roster.len() < 3 {
        return combos;
    }
    for am1 in roster.ids() {
        for am2 in roster.ids() {
            if am2 == am1 {
                continue;
            }
            if !roster.get(am1).is_fix_specialist && !roster.get(am2).is_fix_specialist {
                continue;
            }
            for pm in roster.ids() {
                if pm == am1 || pm == am2 {
                    continue;
                }
                combos.push(MonitorCombo { am1, am2, pm });
            }
        }
    }
    combos
}
